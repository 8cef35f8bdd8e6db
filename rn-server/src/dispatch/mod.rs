pub mod command_request;
pub mod dispatcher;
pub mod error;
pub mod replies;

pub use command_request::CommandRequest;
pub use dispatcher::Dispatcher;
pub use error::DispatchError;
