pub mod channel;
pub mod dispatch;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use dispatch::{CommandRequest, DispatchError, Dispatcher};
pub use error::{Result as ServerErrorResult, ServerError};
