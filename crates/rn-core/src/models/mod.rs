pub mod auth_status;
pub mod user_record;
