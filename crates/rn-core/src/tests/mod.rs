mod identity;
mod user_record;
