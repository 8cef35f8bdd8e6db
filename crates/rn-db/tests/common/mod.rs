pub mod test_db;

pub use test_db::{create_test_pool, seed_record};
