pub mod constants;
pub mod error;
pub mod persist;
pub mod store;
pub mod types;
pub mod utils;
