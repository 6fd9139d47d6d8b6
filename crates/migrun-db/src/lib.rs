pub mod naming;
pub mod pool;
pub mod runner;

pub use pool::Database;
pub use runner::{apply_directory, apply_file};
