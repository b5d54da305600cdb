pub mod cli;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;

pub use error::HarnessError;
pub use services::runner::UploadRunner;
pub use services::storage::{MultipartBackend, S3MultipartBackend};
