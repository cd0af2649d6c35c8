//! Error handling for Larder.
//! One error enum per subsystem, `thiserror` only, wrapped by [`LarderError`].

pub mod config_error;
pub mod larder_error;
pub mod storage_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use larder_error::{LarderError, LarderResult};
pub use storage_error::StorageError;
pub use validation_error::ValidationError;
