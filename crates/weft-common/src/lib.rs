pub mod errors;

pub use errors::{ConfigError, WeftError};

pub type Result<T> = std::result::Result<T, WeftError>;
