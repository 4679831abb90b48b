//! Configuration validation errors

/// Errors found while validating a parsed config
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Remote name must not be empty")]
    EmptyRemoteName,

    #[error("Invalid remote name '{0}': names cannot contain whitespace")]
    InvalidRemoteName(String),

    #[error("Invalid window size {width}x{height} (both must be > 0)")]
    InvalidWindowSize { width: f32, height: f32 },
}
