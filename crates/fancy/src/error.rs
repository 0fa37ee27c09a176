//! Error type for output operations.

use crate::config::ConfigError;

/// Error returned by operations that write to a sink or load configuration.
///
/// Rendering itself cannot fail: a type without a rendering rule is rejected
/// at compile time, so nothing here describes an unrenderable value.
#[derive(Debug, thiserror::Error)]
pub enum FancyError {
    /// Writing to or flushing the sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Loading the configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: FancyError = io_err.into();
        assert!(matches!(err, FancyError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: FancyError = ConfigError::UnknownRole {
            role: "sparkle".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Unknown palette role 'sparkle'");
    }
}
