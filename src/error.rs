//! Error taxonomy
//!
//! Analysis itself has no failure modes: missing components come back as empty
//! collections or `None`, malformed Markdown degrades to literal text. The variants here
//! cover the edges around it: strict size checks, configuration, and CLI output.

use thiserror::Error;

/// Errors surfaced by pagesmith.
#[derive(Debug, Error)]
pub enum Error {
    /// Content exceeded the configured cap while the reject policy was active.
    #[error("input too large: {len} bytes exceeds the {max} byte limit")]
    InputTooLarge { len: usize, max: usize },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_too_large_message() {
        let err = Error::InputTooLarge {
            len: 60_000,
            max: 50_000,
        };
        assert_eq!(
            err.to_string(),
            "input too large: 60000 bytes exceeds the 50000 byte limit"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("missing"));
    }
}
