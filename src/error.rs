//! Error types for minop.

use thiserror::Error;

/// Errors that can occur in minop.
#[derive(Debug, Error)]
pub enum MinopError {
    /// A statement against the embedded database failed.
    ///
    /// Carries the engine's message prefixed with what was being attempted.
    #[error("{0}")]
    Database(String),

    /// Configuration could not be resolved, read or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A host list file could not be parsed.
    #[error("Host list error at line {line}: {message}")]
    HostList {
        /// 1-based line number in the source file.
        line: usize,
        /// What went wrong, including the offending text.
        message: String,
    },

    /// A referenced record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User input was rejected before reaching storage.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization of command output failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_is_verbatim() {
        let err = MinopError::Database("Failed to create host group: disk I/O error".to_string());
        assert_eq!(err.to_string(), "Failed to create host group: disk I/O error");
    }

    #[test]
    fn test_host_list_error_names_line() {
        let err = MinopError::HostList {
            line: 7,
            message: "empty username: root@10.0.0.1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Host list error at line 7: empty username: root@10.0.0.1"
        );
    }
}
