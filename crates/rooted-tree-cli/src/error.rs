//! Error types for rooted-tree-cli

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for rooted-tree-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rooted-tree-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Tree construction failed
    #[error("Tree error: {0}")]
    Tree(#[from] rooted_tree::Error),

    /// Report rendering failed
    #[error("Report error: {0}")]
    Report(#[from] rooted_tree::report::Error),

    /// I/O error without a known path (stdin, stdout)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific file
    #[error("I/O error at {}: {source}", .path.display())]
    IoWithPath {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON node list could not be read or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file could not be parsed
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Input could not be turned into a tree
    #[error("Invalid input: {message}")]
    Input {
        /// What is wrong with the input
        message: String,
    },

    /// Requested node id is not in the tree
    #[error("Node not found: {id}")]
    NotFound {
        /// Id that was looked up
        id: String,
    },
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an input error.
    pub fn input<S: Into<String>>(message: S) -> Self {
        Error::Input {
            message: message.into(),
        }
    }

    /// Creates a not-found error for a node id.
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Error::NotFound { id: id.into() }
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::IoWithPath {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_constructors() {
        assert!(matches!(Error::config("bad"), Error::Config { message } if message == "bad"));
        assert!(matches!(Error::input("empty"), Error::Input { message } if message == "empty"));
        assert!(matches!(Error::not_found("/x"), Error::NotFound { id } if id == "/x"));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::config("missing dir").to_string(),
            "Configuration error: missing dir"
        );
        assert_eq!(Error::not_found("a").to_string(), "Node not found: a");
        assert_eq!(
            Error::from(rooted_tree::Error::ParentNodeDoesNotExist).to_string(),
            format!("Tree error: {}", rooted_tree::Error::ParentNodeDoesNotExist)
        );
    }

    #[test]
    fn test_io_with_path_display() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = Error::io_with_path(source, Path::new("/tmp/tree.json"));
        assert_eq!(error.to_string(), "I/O error at /tmp/tree.json: gone");
    }
}
