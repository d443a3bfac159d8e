//! Error types for kickoff

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using kickoff's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was empty
    #[error("{argument} is required")]
    MissingArgument { argument: &'static str },

    /// Target path exists and already has entries
    #[error("{} is not an empty directory", .path.display())]
    NotEmpty { path: PathBuf },

    /// Target path exists but is not a directory
    #[error("{} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// Removal would take the working directory or one of its parents with it
    #[error("refusing to remove {}: it is the current directory or one of its parents", .path.display())]
    UnsafeRemoval { path: PathBuf },

    /// Required external CLI is not on PATH
    #[error("{tool} command is not found. please install {tool} to {purpose}")]
    ToolNotFound { tool: String, purpose: &'static str },

    /// External command could not start or exited non-zero
    #[error("`{command}` failed: {detail}")]
    CommandFailed { command: String, detail: String },

    /// Filesystem operation failed
    #[error("failed to {action} {}: {source}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Remote repository deletion failed
    #[error("unable to delete remote repository {name}: {source}")]
    RemoteDeletion {
        name: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a missing argument error
    pub fn missing_argument(argument: &'static str) -> Self {
        Self::MissingArgument { argument }
    }

    /// Create a tool not found error
    pub fn tool_not_found(tool: impl Into<String>, purpose: &'static str) -> Self {
        Self::ToolNotFound {
            tool: tool.into(),
            purpose,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            detail: detail.into(),
        }
    }

    /// Create a filesystem error for `action` on `path`
    pub fn filesystem(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }

    /// Wrap a failure of the remote deletion step
    pub fn remote_deletion(name: impl Into<String>, source: Error) -> Self {
        Self::RemoteDeletion {
            name: name.into(),
            source: Box::new(source),
        }
    }
}
