use thiserror::Error;

use crate::permissions::PermissionDecodeError;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("user '{0}' not found")]
    UserNotFound(String),
    #[error("table '{0}' not found")]
    TableNotFound(String),
    #[error("stored permissions for '{username}' are malformed: {source}")]
    PermissionDecode {
        username: String,
        source: PermissionDecodeError,
    },
    #[error("{kind}: {message}")]
    Decode { kind: &'static str, message: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("permissions for '{0}' changed while updating; nothing was written")]
    ConcurrentUpdate(String),
    #[error("{kind}: {message}")]
    Storage { kind: &'static str, message: String },
}

impl AdminError {
    pub fn storage(kind: &'static str, message: impl Into<String>) -> Self {
        Self::Storage {
            kind,
            message: message.into(),
        }
    }

    pub fn decode(kind: &'static str, message: impl Into<String>) -> Self {
        Self::Decode {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

pub type AdminResult<T> = Result<T, AdminError>;
