//! Shared error type across routeacl crates.

use thiserror::Error;

/// Status reported to the host when a request is denied (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyStatus {
    /// No subject was identified.
    Unauthorized,
    /// An identified subject is not allowed.
    Forbidden,
}

impl DenyStatus {
    /// HTTP status code.
    pub fn code(self) -> u16 {
        match self {
            DenyStatus::Unauthorized => 401,
            DenyStatus::Forbidden => 403,
        }
    }

    /// String representation used in logs and host responses.
    pub fn as_str(self) -> &'static str {
        match self {
            DenyStatus::Unauthorized => "UNAUTHORIZED",
            DenyStatus::Forbidden => "FORBIDDEN",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AclError>;

/// Unified error type used by the engine and the host.
///
/// Access denial is not an error; it is the `false` outcome of a query.
#[derive(Debug, Error)]
pub enum AclError {
    #[error("unknown route alias: @{0}")]
    UnknownAlias(String),
    #[error("invalid path pattern: {0}")]
    InvalidPattern(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("io: {0}")]
    Io(String),
}

impl AclError {
    /// Stable, machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AclError::UnknownAlias(_) => "UNKNOWN_ALIAS",
            AclError::InvalidPattern(_) => "INVALID_PATTERN",
            AclError::Config(_) => "CONFIG",
            AclError::UnsupportedVersion => "UNSUPPORTED_VERSION",
            AclError::Io(_) => "IO",
        }
    }
}
