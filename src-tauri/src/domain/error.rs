//! Domain Errors
//!
//! Failure kinds of a catalog read.

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The request never produced a response
    Network(String),
    /// The server answered with a non-success status
    Status(u16),
    /// The body was not a product array
    Decode(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Network(msg) => write!(f, "Network error: {}", msg),
            DomainError::Status(code) => write!(f, "Unexpected status: {}", code),
            DomainError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
