/// Error types for catastrophe records and the listing source
use thiserror::Error;

/// Errors raised while reading a catastrophe record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatastropheError {
    /// The record carries no arrival date
    #[error("{name} has no arrival date")]
    MissingArrival { name: String },

    /// The arrival date is not a recognised ISO-8601 instant
    #[error("{name} has an unreadable arrival date {value:?}")]
    InvalidArrival { name: String, value: String },

    /// The listing body is neither an envelope nor a bare list
    #[error("Failed to parse catastrophe listing: {0}")]
    ListingParse(String),
}

/// Errors raised while retrieving the listing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    /// The request never produced a response
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    /// The server answered with a non-success status
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    /// The body could not be read or decoded
    #[error(transparent)]
    Body(#[from] CatastropheError),
}

/// Type alias for Results using CatastropheError
pub type Result<T> = std::result::Result<T, CatastropheError>;
