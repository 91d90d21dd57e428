use thiserror::Error;

/// The ways a single listing fetch can fail
#[derive(Debug, Error)]
pub enum ListingError {
    /// Connection, DNS or timeout failure before a response arrived
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("listing endpoint returned status {0}")]
    Status(u16),

    /// The body was not a valid result set
    #[error("malformed listing response: {0}")]
    Decode(reqwest::Error),
}
