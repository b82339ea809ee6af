use thiserror::Error;

/// Failures surfaced to the person using the client. Every variant renders
/// as a message fit for display.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("A request is already in progress")]
    Busy,

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Location unavailable: {0}")]
    Geolocation(String),
}
