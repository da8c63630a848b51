use thiserror::Error;

/// Errors from a single call to the gateway admin API.
#[derive(Error, Debug)]
pub enum AdminError {
    /// The call never completed — refused connection, DNS failure, timeout.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway answered with a non-success status. Carries the literal
    /// status code and the response body verbatim.
    #[error("gateway returned {status}: {body}")]
    Gateway { status: u16, body: String },

    /// A success status whose body is not a service record.
    #[error("gateway returned an unreadable record: {0}")]
    Decode(#[from] serde_json::Error),
}
