#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Non-2xx reply; carries the status line text, the only error
    /// signal the legacy backend gives.
    #[error("Status code: {0}")]
    StatusCode(String),

    #[error("Parse error: {0}")]
    Parse(#[from] nichan_types::error::Error),

    #[error("Invalid response")]
    InvalidResponse,
}
