#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `.dat` line that does not split into the six pipe-delimited
    /// fields. Carries the offending line verbatim.
    #[error("Invalid response line: {0}")]
    InvalidLine(String),
}
