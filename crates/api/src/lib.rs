//! HTTP client for 2channel-style board backends: fetches the legacy
//! Shift_JIS wire formats and submits posts through `bbs.cgi`.

pub mod charset;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod form;
pub mod response;
