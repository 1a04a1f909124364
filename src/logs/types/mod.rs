use serde::{Deserialize, Serialize};

pub mod request;
pub mod response;

pub use request::{LogFile, SearchRequest, UploadRequest};
pub use response::{LogById, LogSearchResponse, LogSummary, UploadResponse};

/// Number of logs returned by a search when no `limit` is given.
pub const DEFAULT_SEARCH_LIMIT: u32 = 1000;

/// The most logs a single search may request.
pub const MAX_SEARCH_LIMIT: u32 = 10_000;

/// A team in a TF2 match.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[non_exhaustive]
pub enum Team {
    Red,
    Blue,
    /// Any other value sent by logs.tf (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

/// Returns `true` when `value` is absent, empty, or only whitespace.
///
/// Every precondition on caller-supplied strings goes through this predicate.
pub(crate) fn is_none_or_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
