//! Request types for the logs.tf API.
//!
//! All request types use the [`bon`](https://docs.rs/bon) crate for the builder pattern.

#![expect(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use bytes::Bytes;
use secrecy::{ExposeSecret as _, SecretString};
use serde::Serialize;
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as};

use super::{DEFAULT_SEARCH_LIMIT, is_none_or_blank};

/// File name sent with an upload when the caller does not pick one.
pub const DEFAULT_FILE_NAME: &str = "log.log";

/// Query parameters for `GET /log`.
///
/// Parameters are sent in declaration order: `limit`, `offset`, `map`, `player`, `title`,
/// `uploader`. `limit` and `offset` are always sent; the rest only when non-empty.
///
/// # Example
///
/// ```
/// use logstf_client_sdk::logs::types::SearchRequest;
///
/// let request = SearchRequest::builder()
///     .map("cp_process_final")
///     .player(vec!["76561197960287930".to_owned()])
///     .limit(50)
///     .build();
/// ```
#[serde_as]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct SearchRequest {
    /// Maximum number of logs to return (at most 10,000, default: 1000).
    #[builder(default = DEFAULT_SEARCH_LIMIT)]
    pub limit: u32,
    /// Pagination offset (default: 0).
    #[builder(default)]
    pub offset: u32,
    /// Exact map name, e.g. `cp_process_final`.
    #[builder(into)]
    #[serde(skip_serializing_if = "is_blank")]
    pub map: Option<String>,
    /// Steam ids that must all appear in the log. Sent comma-joined, in order.
    #[builder(default)]
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub player: Vec<String>,
    /// Title substring.
    #[builder(into)]
    #[serde(skip_serializing_if = "is_blank")]
    pub title: Option<String>,
    /// Steam id of the uploader.
    #[builder(into)]
    #[serde(skip_serializing_if = "is_blank")]
    pub uploader: Option<String>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[expect(clippy::ref_option, reason = "Need an explicit reference for serde")]
fn is_blank(value: &Option<String>) -> bool {
    is_none_or_blank(value.as_deref())
}

/// Form fields for `POST /upload`, besides the log file itself.
///
/// # Example
///
/// ```
/// use logstf_client_sdk::logs::types::UploadRequest;
///
/// let request = UploadRequest::builder()
///     .title("RED vs BLU")
///     .map("cp_gullywash_f9")
///     .build();
/// ```
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct UploadRequest {
    /// Log title shown on logs.tf. Must not be empty.
    #[builder(into)]
    pub title: String,
    /// Map name.
    #[builder(into)]
    pub map: Option<String>,
    /// Id of an existing log (uploaded with the same key) to replace with this one.
    #[builder(into)]
    pub updatelog: Option<String>,
    /// Uploader name reported to logs.tf. Falls back to the client's configured uploader.
    #[builder(into)]
    pub uploader: Option<String>,
}

impl UploadRequest {
    /// The text fields of the multipart body, in the order they are sent.
    ///
    /// `title`, `key` and `uploader` are always present; `updatelog` and `map` only when
    /// non-empty.
    pub(crate) fn text_fields(
        &self,
        key: &SecretString,
        default_uploader: &str,
    ) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("key", key.expose_secret().to_owned()),
            (
                "uploader",
                self.uploader
                    .clone()
                    .unwrap_or_else(|| default_uploader.to_owned()),
            ),
        ];

        if !is_none_or_blank(self.updatelog.as_deref()) {
            fields.push(("updatelog", self.updatelog.clone().unwrap_or_default()));
        }

        if !is_none_or_blank(self.map.as_deref()) {
            fields.push(("map", self.map.clone().unwrap_or_default()));
        }

        fields
    }
}

/// The log file sent as the `logfile` part of an upload.
///
/// # Example
///
/// ```
/// use logstf_client_sdk::logs::types::LogFile;
///
/// let file = LogFile::builder()
///     .bytes(b"L 01/01/2024 - 20:00:00: World triggered \"Round_Start\"\n".to_vec())
///     .file_name("match.log")
///     .build();
/// ```
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct LogFile {
    /// Raw file contents.
    #[builder(into)]
    pub bytes: Bytes,
    /// File name reported in the part's `Content-Disposition`.
    #[builder(into, default = String::from(DEFAULT_FILE_NAME))]
    pub file_name: String,
    /// Optional MIME type of the part, e.g. `text/plain`.
    #[builder(into)]
    pub mime: Option<String>,
}

impl LogFile {
    #[must_use]
    pub fn new<B: Into<Bytes>, N: Into<String>>(bytes: B, file_name: N) -> Self {
        Self {
            bytes: bytes.into(),
            file_name: file_name.into(),
            mime: None,
        }
    }
}
