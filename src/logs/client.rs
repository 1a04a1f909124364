//! Client for the logs.tf API.
//!
//! # Example
//!
//! ```no_run
//! use logstf_client_sdk::logs::{Client, types::SearchRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! let request = SearchRequest::builder()
//!     .map("cp_process_final")
//!     .limit(10)
//!     .build();
//!
//! let page = client.search(&request).await?;
//! for log in page.logs {
//!     println!("{}: {}", log.id, log.title);
//! }
//! # Ok(())
//! # }
//! ```

use bon::Builder;
use bytes::Bytes;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
    multipart::{Form, Part},
};
use secrecy::{ExposeSecret as _, SecretString};
use url::Url;

use super::types::request::{LogFile, SearchRequest, UploadRequest};
use super::types::response::{LogById, LogSearchResponse, UploadResponse};
use super::types::{MAX_SEARCH_LIMIT, is_none_or_blank};
use crate::error::Error;
use crate::{Result, ToQueryParams as _};

/// The default logs.tf JSON API host.
pub const DEFAULT_HOST: &str = "https://logs.tf/api/v1";

/// The default endpoint uploads are posted to. The API key travels in the form body, so this
/// must stay on TLS.
const DEFAULT_UPLOAD_URL: &str = "https://logs.tf/upload";

/// The default host serving zipped raw logs.
const DEFAULT_ARCHIVE_HOST: &str = "http://logs.tf";

/// Uploader name sent when neither the request nor the [`Config`] sets one.
pub const DEFAULT_UPLOADER: &str = "logstf-rs-sdk";

/// Options for a [`Client`]. Every field is optional; the defaults talk to logs.tf anonymously.
///
/// # Example
///
/// ```
/// use logstf_client_sdk::logs::Config;
///
/// let config = Config::builder()
///     .api_key("0123456789abcdef".to_owned())
///     .build();
/// ```
#[derive(Clone, Debug, Default, Builder)]
pub struct Config {
    /// logs.tf API key. Only [`Client::upload_log`] needs it. The key is sent as a form field to
    /// the upload endpoint, so an `upload_url` override should be `https` outside of tests.
    #[builder(into)]
    api_key: Option<SecretString>,
    /// Uploader name used when an [`UploadRequest`] does not set one. Defaults to
    /// [`DEFAULT_UPLOADER`].
    #[builder(into)]
    uploader: Option<String>,
    /// Override for the upload endpoint. Defaults to `https://logs.tf/upload`.
    /// This is primarily useful for testing.
    #[builder(into)]
    upload_url: Option<String>,
    /// Override for the raw log archive host. Defaults to `http://logs.tf`.
    /// This is primarily useful for testing.
    #[builder(into)]
    archive_host: Option<String>,
}

/// HTTP client for the logs.tf API.
///
/// Holds only immutable configuration, so it can be cloned and shared freely between tasks.
/// Every precondition is checked before a request is built; failures come back as
/// [`Kind::Validation`](crate::error::Kind::Validation) errors without touching the network.
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    upload_url: Url,
    archive_host: Url,
    api_key: Option<SecretString>,
    uploader: String,
    http: ReqwestClient,
}

impl Default for Client {
    fn default() -> Self {
        Client::new(DEFAULT_HOST, Config::default())
            .expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates a new client against `host`, e.g. `https://logs.tf/api/v1`.
    ///
    /// # Errors
    ///
    /// Returns an error if a host URL is invalid or the HTTP client fails to build.
    pub fn new(host: &str, config: Config) -> Result<Client> {
        let mut headers = HeaderMap::new();

        headers.insert("User-Agent", HeaderValue::from_static("logstf-rs-sdk"));
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        let http = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self {
            host: directory_url(host)?,
            upload_url: Url::parse(config.upload_url.as_deref().unwrap_or(DEFAULT_UPLOAD_URL))?,
            archive_host: directory_url(
                config.archive_host.as_deref().unwrap_or(DEFAULT_ARCHIVE_HOST),
            )?,
            api_key: config.api_key,
            uploader: config
                .uploader
                .unwrap_or_else(|| DEFAULT_UPLOADER.to_owned()),
            http,
        })
    }

    /// Returns the JSON API host, always ending in `/`.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Returns the endpoint uploads are posted to.
    #[must_use]
    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }

    /// Fetches a full log by id.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `log_id` is blank, otherwise any transport or decoding
    /// error.
    pub async fn get_by_id(&self, log_id: &str) -> Result<LogById> {
        let log_id = validate_log_id(log_id)?;
        let url = endpoint(&self.host, &["log", log_id])?;

        let request = self.http.request(Method::GET, url).build()?;

        crate::request(&self.http, request).await
    }

    /// Searches logs. Only the single page described by `limit` and `offset` is fetched.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use logstf_client_sdk::logs::{Client, types::SearchRequest};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::default();
    /// let request = SearchRequest::builder()
    ///     .player(vec!["76561197960287930".to_owned()])
    ///     .limit(5)
    ///     .build();
    ///
    /// let page = client.search(&request).await?;
    /// println!("{} of {} logs", page.results, page.total);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a validation error if `limit` exceeds 10,000, otherwise any transport or
    /// decoding error.
    pub async fn search(&self, request: &SearchRequest) -> Result<LogSearchResponse> {
        if request.limit > MAX_SEARCH_LIMIT {
            return Err(Error::validation(
                "Cannot take more than 10,000 logs at a time",
            ));
        }

        let query = request.query_params();
        let request = self
            .http
            .request(Method::GET, format!("{}log{query}", self.host))
            .build()?;

        crate::request(&self.http, request).await
    }

    /// Uploads a log file as a `multipart/form-data` POST.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use logstf_client_sdk::logs::{Client, Config, types::{LogFile, UploadRequest}};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config::builder()
    ///     .api_key(std::env::var(logstf_client_sdk::API_KEY_VAR)?)
    ///     .build();
    /// let client = Client::new("https://logs.tf/api/v1", config)?;
    ///
    /// let file = LogFile::new(std::fs::read("match.log")?, "match.log");
    /// let request = UploadRequest::builder().title("RED vs BLU").build();
    ///
    /// let response = client.upload_log(file, &request).await?;
    /// println!("uploaded: {:?}", response.url);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a validation error if the client has no API key or the title is blank (checked
    /// in that order), otherwise any transport or decoding error.
    pub async fn upload_log(
        &self,
        file: LogFile,
        request: &UploadRequest,
    ) -> Result<UploadResponse> {
        let key = self
            .api_key
            .as_ref()
            .filter(|key| !is_none_or_blank(Some(key.expose_secret())))
            .ok_or_else(|| {
                Error::validation("Expected a valid API key, got a nullish value instead")
            })?;

        if is_none_or_blank(Some(request.title.as_str())) {
            return Err(Error::validation("Title cannot be empty!"));
        }

        let length = file.bytes.len() as u64;
        let mut logfile = Part::stream_with_length(file.bytes, length).file_name(file.file_name);
        if let Some(mime) = file.mime.as_deref() {
            logfile = logfile.mime_str(mime)?;
        }

        let form = request
            .text_fields(key, &self.uploader)
            .into_iter()
            .fold(Form::new().part("logfile", logfile), |form, (name, value)| {
                form.text(name, value)
            });

        let request = self
            .http
            .request(Method::POST, self.upload_url.clone())
            .multipart(form)
            .build()?;

        crate::request(&self.http, request).await
    }

    /// Downloads the zipped raw server log. The body is returned untouched.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `log_id` is blank, otherwise any transport error.
    pub async fn get_raw_log(&self, log_id: &str) -> Result<Bytes> {
        let url = self.raw_log_url(log_id)?;

        let request = self.http.request(Method::GET, url).build()?;

        crate::request_bytes(&self.http, request).await
    }

    /// The archive URL of a log's zipped raw server log: `{archive}/logs/log_{id}.log.zip`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `log_id` is blank.
    pub fn raw_log_url(&self, log_id: &str) -> Result<Url> {
        let log_id = validate_log_id(log_id)?;

        endpoint(&self.archive_host, &["logs", &format!("log_{log_id}.log.zip")])
    }
}

/// Blank ids are rejected, as are `.` and `..`, which a URL would resolve instead of sending.
fn validate_log_id(log_id: &str) -> Result<&str> {
    if is_none_or_blank(Some(log_id)) {
        return Err(Error::validation("LogId cannot be empty"));
    }

    let log_id = log_id.trim();
    if matches!(log_id, "." | "..") {
        return Err(Error::validation(format!("Invalid LogId {log_id}")));
    }

    Ok(log_id)
}

/// Appends `segments` below `base`, percent-encoding each one so an id can never add path
/// segments, a query, or a fragment of its own.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| Error::validation(format!("{base} cannot be a base URL")))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Parses `host` so that relative paths join below it rather than replacing its last segment.
fn directory_url(host: &str) -> Result<Url> {
    let url = if host.ends_with('/') {
        Url::parse(host)?
    } else {
        Url::parse(&format!("{host}/"))?
    };

    if url.cannot_be_a_base() {
        return Err(Error::validation(format!("{host} cannot be a base URL")));
    }

    Ok(url)
}
