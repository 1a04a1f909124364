#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod error;
#[cfg(feature = "logs")]
pub mod logs;
pub(crate) mod serde_helpers;

#[cfg(feature = "logs")]
use bytes::Bytes;
#[cfg(feature = "logs")]
use reqwest::Request;
use serde::Serialize;
#[cfg(feature = "logs")]
use serde::de::DeserializeOwned;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Conventional environment variable holding a logs.tf API key. The SDK never reads it on its
/// own; it is provided so applications agree on a name.
pub const API_KEY_VAR: &str = "LOGSTF_API_KEY";

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string, so
/// parameters appear in field declaration order.
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise returns
    /// a string starting with `?` followed by URL-encoded key-value pairs.
    #[must_use]
    fn query_params(&self) -> String {
        let params = serde_html_form::to_string(self)
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Unable to convert to URL-encoded string {e:?}");
                #[cfg(not(feature = "tracing"))]
                let _: &serde_html_form::ser::Error = e;
            })
            .unwrap_or_default();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{params}")
        }
    }
}

impl<T: Serialize> ToQueryParams for T {}

/// Executes `request` and decodes a JSON body into `Response`. A body that does not decode is
/// returned as a [`Decode`](error::Decode) error carrying the raw text.
#[cfg(feature = "logs")]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request<Response: DeserializeOwned>(
    client: &reqwest::Client,
    request: Request,
) -> Result<Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = send(client, request).await?;
    let status_code = response.status();
    let body = response.text().await?;

    let decoded = serde_json::from_str::<serde_json::Value>(&body)
        .and_then(serde_helpers::deserialize_with_warnings);

    decoded.map_err(|source| {
        error::Decode {
            status_code,
            method,
            path,
            body,
            source,
        }
        .into()
    })
}

/// Executes `request` and returns the body untouched.
#[cfg(feature = "logs")]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request_bytes(client: &reqwest::Client, request: Request) -> Result<Bytes> {
    let response = send(client, request).await?;

    Ok(response.bytes().await?)
}

#[cfg(feature = "logs")]
async fn send(client: &reqwest::Client, request: Request) -> Result<reqwest::Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, message));
    }

    Ok(response)
}
