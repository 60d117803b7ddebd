//! Error raised for non-success HTTP responses.

use log::debug;
use reqwest::{Response, StatusCode};
use serde_json::Value;

/// A response whose status is outside the success range.
///
/// `detail` holds the server-supplied message when the body was JSON with a
/// `detail` field (the shape FastAPI uses for its errors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    status: StatusCode,
    detail: Option<String>,
}

impl HttpError {
    /// A blank detail is treated as absent.
    pub fn new(status: StatusCode, detail: Option<String>) -> Self {
        let detail = detail.filter(|detail| !detail.trim().is_empty());
        Self { status, detail }
    }

    /// Builds the error from a raw response body, extracting `detail` if present.
    pub fn from_body(status: StatusCode, body: &str) -> Self {
        Self::new(status, extract_detail(body))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            Some(detail) => write!(
                f,
                "HTTP error! status: {}, message: {}",
                self.status.as_u16(),
                detail
            ),
            None => write!(f, "HTTP error! status: {}", self.status.as_u16()),
        }
    }
}

impl std::error::Error for HttpError {}

/// Pulls the `detail` field out of an error body.
///
/// Validation errors carry a list rather than a string; those are rendered
/// as compact JSON so nothing the server said is lost.
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(detail) if detail.trim().is_empty() => None,
        Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}

/// Passes successful responses through and turns everything else into an [`HttpError`].
pub(crate) async fn check_status(response: Response) -> anyhow::Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    debug!("Request failed with status {}: {}", status, body);
    Err(anyhow::Error::from(HttpError::from_body(status, &body)))
}
