//! HTTP transport: one request, one response, non-success statuses become [`HttpError`].

mod client;
mod error;

pub use client::HttpClient;
pub use error::HttpError;
