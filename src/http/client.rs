//! Thin JSON-over-HTTP client.

use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};

use super::error::check_status;

/// JSON HTTP client. Every call is exactly one round trip; nothing is cached or retried.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);
        self.send_json(self.client.get(url)).await
    }

    /// Performs a GET request with query parameters and deserializes the JSON response.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        debug!("GET JSON from {} with query {:?}...", url, query);
        self.send_json(with_query(self.client.get(url), query)).await
    }

    /// Performs a POST request with a JSON body and deserializes the JSON response.
    #[tracing::instrument(skip(self, query, body))]
    pub async fn post_json<T, B>(&self, url: &str, query: &[(&str, String)], body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!("POST JSON to {} with query {:?}...", url, query);
        self.send_json(with_query(self.client.post(url), query).json(body))
            .await
    }

    /// Performs a POST request without a body and deserializes the JSON response.
    #[tracing::instrument(skip(self, query))]
    pub async fn post_empty_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        debug!("POST to {} with query {:?}...", url, query);
        self.send_json(with_query(self.client.post(url), query)).await
    }

    /// Performs a DELETE request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn delete_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("DELETE {}...", url);
        self.send_json(self.client.delete(url)).await
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.context("Failed to send request")?;
        let response = check_status(response).await?;

        response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")
    }
}

fn with_query(request: RequestBuilder, query: &[(&str, String)]) -> RequestBuilder {
    if query.is_empty() {
        request
    } else {
        request.query(query)
    }
}
