// src/infrastructure/http.rs
use crate::application::MemoApi;
use crate::domain::{DomainError, Memo, MemoFields};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

/// `MemoApi` over HTTP/JSON against the memo collection endpoint.
#[derive(Debug, Clone)]
pub struct HttpMemoClient {
    base_url: Url,
    client: Client,
}

impl HttpMemoClient {
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, client: Client) -> Result<Self, DomainError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of a single memo: `{base_url}{id}`.
    pub fn memo_url(&self, id: i64) -> Result<Url, DomainError> {
        self.base_url
            .join(&id.to_string())
            .map_err(|e| DomainError::InvalidBaseUrl(e.to_string()))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, DomainError> {
        let response = request
            .send()
            .await
            .map_err(|e| DomainError::Request(e.to_string()))?;

        let status = response.status();
        debug!(%status, url = %response.url(), "Memo service responded");
        if !status.is_success() {
            return Err(DomainError::status(status.as_u16()));
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, DomainError> {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| DomainError::Request(format!("Invalid response body: {}", e)))
    }
}

impl MemoApi for HttpMemoClient {
    #[instrument(level = "debug", skip(self))]
    async fn list(&mut self) -> Result<Vec<Memo>, DomainError> {
        self.send_json(self.client.get(self.base_url.clone())).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn get(&mut self, id: i64) -> Result<Memo, DomainError> {
        let url = self.memo_url(id)?;
        self.send_json(self.client.get(url)).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn create(&mut self, fields: &MemoFields) -> Result<Memo, DomainError> {
        self.send_json(self.client.post(self.base_url.clone()).json(fields))
            .await
    }

    #[instrument(level = "debug", skip(self))]
    async fn update(&mut self, id: i64, fields: &MemoFields) -> Result<Memo, DomainError> {
        let url = self.memo_url(id)?;
        self.send_json(self.client.put(url).json(fields)).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete(&mut self, id: i64) -> Result<(), DomainError> {
        let url = self.memo_url(id)?;
        // The acknowledgement body is not needed.
        self.send(self.client.delete(url)).await.map(|_| ())
    }
}

/// Parse the endpoint and make sure ids join underneath it.
pub fn normalize_base_url(raw: &str) -> Result<Url, DomainError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&with_slash).map_err(|e| DomainError::InvalidBaseUrl(format!("{}: {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(DomainError::InvalidBaseUrl(format!(
            "{}: unsupported scheme {}",
            raw, other
        ))),
    }
}
