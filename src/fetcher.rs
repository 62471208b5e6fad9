use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::FetchError;
use crate::model::{FetchResult, Payload, ResourceRequest};

/// Single-shot JSON retrieval against one base URL.
///
/// No caching, retries or timeouts: each call is exactly one request.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    base: Url,
}

impl Fetcher {
    pub fn new(base: Url) -> Self {
        Self::with_client(Client::new(), base)
    }

    pub fn with_client(client: Client, base: Url) -> Self {
        Self { client, base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn resolve(&self, locator: &str) -> Result<Url, FetchError> {
        self.base
            .join(locator)
            .map_err(|err| FetchError::transport(locator, err))
    }

    pub async fn fetch(&self, request: &ResourceRequest) -> FetchResult {
        let url = self.resolve(request.url())?;
        debug!(%url, shape = ?request.shape(), "fetching resource");

        let response = self.send(Method::GET, url, None::<&()>).await?;
        let body = read_body(response).await?;
        Payload::decode(request.shape(), &body)
    }

    /// `POST`s `body` as JSON and returns the server's echo.
    pub async fn create<B: Serialize + ?Sized>(
        &self,
        locator: &str,
        body: &B,
    ) -> Result<Value, FetchError> {
        self.send_json(Method::POST, locator, Some(body)).await
    }

    /// `PUT`s `body` as JSON and returns the server's echo.
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        locator: &str,
        body: &B,
    ) -> Result<Value, FetchError> {
        self.send_json(Method::PUT, locator, Some(body)).await
    }

    pub async fn delete(&self, locator: &str) -> Result<(), FetchError> {
        let url = self.resolve(locator)?;
        self.send(Method::DELETE, url, None::<&()>).await?;
        Ok(())
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        locator: &str,
        body: Option<&B>,
    ) -> Result<Value, FetchError> {
        let url = self.resolve(locator)?;
        let response = self.send(method, url, body).await?;
        let bytes = read_body(response).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Response, FetchError> {
        let mut builder = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            // Sets `Content-Type: application/json`.
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| FetchError::transport(url.as_str(), err))?;

        let status = response.status();
        debug!(%method, %url, status = status.as_u16(), "response received");
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

async fn read_body(response: Response) -> Result<Vec<u8>, FetchError> {
    let url = response.url().to_string();
    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|err| FetchError::transport(url, err))
}
