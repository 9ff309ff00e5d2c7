use crate::requests::ApiRequest;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

#[derive(Debug)]
pub struct BackendResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Thin GET-only transport to the statistics backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Sends the request and returns the raw status and body. No timeout is
    /// set and nothing is retried.
    pub async fn send(&self, request: &ApiRequest) -> Result<BackendResponse, reqwest::Error> {
        let url = request.url(&self.base_url);
        debug!(operation = request.operation.name(), %url, "backend request");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(BackendResponse { status, body })
    }
}
