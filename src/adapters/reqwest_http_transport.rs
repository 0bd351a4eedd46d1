use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;

use crate::core::interfaces::adapters::HttpTransport;
use crate::core::models::{FetchFault, SearchRequest, TransportResponse};
use crate::global_constants;

pub struct ReqwestHttpTransport {
    client: reqwest::Client,
}

impl ReqwestHttpTransport {
    pub fn build() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(global_constants::HTTP_USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

fn classify_transport_error(error: reqwest::Error) -> FetchFault {
    if error.is_timeout() {
        FetchFault::Timeout(error.to_string())
    } else if error.is_connect() {
        FetchFault::Connection(error.to_string())
    } else {
        FetchFault::Transport(error.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestHttpTransport {
    async fn execute(&self, request: &SearchRequest) -> Result<TransportResponse, FetchFault> {
        log::debug!("[HTTP] GET {} ({})", request.url, request.source);

        let response = self
            .client
            .get(&request.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        log::debug!("[HTTP] {} responded with {}", request.source, status);

        // Error bodies are never decoded, so they are not read either.
        if !status.is_success() {
            return Ok(TransportResponse::new(status.as_u16(), String::new()));
        }

        let body = response.text().await.map_err(classify_transport_error)?;

        Ok(TransportResponse::new(status.as_u16(), body))
    }
}
