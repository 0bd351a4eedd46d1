use async_trait::async_trait;

use crate::core::models::{FetchFault, SearchRequest, TransportResponse};

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: &SearchRequest) -> Result<TransportResponse, FetchFault>;
}
