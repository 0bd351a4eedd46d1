use std::sync::Arc;

use crate::core::fetchers::{build_image_search_request, build_word_relations_request};
use crate::core::interfaces::adapters::HttpTransport;
use crate::core::models::{
    AggregateResult, ApiEndpoints, FetchFault, FetchOutcome, SearchRequest, SearchTerm,
    TransportResponse,
};

/// Fans one search term out to both remote sources and fans the two settled
/// responses back in. Always resolves; failures come back as outcomes.
pub struct SearchAggregator {
    transport: Arc<dyn HttpTransport>,
    endpoints: ApiEndpoints,
}

impl SearchAggregator {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoints: ApiEndpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub async fn run_search(&self, term: &SearchTerm) -> AggregateResult {
        let image_request = build_image_search_request(term, &self.endpoints.images);
        let word_request = build_word_relations_request(term, &self.endpoints.words);

        log::info!("[AGGREGATOR] Dispatching both fetches for '{}'", term);

        let (image_settled, word_settled) = futures::join!(
            self.transport.execute(&image_request),
            self.transport.execute(&word_request),
        );

        let aggregate = AggregateResult {
            images: classify_response(&image_request, image_settled),
            words: classify_response(&word_request, word_settled),
        };

        log::info!(
            "[AGGREGATOR] Search '{}' settled: images={}, words={}",
            term,
            describe(&aggregate.images),
            describe(&aggregate.words)
        );

        aggregate
    }
}

fn classify_response(
    request: &SearchRequest,
    settled: Result<TransportResponse, FetchFault>,
) -> FetchOutcome {
    let response = match settled {
        Ok(response) => response,
        Err(fault) => {
            log::warn!("[AGGREGATOR] {} transport failed: {}", request.source, fault);
            return FetchOutcome::NetworkError(fault);
        }
    };

    if !response.is_success() {
        log::warn!(
            "[AGGREGATOR] {} returned HTTP status {}",
            request.source,
            response.status
        );
        return FetchOutcome::HttpError(response.status);
    }

    match serde_json::from_str(&response.body) {
        Ok(payload) => FetchOutcome::Success(payload),
        Err(e) => {
            log::warn!("[AGGREGATOR] {} body is not valid JSON: {}", request.source, e);
            FetchOutcome::NetworkError(FetchFault::Decode(e.to_string()))
        }
    }
}

fn describe(outcome: &FetchOutcome) -> String {
    outcome
        .failure_reason()
        .unwrap_or_else(|| "ok".to_string())
}
