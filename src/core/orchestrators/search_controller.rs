use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::core::fetchers::reported_api_failure;
use crate::core::interfaces::ports::ResultsView;
use crate::core::models::{
    AggregateResult, RenderLimits, ResultList, SearchTerm, SourceKind, UserNotice,
};
use crate::core::orchestrators::search_aggregator::SearchAggregator;
use crate::presentation::{render_images, render_words};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTrigger {
    SearchButton(String),
    SidebarTerm(String),
}

impl SearchTrigger {
    fn raw_input(&self) -> &str {
        match self {
            SearchTrigger::SearchButton(input) | SearchTrigger::SidebarTerm(input) => input,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchSummary {
    pub term: SearchTerm,
    pub generation: u64,
    pub images_rendered: usize,
    pub words_rendered: usize,
    pub aggregate: AggregateResult,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchReport {
    Rejected,
    Superseded { term: SearchTerm, generation: u64 },
    Completed(SearchSummary),
}

pub struct SearchController {
    aggregator: SearchAggregator,
    view: Arc<dyn ResultsView>,
    limits: RenderLimits,
    discard_stale_results: bool,
    generation: AtomicU64,
}

impl SearchController {
    pub fn build(
        aggregator: SearchAggregator,
        view: Arc<dyn ResultsView>,
        limits: RenderLimits,
        discard_stale_results: bool,
    ) -> Self {
        Self {
            aggregator,
            view,
            limits,
            discard_stale_results,
            generation: AtomicU64::new(0),
        }
    }

    pub async fn handle_trigger(&self, trigger: SearchTrigger) -> SearchReport {
        log::info!("[CONTROLLER] Received trigger: {:?}", trigger);

        let term = match SearchTerm::parse(Some(trigger.raw_input())) {
            Ok(term) => term,
            Err(e) => {
                log::info!("[CONTROLLER] Rejected trigger: {}", e);
                self.view.show_notice(&UserNotice::EmptyQuery);
                return SearchReport::Rejected;
            }
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.view.clear_list(ResultList::Images);
        self.view.clear_list(ResultList::Words);

        let aggregate = self.aggregator.run_search(&term).await;

        if self.is_stale(generation) {
            log::info!(
                "[CONTROLLER] Discarding results for '{}' (generation {}), a newer search started",
                term,
                generation
            );
            return SearchReport::Superseded { term, generation };
        }

        let images_rendered =
            render_images(&aggregate.images, self.view.as_ref(), self.limits.max_images);
        let words_rendered =
            render_words(&aggregate.words, self.view.as_ref(), self.limits.max_words);

        self.notify_failures(&aggregate);

        SearchReport::Completed(SearchSummary {
            term,
            generation,
            images_rendered,
            words_rendered,
            aggregate,
        })
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.discard_stale_results && self.generation.load(Ordering::SeqCst) != generation
    }

    fn notify_failures(&self, aggregate: &AggregateResult) {
        let mut failed_sources = 0;

        for source in [SourceKind::Images, SourceKind::Words] {
            if let Some(reason) = failure_reason(aggregate, source) {
                failed_sources += 1;
                self.view
                    .show_notice(&UserNotice::SourceFailed { source, reason });
            }
        }

        if failed_sources == 2 {
            log::error!("[CONTROLLER] Both sources failed");
            self.view.show_notice(&UserNotice::AllSourcesFailed);
        }
    }
}

/// Transport and status failures, plus a Flickr body that reports failure
/// with HTTP 200 (how an invalid key is answered).
fn failure_reason(aggregate: &AggregateResult, source: SourceKind) -> Option<String> {
    let outcome = aggregate.outcome_for(source);
    if let Some(reason) = outcome.failure_reason() {
        return Some(reason);
    }

    match (source, outcome.payload()) {
        (SourceKind::Images, Some(payload)) => {
            reported_api_failure(payload).map(|message| format!("API error: {}", message))
        }
        _ => None,
    }
}
