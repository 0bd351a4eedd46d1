pub mod search_aggregator;
pub mod search_controller;

pub use search_aggregator::SearchAggregator;
pub use search_controller::{SearchController, SearchReport, SearchSummary, SearchTrigger};
