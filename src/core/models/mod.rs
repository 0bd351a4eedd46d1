mod fetch_outcome;
mod result_entries;
mod search_request;
mod search_term;

pub use fetch_outcome::{AggregateResult, FetchFault, FetchOutcome, SourceKind};
pub use result_entries::{ImageEntry, ListEntry, RelatedWord, RenderLimits, ResultList, UserNotice};
pub use search_request::{
    ApiEndpoints, ImageSearchEndpoint, SearchRequest, TransportResponse, WordRelationsEndpoint,
};
pub use search_term::{validate, InputError, SearchTerm};
