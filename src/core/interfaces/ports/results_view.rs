use crate::core::models::{ListEntry, ResultList, UserNotice};

/// Output surface the renderers and the controller write to. Implementations
/// own their storage; callers only clear, append and notify.
pub trait ResultsView: Send + Sync {
    fn clear_list(&self, list: ResultList);

    fn append_entry(&self, list: ResultList, entry: ListEntry);

    fn show_notice(&self, notice: &UserNotice);
}
