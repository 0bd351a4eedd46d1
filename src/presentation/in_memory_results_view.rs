use std::sync::{Mutex, MutexGuard};

use serde::Serialize;

use crate::core::interfaces::ports::ResultsView;
use crate::core::models::{ImageEntry, ListEntry, RelatedWord, ResultList, UserNotice};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultsSnapshot {
    pub images: Vec<ImageEntry>,
    pub words: Vec<RelatedWord>,
    pub notices: Vec<UserNotice>,
}

/// Keeps both lists in memory. Backs `--json` output and headless tests.
#[derive(Default)]
pub struct InMemoryResultsView {
    state: Mutex<ResultsSnapshot>,
}

impl InMemoryResultsView {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_state(&self) -> MutexGuard<'_, ResultsSnapshot> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> ResultsSnapshot {
        self.lock_state().clone()
    }

    pub fn images(&self) -> Vec<ImageEntry> {
        self.lock_state().images.clone()
    }

    pub fn words(&self) -> Vec<RelatedWord> {
        self.lock_state().words.clone()
    }

    pub fn notices(&self) -> Vec<UserNotice> {
        self.lock_state().notices.clone()
    }

    pub fn clear_notices(&self) {
        self.lock_state().notices.clear();
    }
}

impl ResultsView for InMemoryResultsView {
    fn clear_list(&self, list: ResultList) {
        let mut state = self.lock_state();
        match list {
            ResultList::Images => state.images.clear(),
            ResultList::Words => state.words.clear(),
        }
    }

    fn append_entry(&self, list: ResultList, entry: ListEntry) {
        let mut state = self.lock_state();
        match (list, entry) {
            (ResultList::Images, ListEntry::Image(image)) => state.images.push(image),
            (ResultList::Words, ListEntry::Word(word)) => state.words.push(word),
            (list, entry) => {
                log::warn!("[MEMORY_VIEW] Ignoring {:?} appended to {:?} list", entry, list);
            }
        }
    }

    fn show_notice(&self, notice: &UserNotice) {
        self.lock_state().notices.push(notice.clone());
    }
}
