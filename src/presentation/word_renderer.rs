use crate::core::fetchers::extract_related_words;
use crate::core::interfaces::ports::ResultsView;
use crate::core::models::{FetchOutcome, ListEntry, ResultList};

pub fn render_words(outcome: &FetchOutcome, view: &dyn ResultsView, max_entries: usize) -> usize {
    let Some(payload) = outcome.payload() else {
        log::debug!("[WORD_RENDERER] Skipping render for failed outcome");
        return 0;
    };

    let words = extract_related_words(payload, max_entries);
    let rendered = words.len();

    view.clear_list(ResultList::Words);
    for word in words {
        view.append_entry(ResultList::Words, ListEntry::Word(word));
    }

    log::debug!("[WORD_RENDERER] Rendered {} related words", rendered);
    rendered
}
