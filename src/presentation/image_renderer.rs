use crate::core::fetchers::extract_image_entries;
use crate::core::interfaces::ports::ResultsView;
use crate::core::models::{FetchOutcome, ListEntry, ResultList};

/// Replaces the image list with entries from a successful outcome and
/// returns how many were appended. Failed outcomes leave the view untouched.
pub fn render_images(outcome: &FetchOutcome, view: &dyn ResultsView, max_entries: usize) -> usize {
    let Some(payload) = outcome.payload() else {
        log::debug!("[IMAGE_RENDERER] Skipping render for failed outcome");
        return 0;
    };

    let entries = extract_image_entries(payload, max_entries);
    let rendered = entries.len();

    view.clear_list(ResultList::Images);
    for entry in entries {
        view.append_entry(ResultList::Images, ListEntry::Image(entry));
    }

    log::debug!("[IMAGE_RENDERER] Rendered {} image entries", rendered);
    rendered
}
