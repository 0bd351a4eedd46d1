mod image_renderer;
mod in_memory_results_view;
mod terminal_results_view;
mod word_renderer;

pub use image_renderer::render_images;
pub use in_memory_results_view::{InMemoryResultsView, ResultsSnapshot};
pub use terminal_results_view::TerminalResultsView;
pub use word_renderer::render_words;
