use std::io::Write;
use std::sync::Mutex;

use crate::core::interfaces::ports::ResultsView;
use crate::core::models::{ListEntry, ResultList, UserNotice};

#[derive(Default)]
struct ListCounters {
    images: usize,
    words: usize,
}

/// Streams entries to a writer as they are appended. Clearing a list starts
/// a fresh numbered section.
pub struct TerminalResultsView<W: Write + Send> {
    writer: Mutex<W>,
    counters: Mutex<ListCounters>,
}

impl TerminalResultsView<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalResultsView<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            counters: Mutex::new(ListCounters::default()),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_line(&self, line: &str) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            log::error!("[TERMINAL_VIEW] Failed to write output: {}", e);
        }
    }

    fn next_position(&self, list: ResultList) -> usize {
        let mut counters = self
            .counters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let counter = match list {
            ResultList::Images => &mut counters.images,
            ResultList::Words => &mut counters.words,
        };
        *counter += 1;
        *counter
    }
}

impl<W: Write + Send> ResultsView for TerminalResultsView<W> {
    fn clear_list(&self, list: ResultList) {
        let mut counters = self
            .counters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let (counter, heading) = match list {
            ResultList::Images => (&mut counters.images, "Images"),
            ResultList::Words => (&mut counters.words, "Related words"),
        };

        // Nothing was printed since the last clear.
        if *counter == 0 {
            return;
        }
        *counter = 0;
        drop(counters);

        self.write_line(&format!("-- {} cleared --", heading));
    }

    fn append_entry(&self, list: ResultList, entry: ListEntry) {
        let position = self.next_position(list);

        let line = match entry {
            ListEntry::Image(image) => {
                if position == 1 {
                    self.write_line("Images:");
                }
                format!("{:>3}. {}\n     {}", position, image.title, image.link_url)
            }
            ListEntry::Word(word) => {
                if position == 1 {
                    self.write_line("Related words:");
                }
                format!("{:>3}. {}", position, word)
            }
        };

        self.write_line(&line);
    }

    fn show_notice(&self, notice: &UserNotice) {
        self.write_line(&format!("! {}", notice));
    }
}
