//! # mashup CLI entry point
//!
//! Searches Flickr for photos and Big Huge Thesaurus for related words at
//! the same time and prints both result lists.
//!
//! ```bash
//! # One search
//! mashup "red panda"
//!
//! # Interactive session with numbered preset terms
//! mashup
//!
//! # Machine-readable output
//! mashup --json ocean
//! ```
//!
//! Settings (API keys, caps, preset terms) live in `settings.json` under the
//! platform config directory and are created with defaults on first run.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use mashup_search::app::{parse_interactive_line, InteractiveCommand, MashupApp};
use mashup_search::core::fetchers::extract_image_entries;
use mashup_search::core::interfaces::ports::ResultsView;
use mashup_search::core::orchestrators::{SearchReport, SearchTrigger};
use mashup_search::global_constants;
use mashup_search::presentation::{InMemoryResultsView, TerminalResultsView};
use mashup_search::user_settings::UserSettings;

#[derive(Parser, Debug)]
#[command(name = "mashup", version, about = "Search photos and related words side by side")]
struct Cli {
    /// Term to search for. Omit to start an interactive session.
    term: Option<String>,

    /// Print results as JSON instead of a numbered list
    #[arg(long)]
    json: bool,

    /// Open the first image link in the system browser
    #[arg(long)]
    open: bool,

    /// Print the preset terms and exit
    #[arg(long)]
    list_presets: bool,

    /// Flickr API key, overriding the settings file
    #[arg(long, value_name = "KEY")]
    flickr_api_key: Option<String>,

    /// Big Huge Thesaurus API key, overriding the settings file
    #[arg(long, value_name = "KEY")]
    words_api_key: Option<String>,
}

enum OutputMode {
    Terminal,
    Json(Arc<InMemoryResultsView>),
}

impl OutputMode {
    fn finish_search(&self) -> Result<()> {
        if let OutputMode::Json(view) = self {
            let rendered = serde_json::to_string_pretty(&view.snapshot())?;
            println!("{}", rendered);
            view.clear_notices();
        }
        Ok(())
    }
}

fn load_settings(cli: &Cli) -> UserSettings {
    let mut settings = UserSettings::load().unwrap_or_else(|e| {
        log::warn!("[MAIN] Failed to load settings: {}, using defaults", e);
        UserSettings::default()
    });

    if let Some(key) = &cli.flickr_api_key {
        settings.flickr_api_key = key.clone();
    }
    if let Some(key) = &cli.words_api_key {
        settings.words_api_key = key.clone();
    }

    settings
}

fn open_first_image(report: &SearchReport) {
    let SearchReport::Completed(summary) = report else {
        return;
    };

    let Some(first) = summary
        .aggregate
        .images
        .payload()
        .and_then(|payload| extract_image_entries(payload, 1).into_iter().next())
    else {
        log::info!("[MAIN] No image to open");
        return;
    };

    log::info!("[MAIN] Opening {}", first.link_url);
    if let Err(e) = open::that(&first.link_url) {
        log::error!("[MAIN] Failed to open browser: {}", e);
    }
}

async fn run_interactive(app: &MashupApp, output: &OutputMode, open_links: bool) -> Result<()> {
    println!("{}", global_constants::INTERACTIVE_BANNER);
    for (index, term) in app.preset_terms().iter().enumerate() {
        println!("  [{}] {}", index + 1, term);
    }
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let trigger = match parse_interactive_line(&line, app.preset_terms()) {
            InteractiveCommand::Quit => break,
            InteractiveCommand::Trigger(trigger) => trigger,
        };

        let report = app.handle_trigger(trigger).await;
        if open_links {
            open_first_image(&report);
        }
        output.finish_search()?;
    }

    log::info!("[MAIN] Interactive session ended");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    let settings = load_settings(&cli);

    if cli.list_presets {
        for term in &settings.preset_terms {
            println!("{}", term);
        }
        return Ok(());
    }

    let (output, view) = if cli.json {
        let memory_view = Arc::new(InMemoryResultsView::new());
        let view: Arc<dyn ResultsView> = memory_view.clone();
        (OutputMode::Json(memory_view), view)
    } else {
        let view: Arc<dyn ResultsView> = Arc::new(TerminalResultsView::stdout());
        (OutputMode::Terminal, view)
    };

    let app = MashupApp::build(&settings, view).context("Failed to initialize HTTP client")?;

    match cli.term {
        Some(term) => {
            let report = app.handle_trigger(SearchTrigger::SearchButton(term)).await;
            if cli.open {
                open_first_image(&report);
            }
            output.finish_search()
        }
        None => run_interactive(&app, &output, cli.open).await,
    }
}
