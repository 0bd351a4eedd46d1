use std::sync::Arc;

use anyhow::Result;

use crate::adapters::ReqwestHttpTransport;
use crate::core::interfaces::adapters::HttpTransport;
use crate::core::interfaces::ports::ResultsView;
use crate::core::orchestrators::{SearchAggregator, SearchController, SearchReport, SearchTrigger};
use crate::global_constants;
use crate::user_settings::UserSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveCommand {
    Quit,
    Trigger(SearchTrigger),
}

/// Maps one line of interactive input to a command. A number that indexes
/// a preset (1-based) is a sidebar activation; anything else is typed input.
pub fn parse_interactive_line(line: &str, preset_terms: &[String]) -> InteractiveCommand {
    let trimmed = line.trim();

    if trimmed == global_constants::INTERACTIVE_QUIT_COMMAND {
        return InteractiveCommand::Quit;
    }

    if let Ok(position) = trimmed.parse::<usize>() {
        if let Some(term) = position.checked_sub(1).and_then(|index| preset_terms.get(index)) {
            return InteractiveCommand::Trigger(SearchTrigger::SidebarTerm(term.clone()));
        }
    }

    InteractiveCommand::Trigger(SearchTrigger::SearchButton(line.to_string()))
}

pub struct MashupApp {
    controller: SearchController,
    preset_terms: Vec<String>,
}

impl MashupApp {
    pub fn build(settings: &UserSettings, view: Arc<dyn ResultsView>) -> Result<Self> {
        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestHttpTransport::build()?);
        Ok(Self::build_with_transport(settings, transport, view))
    }

    pub fn build_with_transport(
        settings: &UserSettings,
        transport: Arc<dyn HttpTransport>,
        view: Arc<dyn ResultsView>,
    ) -> Self {
        log::info!("[APP] Initializing application");

        for key in settings.missing_api_keys() {
            log::warn!("[APP] Setting '{}' is empty, that source will likely fail", key);
        }

        let aggregator = SearchAggregator::new(transport, settings.api_endpoints());
        let controller = SearchController::build(
            aggregator,
            view,
            settings.render_limits(),
            settings.discard_stale_results,
        );

        Self {
            controller,
            preset_terms: settings.preset_terms.clone(),
        }
    }

    pub fn preset_terms(&self) -> &[String] {
        &self.preset_terms
    }

    pub async fn handle_trigger(&self, trigger: SearchTrigger) -> SearchReport {
        self.controller.handle_trigger(trigger).await
    }
}
