use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::models::{ApiEndpoints, ImageSearchEndpoint, RenderLimits, WordRelationsEndpoint};
use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserSettings {
    pub flickr_api_key: String,
    pub flickr_api_url: String,
    pub words_api_key: String,
    pub words_api_url: String,
    pub image_license_filter: String,
    pub image_sort_order: String,
    pub max_image_results: usize,
    pub max_related_words: usize,
    pub discard_stale_results: bool,
    pub preset_terms: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            flickr_api_key: String::new(),
            flickr_api_url: global_constants::DEFAULT_FLICKR_API_URL.to_string(),
            words_api_key: String::new(),
            words_api_url: global_constants::DEFAULT_WORDS_API_URL.to_string(),
            image_license_filter: global_constants::DEFAULT_IMAGE_LICENSE_FILTER.to_string(),
            image_sort_order: global_constants::DEFAULT_IMAGE_SORT_ORDER.to_string(),
            max_image_results: global_constants::DEFAULT_MAX_IMAGE_RESULTS,
            max_related_words: global_constants::DEFAULT_MAX_RELATED_WORDS,
            discard_stale_results: true,
            preset_terms: global_constants::DEFAULT_PRESET_TERMS
                .iter()
                .map(|term| term.to_string())
                .collect(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::get_settings_file_path()?)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Flickr API URL: {}", settings.flickr_api_url);
        log::debug!("[SETTINGS] Words API URL: {}", settings.words_api_url);

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    pub fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }

    pub fn api_endpoints(&self) -> ApiEndpoints {
        ApiEndpoints {
            images: ImageSearchEndpoint {
                base_url: self.flickr_api_url.clone(),
                api_key: self.flickr_api_key.clone(),
                license_filter: self.image_license_filter.clone(),
                sort_order: self.image_sort_order.clone(),
                per_page: self.max_image_results,
            },
            words: WordRelationsEndpoint {
                base_url: self.words_api_url.clone(),
                api_key: self.words_api_key.clone(),
            },
        }
    }

    pub fn render_limits(&self) -> RenderLimits {
        RenderLimits {
            max_images: self.max_image_results,
            max_words: self.max_related_words,
        }
    }

    pub fn missing_api_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.flickr_api_key.trim().is_empty() {
            missing.push("flickr_api_key");
        }
        if self.words_api_key.trim().is_empty() {
            missing.push("words_api_key");
        }
        missing
    }
}
