use serde::Deserialize;

use crate::GalleryError;

/// Where the gallery lives in the page.
///
/// Every field is optional when deserializing; missing ones keep the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Selector matching every clickable gallery image
    pub image_selector: String,
    /// Containers that group images, tried in order with `closest()`
    pub group_selectors: Vec<String>,
    /// Overlay element, also the backdrop click target
    pub modal_id: String,
    /// `<img>` inside the overlay
    pub image_id: String,
    pub close_id: String,
    pub prev_id: String,
    pub next_id: String,
    pub counter_id: String,
    /// `trace`, `debug`, `info`, `warn` or `error`
    pub log_level: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            image_selector: ".activity-gallery img, .award-image".to_string(),
            group_selectors: vec![".activity-card".to_string(), ".award-content".to_string()],
            modal_id: "imageModal".to_string(),
            image_id: "modalImage".to_string(),
            close_id: "closeModal".to_string(),
            prev_id: "prevBtn".to_string(),
            next_id: "nextBtn".to_string(),
            counter_id: "imageCounter".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl GalleryConfig {
    /// Parse from JSON. An empty string, `null` or `undefined` gives the defaults.
    pub fn from_json(json: &str) -> Result<Self, GalleryError> {
        let trimmed = json.trim();
        if trimmed.is_empty() || trimmed == "null" || trimmed == "undefined" {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(trimmed)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), GalleryError> {
        if self.image_selector.trim().is_empty() {
            return Err(GalleryError::InvalidSelector {
                selector: self.image_selector.clone(),
            });
        }
        if let Some(empty) = self.group_selectors.iter().find(|s| s.trim().is_empty()) {
            return Err(GalleryError::InvalidSelector {
                selector: empty.clone(),
            });
        }
        Ok(())
    }

    /// Log level, falling back to `info` for anything unrecognised.
    pub fn level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
