use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_IMAGE_ROOT: &str = "images";
pub const DEFAULT_CONTAINER_ID: &str = "usersContainer";

/// Presentation settings for a render pass.
///
/// Can be stored as JSON on disk; missing fields fall back to defaults:
/// ```json
/// {
///   "image_root": "static/img",
///   "container_id": "usersContainer"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory holding `users/<img>.png` and `roles/<role>.png`.
    pub image_root: String,
    /// `id` of the host page element that receives the cards.
    pub container_id: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_root: DEFAULT_IMAGE_ROOT.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

impl RenderConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading render config {}", path.display()))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Defaults overridden by `USER_CARDS_IMAGE_ROOT` and
    /// `USER_CARDS_CONTAINER_ID` when set.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            image_root: std::env::var("USER_CARDS_IMAGE_ROOT").unwrap_or(defaults.image_root),
            container_id: std::env::var("USER_CARDS_CONTAINER_ID")
                .unwrap_or(defaults.container_id),
        }
    }

    pub fn user_image(&self, img: &str) -> String {
        format!("{}/users/{}.png", self.image_root, img)
    }

    pub fn role_image(&self, role_class: &str) -> String {
        format!("{}/roles/{}.png", self.image_root, role_class)
    }
}
