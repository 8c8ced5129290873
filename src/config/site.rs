//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    /// Document title until a detail page sets its own
    pub title: String,
    pub author: String,

    // Content
    pub content_dir: String,
    /// When set, content files are fetched over HTTP relative to this URL
    pub content_url: Option<String>,
    pub catalog_file: String,

    // Pages
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub interaction: InteractionConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Your Name".to_string(),
            author: "Your Name".to_string(),

            content_dir: ".".to_string(),
            content_url: None,
            catalog_file: "catalog.yml".to_string(),

            home: HomeConfig::default(),
            interaction: InteractionConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        Ok(config)
    }

    /// Document title for a detail page
    pub fn page_title(&self, item_title: &str) -> String {
        format!("{} - {}", item_title, self.author)
    }
}

/// Home page listing sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub recent_posts: usize,
    pub featured_projects: usize,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            recent_posts: 2,
            featured_projects: 2,
        }
    }
}

/// Scroll, hover and carousel settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Pixels kept above an anchor target after a smooth scroll
    pub scroll_offset: f64,
    /// Scroll position past which the header turns opaque
    pub header_threshold: f64,
    pub header_background: String,
    pub header_background_scrolled: String,
    pub card_border: String,
    pub card_border_hover: String,
    pub carousel_gap: f64,
    /// Used when the carousel track has no measurable card
    pub carousel_card_fallback: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            scroll_offset: 100.0,
            header_threshold: 100.0,
            header_background: "rgba(15, 23, 42, 0.9)".to_string(),
            header_background_scrolled: "rgba(15, 23, 42, 0.95)".to_string(),
            card_border: "#334155".to_string(),
            card_border_hover: "#475569".to_string(),
            carousel_gap: 32.0,
            carousel_card_fallback: 300.0,
        }
    }
}
