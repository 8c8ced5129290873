//! folio: rendering core for a small personal website
//!
//! The site has a home page, a blog, a project list and one detail page per
//! article or project. This crate holds the catalog of entries, renders them
//! as cards, converts their content files to HTML, fills pages through a
//! DOM-like [`page::Surface`] and models the page's scroll and carousel
//! behavior.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod interaction;
pub mod page;
pub mod render;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::content::{ContentSource, FsSource, HttpSource};

/// The main folio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Articles and projects
    pub catalog: Catalog,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory content file paths are relative to
    pub content_dir: PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let catalog_path = base_dir.join(&config.catalog_file);
        let catalog = if catalog_path.exists() {
            Catalog::load(&catalog_path)
                .with_context(|| format!("Failed to load catalog {:?}", catalog_path))?
        } else {
            tracing::debug!("No catalog at {:?}, using the built-in one", catalog_path);
            Catalog::builtin()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            catalog,
            base_dir,
            content_dir,
        })
    }

    /// The content source the configuration asks for
    pub fn content_source(&self) -> Box<dyn ContentSource> {
        match &self.config.content_url {
            Some(url) => Box::new(HttpSource::new(url)),
            None => Box::new(FsSource::new(&self.content_dir)),
        }
    }
}
