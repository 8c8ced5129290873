//! Catalog of articles and projects
//!
//! The catalog is loaded once and never mutated. Entries keep their
//! declaration order, which is the order list pages show them in.

mod builtin;
mod item;

pub use item::{Article, ContentItem, ContentKind, Project};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Duplicate {kind:?} id: {id}")]
    DuplicateId { kind: ContentKind, id: String },
}

/// On-disk shape of `catalog.yml`
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct CatalogFile {
    articles: Vec<Article>,
    projects: Vec<Project>,
}

/// Read-only article and project lists, keyed by id
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    articles: IndexMap<String, Article>,
    projects: IndexMap<String, Project>,
}

impl Catalog {
    /// Build a catalog, rejecting repeated ids within a kind
    pub fn new(articles: Vec<Article>, projects: Vec<Project>) -> Result<Self, CatalogError> {
        Ok(Self {
            articles: index_by_id(articles)?,
            projects: index_by_id(projects)?,
        })
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Self {
        Self {
            articles: builtin::articles()
                .into_iter()
                .map(|a| (a.id.clone(), a))
                .collect(),
            projects: builtin::projects()
                .into_iter()
                .map(|p| (p.id.clone(), p))
                .collect(),
        }
    }

    /// Parse a YAML catalog document
    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(content)?;
        Self::new(file.articles, file.projects)
    }

    /// Load a catalog file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_yaml(&content)?;
        tracing::debug!(
            "Loaded {} articles and {} projects from {:?}",
            catalog.articles.len(),
            catalog.projects.len(),
            path.as_ref()
        );
        Ok(catalog)
    }

    pub fn articles(&self) -> impl Iterator<Item = &Article> {
        self.articles.values()
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    /// Look up an article by exact id
    pub fn article(&self, id: &str) -> Option<&Article> {
        self.articles.get(id)
    }

    /// Look up a project by exact id
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}

fn index_by_id<T: ContentItem>(items: Vec<T>) -> Result<IndexMap<String, T>, CatalogError> {
    let mut map = IndexMap::with_capacity(items.len());
    for item in items {
        let id = item.id().to_string();
        if map.contains_key(&id) {
            return Err(CatalogError::DuplicateId { kind: T::KIND, id });
        }
        map.insert(id, item);
    }
    Ok(map)
}
