//! Article and Project models

use serde::{Deserialize, Serialize};

use crate::page::Selector;

/// Which half of the catalog an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Article,
    Project,
}

impl ContentKind {
    /// Detail page the item's cards link to
    pub fn detail_page(self) -> &'static str {
        match self {
            ContentKind::Article => "article.html",
            ContentKind::Project => "project.html",
        }
    }

    /// List page the detail header links back to
    pub fn list_page(self) -> &'static str {
        match self {
            ContentKind::Article => "blog.html",
            ContentKind::Project => "projects.html",
        }
    }

    pub fn back_label(self) -> &'static str {
        match self {
            ContentKind::Article => "← Back to Blog",
            ContentKind::Project => "← Back to Projects",
        }
    }

    /// Placeholder shown while the content file is in flight
    pub fn loading_html(self) -> &'static str {
        match self {
            ContentKind::Article => r#"<div class="loading">Loading article...</div>"#,
            ContentKind::Project => {
                r#"<div class="loading">Loading project documentation...</div>"#
            }
        }
    }

    /// Shown in place of the content when it cannot be retrieved
    pub fn fallback_html(self) -> &'static str {
        match self {
            ContentKind::Article => "<p>Article content could not be loaded.</p>",
            ContentKind::Project => "<p>Project documentation could not be loaded.</p>",
        }
    }

    pub fn not_found_html(self) -> &'static str {
        match self {
            ContentKind::Article => {
                r#"<div class="section"><h2>Article not found</h2><p>The requested article could not be found.</p></div>"#
            }
            ContentKind::Project => {
                r#"<div class="section"><h2>Project not found</h2><p>The requested project could not be found.</p></div>"#
            }
        }
    }

    pub fn header_selector(self) -> Selector {
        match self {
            ContentKind::Article => Selector::class("article-header"),
            ContentKind::Project => Selector::class("project-header"),
        }
    }

    pub fn content_selector(self) -> Selector {
        match self {
            ContentKind::Article => Selector::class("article-content"),
            ContentKind::Project => Selector::class("project-content"),
        }
    }

    /// Link to the detail page of `id`
    pub fn detail_url(self, id: &str) -> String {
        format!("{}?id={}", self.detail_page(), id)
    }
}

/// Common view of a catalog entry
pub trait ContentItem {
    const KIND: ContentKind;

    fn id(&self) -> &str;
    fn title(&self) -> &str;
    /// Relative path of the content file
    fn file(&self) -> &str;
}

/// A blog article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique slug, used in `article.html?id=`
    pub id: String,
    pub title: String,
    /// Publication date as written by the author (`YYYY-MM-DD`)
    pub date: String,
    #[serde(rename = "readTime", alias = "read_time")]
    pub read_time: String,
    pub excerpt: String,
    pub file: String,
}

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique slug, used in `project.html?id=`
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    pub file: String,
}

impl ContentItem for Article {
    const KIND: ContentKind = ContentKind::Article;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn file(&self) -> &str {
        &self.file
    }
}

impl ContentItem for Project {
    const KIND: ContentKind = ContentKind::Project;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn file(&self) -> &str {
        &self.file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_url() {
        assert_eq!(
            ContentKind::Article.detail_url("event-loops"),
            "article.html?id=event-loops"
        );
        assert_eq!(ContentKind::Project.detail_url("q"), "project.html?id=q");
    }

    #[test]
    fn test_article_yaml_field_names() {
        let yaml = r#"
id: a
title: A
date: 2024-01-02
readTime: 3 min read
excerpt: Short
file: articles/a.md
"#;
        let article: Article = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(article.read_time, "3 min read");
        assert_eq!(article.date, "2024-01-02");

        let snake = yaml.replace("readTime", "read_time");
        let article: Article = serde_yaml::from_str(&snake).unwrap();
        assert_eq!(article.read_time, "3 min read");
    }

    #[test]
    fn test_project_optional_links() {
        let yaml = r#"
id: p
title: P
description: D
tech: [Rust]
file: projects/p.md
"#;
        let project: Project = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(project.tech, vec!["Rust"]);
        assert!(project.github.is_none());
        assert!(project.demo.is_none());
    }
}
