//! List catalog entries

use anyhow::Result;
use std::fmt::Write;

use crate::Folio;

/// List catalog entries by type
pub fn run(folio: &Folio, content_type: &str, json: bool) -> Result<()> {
    print!("{}", listing(folio, content_type, json)?);
    Ok(())
}

/// Build the listing text for `content_type`
pub fn listing(folio: &Folio, content_type: &str, json: bool) -> Result<String> {
    let catalog = &folio.catalog;
    let mut out = String::new();

    match content_type {
        "article" | "articles" => {
            if json {
                let articles: Vec<_> = catalog.articles().collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&articles)?)?;
            } else {
                writeln!(out, "Articles ({}):", catalog.article_count())?;
                for article in catalog.articles() {
                    writeln!(
                        out,
                        "  {} - {} [{}] ({})",
                        article.date, article.title, article.id, article.file
                    )?;
                }
            }
        }
        "project" | "projects" => {
            if json {
                let projects: Vec<_> = catalog.projects().collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&projects)?)?;
            } else {
                writeln!(out, "Projects ({}):", catalog.project_count())?;
                for project in catalog.projects() {
                    writeln!(
                        out,
                        "  {} [{}] {} ({})",
                        project.title,
                        project.id,
                        project.tech.join(", "),
                        project.file
                    )?;
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: articles, projects",
                content_type
            );
        }
    }

    Ok(out)
}
