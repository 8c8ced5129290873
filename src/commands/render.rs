//! Preview a page on an in-memory surface

use anyhow::Result;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::interaction::{InteractionController, InteractionEvent};
use crate::page::{MemorySurface, PageController, PageKind, PageOutcome, Surface};
use crate::Folio;

/// Options for a page preview
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Id passed to detail pages as `?id=`
    pub id: Option<String>,
    /// Simulated window scroll position
    pub scroll: Option<f64>,
}

/// Render a page and print the resulting document
pub async fn run(folio: &Folio, page: &str, options: &RenderOptions) -> Result<()> {
    let (outcome, html) = render_page(folio, page, options).await?;
    tracing::info!("Rendered {} page: {:?}", page, outcome);
    print!("{}", html);
    Ok(())
}

/// Initialize a page of kind `page` and return the outcome with the document
pub async fn render_page(
    folio: &Folio,
    page: &str,
    options: &RenderOptions,
) -> Result<(PageOutcome, String)> {
    let kind: PageKind = page.parse()?;
    let query = options
        .id
        .as_deref()
        .map(|id| format!("?id={}", utf8_percent_encode(id, NON_ALPHANUMERIC)))
        .unwrap_or_default();

    let mut surface = MemorySurface::for_page(kind, &query);
    surface.set_title(&folio.config.title);
    let source = folio.content_source();
    let controller = PageController::new(&folio.catalog, source.as_ref(), &folio.config);
    let outcome = controller.init(&mut surface).await;

    if let Some(scroll_top) = options.scroll {
        let mut interactions = InteractionController::new(folio.config.interaction.clone());
        interactions.attach();
        interactions.handle(&mut surface, &InteractionEvent::Scroll { scroll_top });
        interactions.detach();
    }

    Ok((outcome, surface.to_html()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ContentKind;
    use std::fs;

    #[tokio::test]
    async fn test_render_article_from_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("articles")).unwrap();
        fs::write(
            dir.path().join("articles/memory-management-systems.md"),
            "## Allocators\n- arena\n- slab",
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let options = RenderOptions {
            id: Some("memory-management-systems".to_string()),
            scroll: Some(150.0),
        };
        let (outcome, html) = render_page(&folio, "article", &options).await.unwrap();

        assert!(matches!(outcome, PageOutcome::Detail { .. }));
        assert!(html.contains("<title>Memory Management in Systems Programming - Your Name</title>"));
        assert!(html.contains("<h3>Allocators</h3>"));
        assert!(html.contains("<ul><li>arena</li>"));
        assert!(html.contains(r#"<header style="background: rgba(15, 23, 42, 0.95);">"#));
    }

    #[tokio::test]
    async fn test_render_reserved_characters_in_id() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("catalog.yml"),
            r#"
articles:
  - id: "c++ & rust #1 100%"
    title: C++ and Rust
    date: 2024-01-01
    readTime: 3 min read
    excerpt: Interop.
    file: articles/cpp.md
"#,
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let options = RenderOptions {
            id: Some("c++ & rust #1 100%".to_string()),
            scroll: None,
        };
        let (outcome, _) = render_page(&folio, "article", &options).await.unwrap();
        assert_eq!(
            outcome,
            PageOutcome::Detail {
                kind: ContentKind::Article,
                id: "c++ & rust #1 100%".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_list_page_uses_site_title() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "title: Jane's Notes
").unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let (_, html) = render_page(&folio, "blog", &RenderOptions::default())
            .await
            .unwrap();
        assert!(html.contains("<title>Jane's Notes</title>"));
    }

    #[tokio::test]
    async fn test_render_unknown_page() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let err = render_page(&folio, "about", &RenderOptions::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Unknown page kind: about"));
    }
}
