//! Page initialization
//!
//! Each page of the site sets a page-kind token once. [`PageController::init`]
//! reads it and fills the page: list pages get cards, detail pages get a
//! header and their converted content file.

mod surface;

pub use surface::{Element, MemorySurface, Selector, Surface};

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::catalog::{Catalog, ContentItem, ContentKind};
use crate::config::SiteConfig;
use crate::content::{fetch_and_convert, ContentSource};
use crate::helpers::query_param;
use crate::render::{render_cards, Card, DetailHeader};

/// The page kinds the site has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Blog,
    Projects,
    Article,
    Project,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown page kind: {0}. Available: home, blog, projects, article, project")]
pub struct UnknownPageKind(pub String);

impl PageKind {
    pub const ALL: [PageKind; 5] = [
        PageKind::Home,
        PageKind::Blog,
        PageKind::Projects,
        PageKind::Article,
        PageKind::Project,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Blog => "blog",
            PageKind::Projects => "projects",
            PageKind::Article => "article",
            PageKind::Project => "project",
        }
    }

    /// Elements the site's page of this kind contains, besides the header
    pub fn layout(self) -> Vec<Selector> {
        match self {
            PageKind::Home => vec![
                Selector::id("recent-posts"),
                Selector::id("featured-projects"),
            ],
            PageKind::Blog => vec![Selector::id("blog-posts")],
            PageKind::Projects => vec![Selector::id("projects-grid")],
            PageKind::Article | PageKind::Project => {
                let kind = self.detail_kind().unwrap_or(ContentKind::Article);
                vec![
                    Selector::class("content"),
                    kind.header_selector(),
                    kind.content_selector(),
                ]
            }
        }
    }

    /// Content kind shown by a detail page
    pub fn detail_kind(self) -> Option<ContentKind> {
        match self {
            PageKind::Article => Some(ContentKind::Article),
            PageKind::Project => Some(ContentKind::Project),
            _ => None,
        }
    }
}

impl FromStr for PageKind {
    type Err = UnknownPageKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownPageKind(s.to_string()))
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What initialization did to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// No page kind, or one this site does not know
    Skipped,
    /// Cards injected into the list containers present on the page
    Listed { cards: usize },
    /// A detail page was filled for `id`
    Detail { kind: ContentKind, id: String },
    /// No catalog entry matched the requested id
    NotFound { kind: ContentKind, id: Option<String> },
}

/// Drives a page's initialization from the catalog and a content source
pub struct PageController<'a, S: ContentSource + ?Sized> {
    catalog: &'a Catalog,
    source: &'a S,
    config: &'a SiteConfig,
}

impl<'a, S: ContentSource + ?Sized> PageController<'a, S> {
    pub fn new(catalog: &'a Catalog, source: &'a S, config: &'a SiteConfig) -> Self {
        Self {
            catalog,
            source,
            config,
        }
    }

    /// Initialize the page according to the surface's page kind
    pub async fn init<Sf: Surface>(&self, surface: &mut Sf) -> PageOutcome {
        let kind = match surface.page_kind().map(str::parse::<PageKind>) {
            Some(Ok(kind)) => kind,
            Some(Err(e)) => {
                tracing::debug!("Skipping page initialization: {}", e);
                return PageOutcome::Skipped;
            }
            None => return PageOutcome::Skipped,
        };
        tracing::debug!("Initializing {} page", kind);

        match kind {
            PageKind::Home => self.init_home(surface),
            PageKind::Blog => self.init_blog(surface),
            PageKind::Projects => self.init_projects(surface),
            PageKind::Article => {
                let id = query_param(surface.query(), "id");
                let article = id.as_deref().and_then(|id| self.catalog.article(id));
                self.init_detail(surface, id, article).await
            }
            PageKind::Project => {
                let id = query_param(surface.query(), "id");
                let project = id.as_deref().and_then(|id| self.catalog.project(id));
                self.init_detail(surface, id, project).await
            }
        }
    }

    /// Recent posts and featured projects
    pub fn init_home<Sf: Surface>(&self, surface: &mut Sf) -> PageOutcome {
        let home = &self.config.home;
        let recent: Vec<_> = self.catalog.articles().take(home.recent_posts).collect();
        let featured: Vec<_> = self
            .catalog
            .projects()
            .take(home.featured_projects)
            .collect();

        let cards = fill_list(surface, &Selector::id("recent-posts"), recent)
            + fill_list(surface, &Selector::id("featured-projects"), featured);
        PageOutcome::Listed { cards }
    }

    pub fn init_blog<Sf: Surface>(&self, surface: &mut Sf) -> PageOutcome {
        let cards = fill_list(
            surface,
            &Selector::id("blog-posts"),
            self.catalog.articles().collect(),
        );
        PageOutcome::Listed { cards }
    }

    pub fn init_projects<Sf: Surface>(&self, surface: &mut Sf) -> PageOutcome {
        let cards = fill_list(
            surface,
            &Selector::id("projects-grid"),
            self.catalog.projects().collect(),
        );
        PageOutcome::Listed { cards }
    }

    /// Fill a detail page for `item`, or show the not-found block
    pub async fn init_detail<T, Sf>(
        &self,
        surface: &mut Sf,
        id: Option<String>,
        item: Option<&T>,
    ) -> PageOutcome
    where
        T: DetailHeader,
        Sf: Surface,
    {
        let Some(item) = item else {
            tracing::debug!("No {:?} with id {:?}", T::KIND, id);
            surface.set_inner_html(&Selector::class("content"), T::KIND.not_found_html());
            return PageOutcome::NotFound { kind: T::KIND, id };
        };

        surface.set_title(&self.config.page_title(item.title()));

        let header = T::KIND.header_selector();
        if surface.has_element(&header) {
            surface.set_inner_html(&header, &item.render_header());
        }

        let content = T::KIND.content_selector();
        if surface.has_element(&content) {
            surface.set_inner_html(&content, T::KIND.loading_html());
            let html = fetch_and_convert(self.source, item.file(), T::KIND).await;
            surface.set_inner_html(&content, &html);
        }

        PageOutcome::Detail {
            kind: T::KIND,
            id: item.id().to_string(),
        }
    }
}

/// Inject cards into a list container; absent containers are skipped
fn fill_list<Sf: Surface, T: Card>(surface: &mut Sf, selector: &Selector, items: Vec<&T>) -> usize {
    if !surface.has_element(selector) {
        tracing::debug!("No {} on this page", selector);
        return 0;
    }
    let count = items.len();
    surface.set_inner_html(selector, &render_cards(items, true));
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Article, Project};
    use crate::content::MemorySource;

    fn source() -> MemorySource {
        MemorySource::new()
            .with_file("articles/event-loops-deep-dive.md", "# Event Loops\n\nBody")
            .with_file("projects/http2-server.md", "## Framing")
    }

    #[test]
    fn test_page_kind_parse() {
        assert_eq!("home".parse::<PageKind>(), Ok(PageKind::Home));
        assert_eq!("project".parse::<PageKind>(), Ok(PageKind::Project));
        assert_eq!(
            "Home".parse::<PageKind>(),
            Err(UnknownPageKind("Home".to_string()))
        );
        for kind in PageKind::ALL {
            assert_eq!(kind.to_string().parse::<PageKind>(), Ok(kind));
        }
    }

    #[tokio::test]
    async fn test_home_page() {
        let catalog = Catalog::builtin();
        let config = SiteConfig::default();
        let source = source();
        let controller = PageController::new(&catalog, &source, &config);

        let mut surface = MemorySurface::for_page(PageKind::Home, "");
        let outcome = controller.init(&mut surface).await;
        assert_eq!(outcome, PageOutcome::Listed { cards: 4 });

        let posts = surface.inner_html(&Selector::id("recent-posts")).unwrap();
        assert_eq!(posts.matches("post-card").count(), 2);
        assert!(posts.contains("event-loops-deep-dive"));
        assert!(posts.contains("memory-management-systems"));
        assert!(!posts.contains("static-site-generator"));

        let projects = surface.inner_html(&Selector::id("featured-projects")).unwrap();
        assert_eq!(projects.matches("project-card").count(), 2);
        assert!(!projects.contains("realtime-data-pipeline"));
    }

    #[tokio::test]
    async fn test_home_page_respects_config() {
        let catalog = Catalog::builtin();
        let mut config = SiteConfig::default();
        config.home.recent_posts = 1;
        config.home.featured_projects = 5;
        let source = source();
        let controller = PageController::new(&catalog, &source, &config);

        let mut surface = MemorySurface::for_page(PageKind::Home, "");
        assert_eq!(
            controller.init(&mut surface).await,
            PageOutcome::Listed { cards: 4 }
        );
    }

    #[tokio::test]
    async fn test_list_pages() {
        let catalog = Catalog::builtin();
        let config = SiteConfig::default();
        let source = source();
        let controller = PageController::new(&catalog, &source, &config);

        let mut blog = MemorySurface::for_page(PageKind::Blog, "");
        assert_eq!(
            controller.init(&mut blog).await,
            PageOutcome::Listed { cards: 3 }
        );
        let html = blog.inner_html(&Selector::id("blog-posts")).unwrap();
        assert!(html.contains("<p>Step-by-step guide"));

        let mut projects = MemorySurface::for_page(PageKind::Projects, "");
        assert_eq!(
            controller.init(&mut projects).await,
            PageOutcome::Listed { cards: 3 }
        );
    }

    #[tokio::test]
    async fn test_list_page_without_container_is_a_no_op() {
        let catalog = Catalog::builtin();
        let config = SiteConfig::default();
        let source = source();
        let controller = PageController::new(&catalog, &source, &config);

        let mut surface = MemorySurface::new(Some("blog"), "");
        assert_eq!(
            controller.init(&mut surface).await,
            PageOutcome::Listed { cards: 0 }
        );
        assert!(surface.writes().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_or_missing_page_kind() {
        let catalog = Catalog::builtin();
        let config = SiteConfig::default();
        let source = source();
        let controller = PageController::new(&catalog, &source, &config);

        let mut unknown = MemorySurface::new(Some("about"), "");
        assert_eq!(controller.init(&mut unknown).await, PageOutcome::Skipped);

        let mut missing = MemorySurface::new(None, "");
        assert_eq!(controller.init(&mut missing).await, PageOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_article_page() {
        let catalog = Catalog::builtin();
        let config = SiteConfig {
            author: "Jane Doe".to_string(),
            ..Default::default()
        };
        let source = source();
        let controller = PageController::new(&catalog, &source, &config);

        let mut surface = MemorySurface::for_page(PageKind::Article, "?id=event-loops-deep-dive");
        let outcome = controller.init(&mut surface).await;
        assert_eq!(
            outcome,
            PageOutcome::Detail {
                kind: ContentKind::Article,
                id: "event-loops-deep-dive".to_string()
            }
        );
        assert_eq!(
            surface.title(),
            "Understanding Event Loops: A Deep Dive into Asynchronous Programming - Jane Doe"
        );
        assert!(surface
            .inner_html(&Selector::class("article-header"))
            .unwrap()
            .contains("March 15, 2024 • 8 min read"));

        let content = Selector::class("article-content");
        assert_eq!(
            surface.inner_html(&content),
            Some("<h2>Event Loops</h2></p><p>Body")
        );

        // the loading placeholder is shown before the content replaces it
        let content_writes: Vec<_> = surface
            .writes()
            .iter()
            .filter(|(s, _)| *s == content)
            .map(|(_, html)| html.as_str())
            .collect();
        assert_eq!(
            content_writes,
            vec![
                ContentKind::Article.loading_html(),
                "<h2>Event Loops</h2></p><p>Body"
            ]
        );
        assert_eq!(surface.inner_html(&Selector::class("content")), Some(""));
    }

    #[tokio::test]
    async fn test_project_page_with_missing_content() {
        let catalog = Catalog::builtin();
        let config = SiteConfig::default();
        let source = source();
        let controller = PageController::new(&catalog, &source, &config);

        let mut surface = MemorySurface::for_page(PageKind::Project, "?id=realtime-data-pipeline");
        let outcome = controller.init(&mut surface).await;
        assert!(matches!(outcome, PageOutcome::Detail { kind: ContentKind::Project, .. }));
        assert_eq!(
            surface.inner_html(&Selector::class("project-content")),
            Some("<p>Project documentation could not be loaded.</p>")
        );
        assert!(surface
            .inner_html(&Selector::class("project-header"))
            .unwrap()
            .contains("Live Demo"));
    }

    #[tokio::test]
    async fn test_detail_not_found() {
        let catalog = Catalog::builtin();
        let config = SiteConfig::default();
        let source = source();
        let controller = PageController::new(&catalog, &source, &config);

        let mut surface = MemorySurface::for_page(PageKind::Article, "?id=y");
        let outcome = controller.init(&mut surface).await;
        assert_eq!(
            outcome,
            PageOutcome::NotFound {
                kind: ContentKind::Article,
                id: Some("y".to_string())
            }
        );
        assert_eq!(
            surface.inner_html(&Selector::class("content")),
            Some(ContentKind::Article.not_found_html())
        );
        assert_eq!(surface.title(), "");
        assert_eq!(surface.inner_html(&Selector::class("article-content")), Some(""));

        let mut no_id = MemorySurface::for_page(PageKind::Project, "");
        assert_eq!(
            controller.init(&mut no_id).await,
            PageOutcome::NotFound {
                kind: ContentKind::Project,
                id: None
            }
        );
    }

    #[tokio::test]
    async fn test_detail_without_header_or_content_elements() {
        let catalog = Catalog::builtin();
        let config = SiteConfig::default();
        let source = source();
        let controller = PageController::new(&catalog, &source, &config);

        let mut surface = MemorySurface::new(Some("project"), "?id=http2-server");
        let outcome = controller.init(&mut surface).await;
        assert!(matches!(outcome, PageOutcome::Detail { .. }));
        assert!(surface.writes().is_empty());
        assert_eq!(surface.title(), "HTTP/2 Server Implementation - Your Name");
    }

    #[tokio::test]
    async fn test_init_detail_directly() {
        let catalog = Catalog::new(
            vec![Article {
                id: "x".to_string(),
                title: "X".to_string(),
                date: "2024-01-01".to_string(),
                read_time: "1 min read".to_string(),
                excerpt: "E".to_string(),
                file: "articles/x.md".to_string(),
            }],
            Vec::<Project>::new(),
        )
        .unwrap();
        let config = SiteConfig::default();
        let source = MemorySource::new().with_file("articles/x.md", "> quoted");
        let controller = PageController::new(&catalog, &source, &config);

        let mut surface = MemorySurface::for_page(PageKind::Article, "");
        let outcome = controller
            .init_detail(&mut surface, Some("x".to_string()), catalog.article("x"))
            .await;
        assert!(matches!(outcome, PageOutcome::Detail { .. }));
        assert_eq!(
            surface.inner_html(&Selector::class("article-content")),
            Some("<blockquote>quoted</blockquote>")
        );
        assert!(catalog.article("y").is_none());
    }
}
