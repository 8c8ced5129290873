//! The display surface pages render into
//!
//! [`Surface`] is the handful of DOM operations the page controller and the
//! interaction controller need. [`MemorySurface`] keeps everything in memory;
//! the CLI uses it to preview pages and the tests use it to observe writes.

use indexmap::IndexMap;
use std::fmt;

use super::PageKind;

/// Addresses one element of the surface
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `#name`
    Id(String),
    /// `.name`
    Class(String),
    /// Bare element name, e.g. `header`
    Tag(String),
}

impl Selector {
    pub fn id(name: &str) -> Self {
        Selector::Id(name.to_string())
    }

    pub fn class(name: &str) -> Self {
        Selector::Class(name.to_string())
    }

    pub fn tag(name: &str) -> Self {
        Selector::Tag(name.to_string())
    }

    /// Attribute text used when printing the element
    fn attribute(&self) -> String {
        match self {
            Selector::Id(name) => format!(r#" id="{}""#, name),
            Selector::Class(name) => format!(r#" class="{}""#, name),
            Selector::Tag(_) => String::new(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(name) => write!(f, "#{}", name),
            Selector::Class(name) => write!(f, ".{}", name),
            Selector::Tag(name) => f.write_str(name),
        }
    }
}

/// DOM-like operations used by pages and interactions
pub trait Surface {
    /// Page-kind token set once by the hosting page
    fn page_kind(&self) -> Option<&str>;

    /// Navigational query string, with or without the leading `?`
    fn query(&self) -> &str;

    fn has_element(&self, selector: &Selector) -> bool;

    /// Replace an element's inner markup; returns false when it is absent
    fn set_inner_html(&mut self, selector: &Selector, html: &str) -> bool;

    fn set_title(&mut self, title: &str);

    /// Set an inline style property; returns false when the element is absent
    fn set_style(&mut self, selector: &Selector, property: &str, value: &str) -> bool;

    /// Vertical offset of an element from the top of the document
    fn offset_top(&self, selector: &Selector) -> Option<f64>;

    /// Width of the first child of an element, if it has one
    fn first_child_width(&self, selector: &Selector) -> Option<f64>;

    /// Smoothly scroll the window to a vertical position
    fn scroll_to(&mut self, top: f64);

    /// Smoothly scroll an element horizontally by `delta`
    fn scroll_by(&mut self, selector: &Selector, delta: f64) -> bool;
}

/// An element of a [`MemorySurface`]
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub inner_html: String,
    pub style: IndexMap<String, String>,
    pub offset_top: f64,
    pub first_child_width: Option<f64>,
    pub scroll_left: f64,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn at(mut self, offset_top: f64) -> Self {
        self.offset_top = offset_top;
        self
    }

    pub fn with_child_width(mut self, width: f64) -> Self {
        self.first_child_width = Some(width);
        self
    }
}

/// In-memory surface with a flat, ordered set of elements
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    page_kind: Option<String>,
    query: String,
    title: String,
    elements: IndexMap<Selector, Element>,
    scroll_top: f64,
    writes: Vec<(Selector, String)>,
}

impl MemorySurface {
    pub fn new(page_kind: Option<&str>, query: &str) -> Self {
        Self {
            page_kind: page_kind.map(str::to_string),
            query: query.to_string(),
            ..Default::default()
        }
    }

    /// A surface with the elements the site's page of this kind provides
    pub fn for_page(kind: PageKind, query: &str) -> Self {
        let mut surface = Self::new(Some(kind.as_str()), query).with_element(
            Selector::tag("header"),
            Element::new("header"),
        );
        for selector in kind.layout() {
            let tag = match &selector {
                Selector::Tag(name) => name.clone(),
                _ => "div".to_string(),
            };
            surface = surface.with_element(selector, Element::new(&tag));
        }
        surface
    }

    pub fn with_element(mut self, selector: Selector, element: Element) -> Self {
        self.elements.insert(selector, element);
        self
    }

    pub fn element(&self, selector: &Selector) -> Option<&Element> {
        self.elements.get(selector)
    }

    pub fn inner_html(&self, selector: &Selector) -> Option<&str> {
        self.elements.get(selector).map(|e| e.inner_html.as_str())
    }

    pub fn style(&self, selector: &Selector, property: &str) -> Option<&str> {
        self.elements
            .get(selector)
            .and_then(|e| e.style.get(property))
            .map(String::as_str)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Every markup write, in order
    pub fn writes(&self) -> &[(Selector, String)] {
        &self.writes
    }

    /// Print the surface as a standalone document
    pub fn to_html(&self) -> String {
        let mut body = String::new();
        for (selector, element) in &self.elements {
            let style = if element.style.is_empty() {
                String::new()
            } else {
                let decls: Vec<_> = element
                    .style
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect();
                format!(r#" style="{};""#, decls.join("; "))
            };
            body.push_str(&format!(
                "<{tag}{attr}{style}>{inner}</{tag}>\n",
                tag = element.tag,
                attr = selector.attribute(),
                style = style,
                inner = element.inner_html,
            ));
        }

        let page = self
            .page_kind
            .as_deref()
            .map(|p| format!(r#" data-page="{}""#, p))
            .unwrap_or_default();

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body{}>\n{}</body>\n</html>\n",
            self.title, page, body
        )
    }
}

impl Surface for MemorySurface {
    fn page_kind(&self) -> Option<&str> {
        self.page_kind.as_deref()
    }

    fn query(&self) -> &str {
        &self.query
    }

    fn has_element(&self, selector: &Selector) -> bool {
        self.elements.contains_key(selector)
    }

    fn set_inner_html(&mut self, selector: &Selector, html: &str) -> bool {
        match self.elements.get_mut(selector) {
            Some(element) => {
                element.inner_html = html.to_string();
                self.writes.push((selector.clone(), html.to_string()));
                true
            }
            None => false,
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_style(&mut self, selector: &Selector, property: &str, value: &str) -> bool {
        match self.elements.get_mut(selector) {
            Some(element) => {
                element
                    .style
                    .insert(property.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    fn offset_top(&self, selector: &Selector) -> Option<f64> {
        self.elements.get(selector).map(|e| e.offset_top)
    }

    fn first_child_width(&self, selector: &Selector) -> Option<f64> {
        self.elements.get(selector).and_then(|e| e.first_child_width)
    }

    fn scroll_to(&mut self, top: f64) {
        self.scroll_top = top;
    }

    fn scroll_by(&mut self, selector: &Selector, delta: f64) -> bool {
        match self.elements.get_mut(selector) {
            Some(element) => {
                element.scroll_left += delta;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_display() {
        assert_eq!(Selector::id("blog-posts").to_string(), "#blog-posts");
        assert_eq!(Selector::class("content").to_string(), ".content");
        assert_eq!(Selector::tag("header").to_string(), "header");
    }

    #[test]
    fn test_missing_element_is_not_written() {
        let mut surface = MemorySurface::new(Some("blog"), "");
        assert!(!surface.set_inner_html(&Selector::id("blog-posts"), "x"));
        assert!(surface.writes().is_empty());
    }

    #[test]
    fn test_for_page_layout() {
        let surface = MemorySurface::for_page(PageKind::Article, "?id=a");
        assert!(surface.has_element(&Selector::tag("header")));
        assert!(surface.has_element(&Selector::class("content")));
        assert!(surface.has_element(&Selector::class("article-header")));
        assert!(surface.has_element(&Selector::class("article-content")));
        assert!(!surface.has_element(&Selector::id("blog-posts")));
        assert_eq!(surface.query(), "?id=a");
        assert_eq!(surface.page_kind(), Some("article"));
    }

    #[test]
    fn test_to_html() {
        let mut surface = MemorySurface::for_page(PageKind::Blog, "");
        surface.set_title("Blog");
        surface.set_inner_html(&Selector::id("blog-posts"), "<p>cards</p>");
        surface.set_style(&Selector::tag("header"), "background", "red");

        let html = surface.to_html();
        assert!(html.contains("<title>Blog</title>"));
        assert!(html.contains(r#"<body data-page="blog">"#));
        assert!(html.contains(r#"<header style="background: red;"></header>"#));
        assert!(html.contains(r#"<div id="blog-posts"><p>cards</p></div>"#));
    }
}
