//! Header blocks for detail pages

use super::cards::tech_tags;
use crate::catalog::{Article, ContentItem, Project};
use crate::helpers::long_date;

/// Header block shown above a detail page's content
pub trait DetailHeader: ContentItem {
    fn render_header(&self) -> String;
}

impl DetailHeader for Article {
    fn render_header(&self) -> String {
        format!(
            r#"
            <a href="{back}" class="back-link">{back_label}</a>
            <h1 class="article-title">{title}</h1>
            <div class="article-meta">{date} • {read_time}</div>
        "#,
            back = Self::KIND.list_page(),
            back_label = Self::KIND.back_label(),
            title = self.title,
            date = long_date(&self.date),
            read_time = self.read_time,
        )
    }
}

impl DetailHeader for Project {
    fn render_header(&self) -> String {
        format!(
            r#"
            <a href="{back}" class="back-link">{back_label}</a>
            <h1 class="project-title">{title}</h1>
            <p style="color: #94a3b8; margin-bottom: 1rem;">{description}</p>
            <div class="project-tech" style="margin-bottom: 1rem;">{tags}</div>
            <div class="project-links">{links}</div>
        "#,
            back = Self::KIND.list_page(),
            back_label = Self::KIND.back_label(),
            title = self.title,
            description = self.description,
            tags = tech_tags(&self.tech),
            links = project_links(self),
        )
    }
}

/// External links of a project; absent or empty links are left out
fn project_links(project: &Project) -> String {
    [
        (project.github.as_deref(), "GitHub"),
        (project.demo.as_deref(), "Live Demo"),
    ]
    .into_iter()
    .filter_map(|(href, label)| match href {
        Some(href) if !href.is_empty() => Some(format!(
            r#"<a href="{}" target="_blank" class="project-link">{}</a>"#,
            href, label
        )),
        _ => None,
    })
    .collect()
}
