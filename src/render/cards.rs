//! Card markup for list pages
//!
//! Item fields are inserted verbatim: catalog content is author-controlled.

use crate::catalog::{Article, ContentItem, Project};

/// An item that can be shown as a card on a list page
pub trait Card {
    fn render_card(&self, show_body: bool) -> String;
}

impl Card for Article {
    fn render_card(&self, show_body: bool) -> String {
        let url = Self::KIND.detail_url(&self.id);
        let excerpt = if show_body {
            format!("<p>{}</p>", self.excerpt)
        } else {
            String::new()
        };

        format!(
            r#"
        <article class="post-card" onclick="window.location.href='{url}'">
            <div class="post-meta">{date} • {read_time}</div>
            <h3><a href="{url}">{title}</a></h3>
            {excerpt}
            <a href="{url}" class="read-more">Read more →</a>
        </article>
    "#,
            url = url,
            date = self.date,
            read_time = self.read_time,
            title = self.title,
            excerpt = excerpt,
        )
    }
}

impl Card for Project {
    fn render_card(&self, show_body: bool) -> String {
        let url = Self::KIND.detail_url(&self.id);
        let description = if show_body {
            format!("<p>{}</p>", self.description)
        } else {
            String::new()
        };

        format!(
            r#"
        <div class="project-card" onclick="window.location.href='{url}'">
            <h3>{title}</h3>
            {description}
            <div class="project-tech">{tags}</div>
            <a href="{url}" class="read-more">Learn more →</a>
        </div>
    "#,
            url = url,
            title = self.title,
            description = description,
            tags = tech_tags(&self.tech),
        )
    }
}

/// One `tech-tag` span per entry, no separator
pub fn tech_tags(tech: &[String]) -> String {
    tech.iter()
        .map(|t| format!(r#"<span class="tech-tag">{}</span>"#, t))
        .collect()
}

/// Render a list of cards back to back
pub fn render_cards<'a, T, I>(items: I, show_body: bool) -> String
where
    T: Card + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|item| item.render_card(show_body))
        .collect()
}
