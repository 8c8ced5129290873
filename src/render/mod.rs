//! HTML snippets for list cards and detail headers

mod cards;
mod detail;

pub use cards::{render_cards, tech_tags, Card};
pub use detail::DetailHeader;
