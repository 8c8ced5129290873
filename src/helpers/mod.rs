//! Helper functions shared by the renderers and page controller

mod date;
mod url;

pub use date::*;
pub use url::*;
