//! CLI subcommands

pub mod convert;
pub mod list;
pub mod render;
