//! Convert a content file to HTML

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::content::convert;

/// Convert `path` (or stdin for `-`) and print the HTML
pub fn run(path: &Path) -> Result<()> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        text
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?
    };

    println!("{}", convert(&text));
    Ok(())
}
