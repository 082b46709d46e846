//! `ohara scrape` command implementation.

use crate::error::Result;
use crate::html::{HtmlTableLine, html_fields};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Run the scrape command.
///
/// Reads row and header markup from files and prints the scraped fields as
/// JSON.
///
/// # Errors
///
/// Returns an error if a file cannot be read or the markup cannot be
/// scraped.
pub fn run(data: &Path, headers: &Path) -> Result<()> {
    let line = HtmlTableLine::new(
        Uuid::nil(),
        fs::read_to_string(data)?,
        fs::read_to_string(headers)?,
    );
    println!("{}", scrape_to_json(&line)?);
    Ok(())
}

fn scrape_to_json(line: &HtmlTableLine) -> Result<String> {
    // Sorted for stable output
    let fields: BTreeMap<String, String> = html_fields(line)?.into_iter().collect();
    Ok(serde_json::to_string_pretty(&fields)?)
}
