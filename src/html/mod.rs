//! Inline-edit table support: rendering editable cells and reading them back.

pub mod controls;
pub mod fields;
pub mod table;

pub use controls::{HtmlElementType, InlineValue, inline_edit_controls, inline_edit_controls_with};
pub use fields::html_fields;
pub use table::HtmlTableLine;

use crate::binding::{FieldTarget, bind_html_fields};
use crate::error::Result;
use crate::text::strip_whitespace;
use std::collections::HashMap;

/// Scrape `line` and bind its values onto `target`.
///
/// `renames` maps table headers (spaces ignored) to model field names for
/// columns whose header differs from the field. Fields listed in `manual`
/// are collected there instead of being set. Each rename is applied once
/// to the scraped headers, so `A → B` and `B → C` move column `A` to `B`
/// and never on to `C`.
///
/// # Errors
///
/// Returns an error if the row cannot be scraped or a value cannot be
/// converted.
#[allow(clippy::implicit_hasher)]
pub fn entity_from_html<T: FieldTarget + ?Sized>(
    line: &HtmlTableLine,
    renames: Option<&HashMap<String, String>>,
    manual: Option<&mut HashMap<String, String>>,
    target: &mut T,
) -> Result<()> {
    let scraped = html_fields(line)?;
    let renames: HashMap<String, &String> = renames
        .into_iter()
        .flatten()
        .map(|(header, field)| (strip_whitespace(header), field))
        .collect();

    // A renamed column overwrites a scraped column with the target name
    let mut fields = HashMap::with_capacity(scraped.len());
    let mut renamed = Vec::new();
    for (header, value) in scraped {
        match renames.get(&header) {
            Some(field) => renamed.push(((*field).clone(), value)),
            None => {
                fields.insert(header, value);
            }
        }
    }
    fields.extend(renamed);

    bind_html_fields(&fields, manual, target)
}
