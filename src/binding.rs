//! Binding string fields onto typed models.
//!
//! Models opt in by implementing [`FieldTarget`], usually as a `match` over
//! their field names using the `parse_*` helpers below:
//!
//! ```
//! use ohara::binding::{FieldTarget, parse_optional, parse_value};
//! use ohara::Result;
//!
//! #[derive(Default)]
//! struct Filter {
//!     search: String,
//!     page: Option<u32>,
//! }
//!
//! impl FieldTarget for Filter {
//!     fn has_field(&self, name: &str) -> bool {
//!         matches!(name, "Search" | "Page")
//!     }
//!
//!     fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
//!         match name {
//!             "Search" => self.search = parse_value(name, value)?,
//!             "Page" => self.page = parse_optional(name, value)?,
//!             _ => {}
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use crate::error::{Error, Result};
use crate::text::strip_whitespace;
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

/// A model whose fields can be set from strings by name.
pub trait FieldTarget {
    /// Whether the model has a field called `name`.
    fn has_field(&self, name: &str) -> bool;

    /// Convert `value` and store it in field `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be converted to the field type.
    fn set_field(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Copy form fields onto `target`. Unknown fields and empty values are
/// skipped.
///
/// # Errors
///
/// Returns the first conversion error.
#[allow(clippy::implicit_hasher)]
pub fn bind_dictionary<T: FieldTarget + ?Sized>(
    fields: &HashMap<String, String>,
    target: &mut T,
) -> Result<()> {
    for (name, value) in fields {
        if value.is_empty() || !target.has_field(name) {
            continue;
        }
        target.set_field(name, value)?;
    }
    Ok(())
}

/// Copy scraped table fields onto `target`.
///
/// Known fields listed in `manual` are not set; their values are written
/// into `manual` for the caller to apply. Empty values are passed through so
/// optional fields can be cleared.
///
/// # Errors
///
/// Returns the first conversion error.
#[allow(clippy::implicit_hasher)]
pub fn bind_html_fields<T: FieldTarget + ?Sized>(
    fields: &HashMap<String, String>,
    mut manual: Option<&mut HashMap<String, String>>,
    target: &mut T,
) -> Result<()> {
    for (name, value) in fields {
        if !target.has_field(name) {
            log::debug!("no field {name:?} on target, skipping");
            continue;
        }
        if let Some(slot) = manual.as_deref_mut().and_then(|m| m.get_mut(name)) {
            slot.clone_from(value);
            continue;
        }
        target.set_field(name, value)?;
    }
    Ok(())
}

/// Parse a required value.
///
/// # Errors
///
/// Returns [`Error::Binding`] if `value` does not parse as `T`.
pub fn parse_value<T>(field: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| Error::binding(field, e.to_string()))
}

/// Parse a nullable value: empty input is `None`.
///
/// # Errors
///
/// Returns [`Error::Binding`] if a non-empty `value` does not parse as `T`.
pub fn parse_optional<T>(field: &str, value: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_value(field, value).map(Some)
    }
}

/// Parse an enum from its display name, ignoring spaces: `"On Hold"` parses
/// as `"OnHold"`.
///
/// # Errors
///
/// Returns [`Error::Binding`] if the name is not a variant of `T`.
pub fn parse_enum<T>(field: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    parse_value(field, &strip_whitespace(value))
}

/// Parse a checkbox-style flag.
///
/// # Errors
///
/// Returns [`Error::Binding`] for anything other than
/// `true`/`false`/`on`/`off`/`checked`/empty.
pub fn parse_flag(field: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "checked" => Ok(true),
        "false" | "off" | "" => Ok(false),
        other => Err(Error::binding(field, format!("not a flag: {other:?}"))),
    }
}
