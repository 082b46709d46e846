//! Scraping editable values out of a table row.
//!
//! Rows follow the inline-edit markup convention: each editable cell is a
//! `<td class="edit-row">` whose first child element is the editor, named
//! `edit_*` or `chk_*`. The cell's column header supplies the field name.

use crate::error::{Error, Result};
use crate::html::table::HtmlTableLine;
use crate::text::strip_whitespace;
use html5ever::tendril::TendrilSink;
use html5ever::{LocalName, Namespace, ParseOpts, QualName, parse_fragment};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::collections::HashMap;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
const EDIT_ROW_CLASS: &str = "edit-row";
const EDITOR_PREFIXES: [&str; 2] = ["edit", "chk"];

/// Extract `header → value` pairs from the editable cells of `line`.
///
/// A value cell is matched to the header at the same column position.
///
/// # Errors
///
/// Returns [`Error::Html`] if an editable cell has no header or two cells
/// share a header.
pub fn html_fields(line: &HtmlTableLine) -> Result<HashMap<String, String>> {
    // Dropping an `RcDom` empties every node's children, so both trees must
    // outlive the handles collected from them.
    let data_dom = parse_row(&line.data);
    let header_dom = parse_row(&line.headers);
    let cells = elements(&data_dom, "td");
    let headers = elements(&header_dom, "th");
    let mut output = HashMap::new();

    for (column, cell) in cells.iter().enumerate() {
        if !has_class(cell, EDIT_ROW_CLASS) {
            continue;
        }
        let Some(editor) = find_editor(cell) else {
            log::debug!("row {}: editable cell {column} has no editor", line.id);
            continue;
        };

        let header = headers.get(column).ok_or_else(|| {
            Error::Html(format!(
                "row {}: no header for column {column} ({} headers)",
                line.id,
                headers.len()
            ))
        })?;
        let key = strip_whitespace(&text_content(header));
        let value = editor_value(&editor);

        if output.insert(key.clone(), value).is_some() {
            return Err(Error::Html(format!(
                "row {}: duplicate header {key:?}",
                line.id
            )));
        }
    }

    Ok(output)
}

/// Parse markup as the content of a `<tr>`.
fn parse_row(html: &str) -> RcDom {
    let context = QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from("tr"));
    parse_fragment(RcDom::default(), ParseOpts::default(), context, Vec::new()).one(html)
}

/// Elements named `tag` in document order, not descending into matches.
fn elements(dom: &RcDom, tag: &str) -> Vec<Handle> {
    let mut found = Vec::new();
    collect(&dom.document, tag, &mut found);
    found
}

fn collect(handle: &Handle, tag: &str, found: &mut Vec<Handle>) {
    if let NodeData::Element { name, .. } = &handle.data {
        if &*name.local == tag {
            found.push(handle.clone());
            return;
        }
    }
    for child in handle.children.borrow().iter() {
        collect(child, tag, found);
    }
}

fn attribute(handle: &Handle, attr_name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == attr_name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

fn has_class(handle: &Handle, class: &str) -> bool {
    attribute(handle, "class").is_some_and(|c| c.split_whitespace().any(|c| c == class))
}

/// First direct child element named like an editor.
fn find_editor(cell: &Handle) -> Option<Handle> {
    cell.children
        .borrow()
        .iter()
        .find(|child| {
            attribute(child, "name")
                .is_some_and(|name| EDITOR_PREFIXES.iter().any(|p| name.starts_with(*p)))
        })
        .cloned()
}

/// The editor's `value` attribute; checkboxes without one report whether
/// they are checked.
fn editor_value(editor: &Handle) -> String {
    if let Some(value) = attribute(editor, "value") {
        return value;
    }
    let is_checkbox = attribute(editor, "type").is_some_and(|t| t.eq_ignore_ascii_case("checkbox"));
    if is_checkbox {
        attribute(editor, "checked").is_some().to_string()
    } else {
        String::new()
    }
}

fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    push_text(handle, &mut text);
    text
}

fn push_text(handle: &Handle, text: &mut String) {
    if let NodeData::Text { contents } = &handle.data {
        text.push_str(&contents.borrow());
    }
    for child in handle.children.borrow().iter() {
        push_text(child, text);
    }
}
