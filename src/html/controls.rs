//! Inline-edit cell markup.
//!
//! Each control pairs a hidden editor named `edit_{id}` (or a live
//! `chk_{id}` checkbox) with its read-only display named `select_{id}`.
//! Client script toggles between them; [`html_fields`] reads the editors
//! back.
//!
//! [`html_fields`]: crate::html::html_fields

use crate::text::escape_html;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use uuid::Uuid;

/// Client handler fired when an always-on checkbox changes.
pub const DEFAULT_JS_FUNCTION: &str = "onInlineEditClick(this)";

/// Kind of inline editor to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlElementType {
    /// Text input.
    Text,
    /// Numeric input.
    Number,
    /// Date input.
    Date,
    /// Checkbox that is always editable and reports changes immediately.
    CheckboxAlwaysOn,
    /// Checkbox editable only in edit mode.
    CheckBox,
    /// Select list, filled client-side from `elementName`.
    DropDown,
}

/// Cell value to render.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineValue {
    /// Plain text or an already formatted number.
    Text(String),
    /// Checkbox state.
    Flag(bool),
    /// Date and time.
    Date(NaiveDateTime),
}

impl InlineValue {
    fn as_flag(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Text(text) => matches!(
                text.trim().to_ascii_lowercase().as_str(),
                "true" | "on" | "checked"
            ),
            Self::Date(_) => false,
        }
    }

    fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Text(text) => {
                let text = text.trim();
                NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
                    .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S"))
                    .ok()
                    .or_else(|| {
                        NaiveDate::parse_from_str(text, "%Y-%m-%d")
                            .ok()
                            .and_then(|d| d.and_hms_opt(0, 0, 0))
                    })
            }
            Self::Flag(_) => None,
        }
    }
}

impl fmt::Display for InlineValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<&str> for InlineValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for InlineValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for InlineValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<NaiveDateTime> for InlineValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Date(value)
    }
}

/// Render the inline-edit control for one cell with the default handler.
#[must_use]
pub fn inline_edit_controls(
    id: Uuid,
    value: &InlineValue,
    element_name: &str,
    kind: HtmlElementType,
) -> String {
    inline_edit_controls_with(id, value, element_name, kind, DEFAULT_JS_FUNCTION)
}

/// Render the inline-edit control for one cell.
///
/// `element_name` is the class of drop-down lists; `js_function` is the
/// change handler of always-on checkboxes.
#[must_use]
pub fn inline_edit_controls_with(
    id: Uuid,
    value: &InlineValue,
    element_name: &str,
    kind: HtmlElementType,
    js_function: &str,
) -> String {
    let text = escape_html(&value.to_string());
    let checked = if value.as_flag() { " checked" } else { "" };

    match kind {
        HtmlElementType::Text => format!(
            "<input style='display:none' name='edit_{id}' value='{text}' /><span name='select_{id}'>{text}</span>"
        ),
        HtmlElementType::Number => format!(
            "<input style='display:none' name='edit_{id}' value='{text}' type='number' /><span name='select_{id}'>{text}</span>"
        ),
        HtmlElementType::CheckboxAlwaysOn => format!(
            "<input id='{id}' name='chk_{id}' onChange='{};' type='checkbox'{checked} />",
            escape_html(js_function)
        ),
        HtmlElementType::Date => {
            let (iso, shown) = value.as_date().map_or_else(
                || (String::new(), text.clone()),
                |d| {
                    (
                        d.format("%Y-%m-%d").to_string(),
                        d.format("%Y-%m-%d %H:%M:%S").to_string(),
                    )
                },
            );
            format!(
                "<input style='display:none' name='edit_{id}' type='date' value='{iso}' /><span name='select_{id}'>{shown}</span>"
            )
        }
        HtmlElementType::DropDown => format!(
            "<select class='{}' style='display:none' name='edit_{id}' value='{text}'></select><span name='select_{id}'>{text}</span>",
            escape_html(element_name)
        ),
        HtmlElementType::CheckBox => format!(
            "<input style='display:none' name='edit_{id}'{checked} type='checkbox' /><input name='select_{id}' type='checkbox'{checked} disabled='disabled' />"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{HtmlTableLine, html_fields};

    fn id() -> Uuid {
        Uuid::parse_str("6f1c2a4e-0b7d-4c53-9a51-7f2f6b0c9d11").unwrap()
    }

    #[test]
    fn text_control() {
        let html = inline_edit_controls(id(), &"Widget".into(), "", HtmlElementType::Text);
        assert_eq!(
            html,
            "<input style='display:none' name='edit_6f1c2a4e-0b7d-4c53-9a51-7f2f6b0c9d11' value='Widget' /><span name='select_6f1c2a4e-0b7d-4c53-9a51-7f2f6b0c9d11'>Widget</span>"
        );
    }

    #[test]
    fn number_control_has_number_type() {
        let html = inline_edit_controls(id(), &"4.5".into(), "", HtmlElementType::Number);
        assert!(html.contains("value='4.5' type='number'"));
    }

    #[test]
    fn text_is_escaped() {
        let html = inline_edit_controls(id(), &"it's <b>".into(), "", HtmlElementType::Text);
        assert!(html.contains("value='it&#39;s &lt;b&gt;'"));
    }

    #[test]
    fn always_on_checkbox_uses_handler() {
        let html = inline_edit_controls(id(), &true.into(), "", HtmlElementType::CheckboxAlwaysOn);
        assert!(html.contains("name='chk_6f1c2a4e"));
        assert!(html.contains("onChange='onInlineEditClick(this);'"));
        assert!(html.contains("type='checkbox' checked"));

        let html = inline_edit_controls_with(
            id(),
            &false.into(),
            "",
            HtmlElementType::CheckboxAlwaysOn,
            "toggle(this)",
        );
        assert!(html.contains("onChange='toggle(this);'"));
        assert!(!html.contains("checked"));
    }

    #[test]
    fn checkbox_pairs_editor_and_display() {
        let html = inline_edit_controls(id(), &"true".into(), "", HtmlElementType::CheckBox);
        assert_eq!(html.matches(" checked").count(), 2);
        assert!(html.contains("disabled='disabled'"));
    }

    #[test]
    fn date_control_formats_iso_value() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let html = inline_edit_controls(id(), &date.into(), "", HtmlElementType::Date);
        assert!(html.contains("type='date' value='2025-03-09'"));
        assert!(html.contains(">2025-03-09 14:30:00</span>"));

        let html = inline_edit_controls(id(), &"2025-03-09".into(), "", HtmlElementType::Date);
        assert!(html.contains("value='2025-03-09'"));
    }

    #[test]
    fn drop_down_carries_list_class() {
        let html = inline_edit_controls(id(), &"Open".into(), "status-list", HtmlElementType::DropDown);
        assert!(html.starts_with("<select class='status-list' style='display:none'"));
        assert!(html.contains("value='Open'></select>"));
    }

    #[test]
    fn rendered_controls_scrape_back() {
        let data = format!(
            "<td class=\"edit-row\">{}</td><td class=\"edit-row\">{}</td>",
            inline_edit_controls(id(), &"Widget".into(), "", HtmlElementType::Text),
            inline_edit_controls(id(), &true.into(), "", HtmlElementType::CheckboxAlwaysOn),
        );
        let line = HtmlTableLine::new(id(), data, "<th>Product</th><th>Active</th>");

        let fields = html_fields(&line).unwrap();
        assert_eq!(fields["Product"], "Widget");
        assert_eq!(fields["Active"], "true");
    }
}
