//! Small string helpers shared by navigation and HTML code.

/// Turn a `PascalCase` identifier into words: `OrderList` → `Order List`.
///
/// A space is inserted before every uppercase letter and leading whitespace
/// is trimmed.
#[must_use]
pub fn to_sentence(value: &str) -> String {
    let mut output = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if c.is_uppercase() {
            output.push(' ');
        }
        output.push(c);
    }
    output.trim_start().to_string()
}

/// Remove spaces and line breaks, as used for header and enum keys.
#[must_use]
pub fn strip_whitespace(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '\n' | '\r'))
        .collect()
}

/// Escape text for use in HTML content or quoted attribute values.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            other => output.push(other),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_sentence_splits_words() {
        assert_eq!(to_sentence("OrderList"), "Order List");
        assert_eq!(to_sentence("Index"), "Index");
        assert_eq!(to_sentence("orderList"), "order List");
    }

    #[test]
    fn to_sentence_handles_acronyms_and_empty() {
        assert_eq!(to_sentence("ABC"), "A B C");
        assert_eq!(to_sentence(""), "");
    }

    #[test]
    fn strip_whitespace_removes_spaces_and_newlines() {
        assert_eq!(strip_whitespace(" Unit\r\n Price "), "UnitPrice");
        assert_eq!(strip_whitespace("\tTab"), "\tTab");
    }

    #[test]
    fn escape_html_escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom's & co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom&#39;s &amp; co&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
