//! Markup escaping.
//!
//! Both functions neutralize `&`, `<`, `>` and `"`. Text content gets the same
//! table as attribute values so a quote never needs context to be safe.

/// Append `text` to `out`, escaped for use as element content.
pub(crate) fn escape_text_into(text: &str, out: &mut String) {
    html_escape::encode_double_quoted_attribute_to_string(text, out);
}

/// Append `value` to `out`, escaped for use inside a double-quoted attribute.
pub(crate) fn escape_attribute_into(value: &str, out: &mut String) {
    html_escape::encode_double_quoted_attribute_to_string(value, out);
}

/// Escape `text` for use as element content.
///
/// ```
/// assert_eq!(weave_markup::escape_text("A & <B>"), "A &amp; &lt;B&gt;");
/// ```
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_text_into(text, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(
            escape_text(r#"a < b & c > "d""#),
            "a &lt; b &amp; c &gt; &quot;d&quot;"
        );
    }

    #[test]
    fn test_escape_attribute_quotes() {
        let mut out = String::new();
        escape_attribute_into(r#"say "hi""#, &mut out);
        assert_eq!(out, "say &quot;hi&quot;");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_text("plain text, ünïcödé"), "plain text, ünïcödé");
    }

    #[test]
    fn test_escape_appends() {
        let mut out = "prefix:".to_owned();
        escape_text_into("&", &mut out);
        assert_eq!(out, "prefix:&amp;");
    }

    proptest! {
        #[test]
        fn prop_escaped_output_has_no_reserved_characters(input in ".*") {
            let escaped = escape_text(&input);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
        }

        #[test]
        fn prop_every_ampersand_starts_an_entity_once(input in "[a-z&<>\" ]{0,40}") {
            let escaped = escape_text(&input);
            let expected = input.chars().filter(|c| matches!(c, '&' | '<' | '>' | '"')).count();
            prop_assert_eq!(escaped.matches('&').count(), expected);
            let unescaped = escaped
                .replace("&lt;", "<")
                .replace("&gt;", ">")
                .replace("&quot;", "\"")
                .replace("&amp;", "&");
            prop_assert_eq!(unescaped, input);
        }
    }
}
