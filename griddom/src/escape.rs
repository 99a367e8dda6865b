//! Escaping of untrusted text before it is placed into markup.

/// Escape text for use as element content.
///
/// Matches what a browser produces when text is assigned through
/// `textContent` and read back through `innerHTML`.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_escapes_markup() {
        assert_eq!(
            escape_text("<script>alert('x')</script> & co"),
            "&lt;script&gt;alert('x')&lt;/script&gt; &amp; co"
        );
    }

    #[test]
    fn attr_escapes_quotes() {
        assert_eq!(escape_attr(r#"a"b'c"#), "a&quot;b&#39;c");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_text("Bold 42"), "Bold 42");
        assert_eq!(escape_text("Засах"), "Засах");
    }
}
