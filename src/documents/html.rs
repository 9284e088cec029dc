//! Small helpers shared by the document templates

/// Escapes text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wraps page content in a complete HTML document with the given stylesheet.
pub fn html_document(head: &str, style: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
{head}
<style>
{style}
</style>
</head>
<body>
{body}
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Basket Leuven B"), "Basket Leuven B");
    }

    #[test]
    fn test_html_document_shell() {
        let document = html_document("", "body { margin: 0; }", "<p>hi</p>");
        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.contains("body { margin: 0; }"));
        assert!(document.contains("<p>hi</p>"));
    }
}
