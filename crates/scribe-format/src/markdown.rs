//! HTML to Markdown conversion for the editor's display toggle

/// Convert an HTML fragment to Markdown
pub fn html_to_markdown(html: &str) -> String {
    html2md::parse_html(html, false).trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_loses_its_tags() {
        let markdown = html_to_markdown("<h1>Hi</h1>");
        assert!(markdown.contains("Hi"));
        assert!(!markdown.contains("<h1>"));
    }

    #[test]
    fn list_items_become_bullets() {
        let markdown = html_to_markdown("<ul><li>alpha</li><li>beta</li></ul>");
        assert!(markdown.contains("alpha"));
        assert!(markdown.contains("beta"));
        assert!(!markdown.contains("<li>"));
    }

    #[test]
    fn emphasis_is_preserved() {
        let markdown = html_to_markdown("<p><strong>bold</strong> text</p>");
        assert!(markdown.contains("**bold**"));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(html_to_markdown(""), "");
    }
}
