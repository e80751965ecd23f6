//! SVG content sniffing.

use crate::resource::{Probe, BODY_PREFIX_CHARS};

/// Decide whether a response looks like SVG from its content type and body.
pub fn is_svg_content(content_type: &str, body: &str) -> bool {
    if content_type.to_lowercase().contains("svg") {
        return true;
    }

    let body = body.trim_start();
    if body.starts_with("<svg") {
        return true;
    }

    if body.starts_with("<?xml") {
        let head: String = body.chars().take(BODY_PREFIX_CHARS).collect();
        return head.contains("svg");
    }

    false
}

impl Probe {
    /// A probe matches when it returned 200 with SVG content.
    pub fn is_svg(&self) -> bool {
        self.status == 200 && is_svg_content(&self.content_type, &self.body_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_wins_regardless_of_body() {
        assert!(is_svg_content("image/svg+xml", ""));
        assert!(is_svg_content("Image/SVG+XML; charset=utf-8", "GIF89a"));
    }

    #[test]
    fn test_svg_tag_wins_regardless_of_content_type() {
        let body = "<svg xmlns=\"http://www.w3.org/2000/svg\"/>";
        assert!(is_svg_content("application/octet-stream", body));
        assert!(is_svg_content("", "\n\t  <svg></svg>"));
    }

    #[test]
    fn test_xml_declaration_with_svg() {
        let body = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE svg PUBLIC>";
        assert!(is_svg_content("text/xml", body));
    }

    #[test]
    fn test_xml_without_svg_in_prefix() {
        let body = format!("<?xml version=\"1.0\"?>{}<svg/>", " ".repeat(300));
        assert!(!is_svg_content("application/xml", &body));
        assert!(!is_svg_content("application/xml", "<?xml version=\"1.0\"?><rss/>"));
    }

    #[test]
    fn test_non_svg() {
        assert!(!is_svg_content("text/html", "<html><body>login</body></html>"));
        assert!(!is_svg_content("image/png", "\u{89}PNG"));
        assert!(!is_svg_content("", ""));
    }

    #[test]
    fn test_probe_requires_ok_status() {
        let probe = Probe {
            status: 404,
            content_type: "image/svg+xml".into(),
            body_prefix: "<svg/>".into(),
        };
        assert!(!probe.is_svg());

        let probe = Probe {
            status: 200,
            ..probe
        };
        assert!(probe.is_svg());
    }
}
