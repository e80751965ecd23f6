//! Candidate URL generation.

/// Build the ordered list of URLs to try for a resource.
///
/// Most likely to serve the original file comes first; the untouched URL is
/// always last.
pub fn candidate_urls(src: &str) -> Vec<String> {
    let base = src.split('?').next().unwrap_or(src);

    vec![
        format!("{}?format=original&redirect=true", base),
        format!("{}?redirect=true", base),
        format!("{}?format=original", base),
        base.to_string(),
        src.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_strip_query() {
        let src = "https://api.miro.com/v2/boards/b/resources/images/42?format=preview&redirect=false";
        let base = "https://api.miro.com/v2/boards/b/resources/images/42";

        assert_eq!(
            candidate_urls(src),
            vec![
                format!("{}?format=original&redirect=true", base),
                format!("{}?redirect=true", base),
                format!("{}?format=original", base),
                base.to_string(),
                src.to_string(),
            ]
        );
    }

    #[test]
    fn test_candidates_without_query() {
        let src = "https://files.example.com/a.svg";
        let urls = candidate_urls(src);
        assert_eq!(urls.len(), 5);
        assert_eq!(urls[0], "https://files.example.com/a.svg?format=original&redirect=true");
        assert_eq!(urls[3], src);
        assert_eq!(urls[4], src);
    }

    #[test]
    fn test_candidates_order_is_stable() {
        let src = "https://x/y?z=1";
        let urls = candidate_urls(src);
        assert_eq!(urls, candidate_urls(src));
        assert!(urls[0].contains("format=original") && urls[0].contains("redirect=true"));
        assert_eq!(urls.last().map(String::as_str), Some(src));
    }
}
