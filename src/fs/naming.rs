//! Filename derivation and sanitization.

use std::sync::LazyLock;

use regex::Regex;

/// Extension every saved file carries.
pub const SVG_EXTENSION: &str = ".svg";

static QUOTED_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"filename="([^"]+)""#).expect("quoted filename pattern"));

static BARE_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"filename=([^;]+)").expect("bare filename pattern"));

/// Extract the filename from a `Content-Disposition` header value.
///
/// A quoted `filename="..."` is preferred over an unquoted `filename=...`.
pub fn parse_content_disposition(header: &str) -> Option<String> {
    if let Some(captures) = QUOTED_FILENAME.captures(header) {
        return captures.get(1).map(|m| m.as_str().to_string());
    }

    let value = BARE_FILENAME.captures(header)?.get(1)?.as_str();
    let value = value.trim().trim_matches('"').trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Make a name safe for common filesystems and give it a `.svg` extension.
///
/// Returns `None` when nothing usable is left.
pub fn sanitize_filename(name: &str) -> Option<String> {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = replaced.trim_matches(|c| c == '.' || c == ' ');
    if trimmed.is_empty() {
        return None;
    }

    if has_svg_extension(trimmed) {
        Some(trimmed.to_string())
    } else {
        Some(format!("{}{}", trimmed, SVG_EXTENSION))
    }
}

/// Case-insensitive check for a trailing `.svg`.
pub fn has_svg_extension(name: &str) -> bool {
    name.len() >= SVG_EXTENSION.len()
        && name.is_char_boundary(name.len() - SVG_EXTENSION.len())
        && name[name.len() - SVG_EXTENSION.len()..].eq_ignore_ascii_case(SVG_EXTENSION)
}

/// A destination filename and the base used when it collides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgName {
    /// Preferred file name, with extension.
    pub file_name: String,
    /// Name without the extension, used for `_N` suffixes.
    pub stem: String,
    /// Whether the name came from the server rather than the item ID.
    pub original: bool,
}

impl SvgName {
    /// Name recovered from a `Content-Disposition` filename.
    pub fn from_original(name: &str) -> Option<Self> {
        let file_name = sanitize_filename(name)?;
        Some(Self::new(file_name, true))
    }

    /// Name generated from the item ID.
    pub fn from_item_id(id: &str) -> Self {
        let file_name = match sanitize_filename(id) {
            Some(name) if has_svg_extension(id) => format!("{}{}", name, SVG_EXTENSION),
            Some(name) => name,
            None => format!("unknown{}", SVG_EXTENSION),
        };
        Self::new(file_name, false)
    }

    fn new(file_name: String, original: bool) -> Self {
        let stem = file_name[..file_name.len() - SVG_EXTENSION.len()].to_string();
        Self {
            file_name,
            stem,
            original,
        }
    }

    /// File name for the given collision counter.
    pub fn with_counter(&self, counter: u32) -> String {
        format!("{}_{}{}", self.stem, counter, SVG_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quoted() {
        assert_eq!(
            parse_content_disposition(r#"attachment; filename="diagram.svg""#),
            Some("diagram.svg".to_string())
        );
        assert_eq!(
            parse_content_disposition(r#"inline; filename="my; file.svg"; size=10"#),
            Some("my; file.svg".to_string())
        );
    }

    #[test]
    fn test_parse_unquoted() {
        assert_eq!(
            parse_content_disposition("attachment; filename=report.svg; size=1234"),
            Some("report.svg".to_string())
        );
        assert_eq!(
            parse_content_disposition("attachment; filename= spaced.svg "),
            Some("spaced.svg".to_string())
        );
    }

    #[test]
    fn test_parse_missing() {
        assert_eq!(parse_content_disposition("attachment"), None);
        assert_eq!(parse_content_disposition("inline; filename=\"\""), None);
        assert_eq!(parse_content_disposition(""), None);
    }

    #[test]
    fn test_sanitize_replaces_illegal_characters() {
        assert_eq!(
            sanitize_filename(r#"a<b>c:d"e/f\g|h?i*j.svg"#).as_deref(),
            Some("a_b_c_d_e_f_g_h_i_j.svg")
        );
    }

    #[test]
    fn test_sanitize_trims_and_appends_extension() {
        assert_eq!(sanitize_filename(" .logo. ").as_deref(), Some("logo.svg"));
        assert_eq!(sanitize_filename("Logo.SVG").as_deref(), Some("Logo.SVG"));
        assert_eq!(sanitize_filename("chart.png").as_deref(), Some("chart.png.svg"));
        assert_eq!(sanitize_filename(" ..  . "), None);
        assert_eq!(sanitize_filename(""), None);
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for name in [
            "diagram.svg",
            " .weird:name?. ",
            "../../etc/passwd",
            "x .svg",
            "tab\there",
            "Ünïcode ✓.SVG",
            ".svg",
        ] {
            let once = sanitize_filename(name).unwrap();
            assert_eq!(sanitize_filename(&once).as_deref(), Some(once.as_str()), "{name}");
        }
    }

    #[test]
    fn test_names_and_counters() {
        let name = SvgName::from_original("Report.SVG").unwrap();
        assert_eq!(name.file_name, "Report.SVG");
        assert_eq!(name.stem, "Report");
        assert!(name.original);
        assert_eq!(name.with_counter(2), "Report_2.svg");

        let name = SvgName::from_item_id("3458764521");
        assert_eq!(name.file_name, "3458764521.svg");
        assert_eq!(name.with_counter(1), "3458764521_1.svg");
        assert!(!name.original);
    }

    #[test]
    fn test_item_id_names_are_sanitized() {
        assert_eq!(SvgName::from_item_id("a/b").file_name, "a_b.svg");
        assert_eq!(SvgName::from_item_id("").file_name, "unknown.svg");
        assert_eq!(SvgName::from_item_id("x.svg").file_name, "x.svg.svg");
    }

    #[test]
    fn test_original_name_unusable() {
        assert!(SvgName::from_original("...").is_none());
    }
}
