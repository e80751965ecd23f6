//! Configuration validation logic.

use crate::config::Config;
use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// Largest page size the items endpoint accepts.
const MAX_PAGE_SIZE: u32 = 50;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_board_id(&config.board.board_id)?;
    validate_token(&config.board.access_token)?;
    validate_api_root(&config.api.api_root)?;

    if config.api.page_size == 0 || config.api.page_size > MAX_PAGE_SIZE {
        return Err(Error::ConfigValidation {
            field: "page_size".to_string(),
            message: format!(
                "Page size must be between 1 and {} (got {})",
                MAX_PAGE_SIZE, config.api.page_size
            ),
        });
    }

    if config.api.request_timeout_secs == 0 || config.api.listing_timeout_secs == 0 {
        return Err(Error::ConfigValidation {
            field: "timeout".to_string(),
            message: "Timeouts must be at least one second".to_string(),
        });
    }

    Ok(())
}

/// Validate the board ID.
pub fn validate_board_id(board_id: &str) -> Result<()> {
    if board_id.is_empty() {
        return Err(Error::MissingConfig("board_id".to_string()));
    }

    let pattern = Regex::new(r"^[^/?#\s]+$").expect("board id pattern is valid");
    if !pattern.is_match(board_id) {
        return Err(Error::ConfigValidation {
            field: "board_id".to_string(),
            message: format!(
                "Board ID '{}' contains invalid characters. Use the ID from the board URL.",
                board_id
            ),
        });
    }

    let lower = board_id.to_lowercase();
    if lower == "replaceme" || lower == "board_id" || lower == "your_board_id" {
        return Err(Error::ConfigValidation {
            field: "board_id".to_string(),
            message: "Board ID appears to be a placeholder.".to_string(),
        });
    }

    Ok(())
}

/// Validate the access token.
pub fn validate_token(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(Error::MissingConfig("access_token".to_string()));
    }

    // Check for placeholder values
    let token_lower = token.to_lowercase();
    if token_lower.contains("replaceme") || token_lower.contains("your_token") {
        return Err(Error::ConfigValidation {
            field: "access_token".to_string(),
            message: "Token appears to be a placeholder. Please provide your actual access token."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate the API root URL.
pub fn validate_api_root(api_root: &str) -> Result<()> {
    let url = Url::parse(api_root)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "api_root".to_string(),
            message: format!("Unsupported scheme '{}'", url.scheme()),
        });
    }

    if url.cannot_be_a_base() {
        return Err(Error::ConfigValidation {
            field: "api_root".to_string(),
            message: format!("'{}' cannot be used as a base URL", api_root),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.board.board_id = "uXjVOabc123=".to_string();
        config.board.access_token = "eyJtaXJvLm9yaWdpbiI6ImV1MDEifQ_abc".to_string();
        config
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_board_and_token() {
        let mut config = valid_config();
        config.board.board_id.clear();
        assert!(matches!(
            validate_config(&config),
            Err(Error::MissingConfig(_))
        ));

        let mut config = valid_config();
        config.board.access_token = "  ".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_invalid_board_id() {
        assert!(validate_board_id("abc/def").is_err());
        assert!(validate_board_id("abc?x=1").is_err());
        assert!(validate_board_id("has space").is_err());
        assert!(validate_board_id("replaceme").is_err());
    }

    #[test]
    fn test_placeholder_token() {
        assert!(validate_token("REPLACEME").is_err());
        assert!(validate_token("your_token_here").is_err());
    }

    #[test]
    fn test_page_size_bounds() {
        let mut config = valid_config();
        config.api.page_size = 0;
        assert!(validate_config(&config).is_err());
        config.api.page_size = 51;
        assert!(validate_config(&config).is_err());
        config.api.page_size = 10;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_api_root() {
        assert!(validate_api_root("https://api.miro.com/v2").is_ok());
        assert!(validate_api_root("http://127.0.0.1:8080").is_ok());
        assert!(validate_api_root("ftp://example.com").is_err());
        assert!(validate_api_root("not a url").is_err());
    }
}
