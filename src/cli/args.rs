//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Board SVG export CLI.
#[derive(Parser, Debug)]
#[command(
    name = "board-svg-export",
    version,
    about = "Download all SVGs from a Miro board",
    long_about = "Bulk-download every SVG stored on a Miro board.\n\n\
                  Scans image, shape, sticky note, text, frame and app card items \
                  (plus documents with --include-docs) and saves each SVG with its \
                  original filename where the server provides one.\n\n\
                  Requests are paced to stay within the API's public rate limit."
)]
pub struct Args {
    /// Board ID, as shown in the board URL.
    #[arg(short, long, env = "MIRO_BOARD_ID")]
    pub board: Option<String>,

    /// Access token with at least `boards:read` scope.
    #[arg(short, long, env = "MIRO_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Destination folder [default: svgs].
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Also scan document items (files uploaded via "Upload file").
    #[arg(long)]
    pub include_docs: bool,

    /// Suppress per-file log lines.
    #[arg(long, short)]
    pub quiet: bool,

    /// Path to an optional configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the REST API root.
    #[arg(long)]
    pub api_root: Option<String>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(board) = self.board {
            config.board.board_id = board;
        }

        if let Some(token) = self.token {
            config.board.access_token = token;
        }

        if let Some(out) = self.out {
            config.options.output_directory = out;
        }

        if let Some(api_root) = self.api_root {
            config.api.api_root = api_root;
        }

        // Boolean flags (only override if set to non-default)
        if self.include_docs {
            config.options.include_documents = true;
        }

        if self.quiet {
            config.options.quiet = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_flags() {
        let args = Args::try_parse_from([
            "board-svg-export",
            "-b",
            "uXjVabc=",
            "-t",
            "secret",
            "-o",
            "out",
            "--include-docs",
            "--quiet",
        ])
        .unwrap();

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.board.board_id, "uXjVabc=");
        assert_eq!(config.board.access_token, "secret");
        assert_eq!(config.options.output_directory, PathBuf::from("out"));
        assert!(config.options.include_documents);
        assert!(config.options.quiet);
    }

    #[test]
    fn test_cli_keeps_file_values_when_absent() {
        let args = Args::try_parse_from(["board-svg-export", "--board", "b1"]).unwrap();

        let mut config = Config::default();
        config.board.access_token = "from-file".to_string();
        config.options.include_documents = true;
        args.merge_into_config(&mut config);

        assert_eq!(config.board.board_id, "b1");
        assert_eq!(config.board.access_token, "from-file");
        assert!(config.options.include_documents);
        assert_eq!(config.options.output_directory, PathBuf::from("svgs"));
    }
}
