//! Board SVG Export - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use board_svg_export::{
    api::BoardApi,
    cli::Args,
    config::{validate_config, Config},
    download::export_board,
    error::{exit_codes, Error, Result},
    output::{print_config_summary, print_error, print_info, print_success, print_summary},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration; an explicitly named file must exist
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    let item_types: Vec<String> = config
        .item_types()
        .iter()
        .map(ToString::to_string)
        .collect();
    print_config_summary(
        &config.board.board_id,
        &item_types,
        &config.output_directory().display().to_string(),
    );

    let api = BoardApi::new(&config.board.access_token, &config.api)?;

    print_info("Scanning board...");
    let summary = export_board(&api, &config).await?;

    print_summary(&summary);

    if summary.types_failed() == 0 && summary.failed == 0 {
        print_success("Export complete");
    } else {
        print_info(&format!(
            "Export finished with {} failed item type(s) and {} failed download(s)",
            summary.types_failed(),
            summary.failed
        ));
    }

    Ok(())
}
