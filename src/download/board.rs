//! Board export loop.

use std::path::Path;

use futures::StreamExt;

use crate::api::{pacer_for, BoardApi, ItemType, Pacer};
use crate::config::Config;
use crate::download::item::process_item;
use crate::download::state::{RunSummary, TypeScan};
use crate::error::Result;
use crate::fs::ensure_dir;
use crate::output::{create_spinner, print_info, print_warning};

/// Export every SVG on the configured board into the output directory.
///
/// A listing failure ends only that item type's scan; it is recorded in the
/// returned summary and the next type is scanned.
pub async fn export_board(api: &BoardApi, config: &Config) -> Result<RunSummary> {
    let output_dir = config.output_directory();
    ensure_dir(&output_dir)?;

    let probe_pacer = pacer_for(config.api.probe_delay());
    let mut summary = RunSummary::new(output_dir.clone());

    for item_type in config.item_types() {
        let scan = scan_item_type(
            api,
            config,
            probe_pacer.as_ref(),
            item_type,
            &output_dir,
            &mut summary,
        )
        .await;
        summary.scans.push(scan);
    }

    Ok(summary)
}

/// Scan all items of one type, recording each outcome in `summary`.
async fn scan_item_type(
    api: &BoardApi,
    config: &Config,
    probe_pacer: &dyn Pacer,
    item_type: ItemType,
    output_dir: &Path,
    summary: &mut RunSummary,
) -> TypeScan {
    let quiet = config.options.quiet;
    let mut scan = TypeScan::new(item_type);

    print_info(&format!("Scanning {} items...", item_type));
    let spinner = quiet.then(|| create_spinner(&format!("Scanning {} items", item_type)));

    let items = api.items(&config.board.board_id, item_type);
    futures::pin_mut!(items);

    while let Some(next) = items.next().await {
        let item = match next {
            Ok(item) => item,
            Err(e) => {
                print_warning(&format!("Failed to scan {} items: {}", item_type, e));
                scan.error = Some(e.to_string());
                break;
            }
        };

        scan.items_seen += 1;
        if let Some(spinner) = &spinner {
            spinner.set_message(format!(
                "Scanning {} items ({} found)",
                item_type, scan.items_seen
            ));
        }

        if !quiet {
            tracing::info!(
                "  Found {} item {}: {}",
                item_type,
                item.id(),
                item.resource_url().unwrap_or_default()
            );
        }

        let outcome = process_item(api, probe_pacer, &item, output_dir, quiet).await;
        summary.record(&outcome);
    }

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    print_info(&format!(
        "  Total {} items found: {}",
        item_type, scan.items_seen
    ));

    scan
}
