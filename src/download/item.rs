//! Per-item pipeline: locate, name, download.

use std::path::Path;

use crate::api::{Item, Pacer};
use crate::download::save::save_resource;
use crate::download::state::ItemOutcome;
use crate::fs::{parse_content_disposition, unique_destination, SvgName};
use crate::output::print_error;
use crate::resource::{locate, ResourceFetcher};

/// Ask the server for the resource's original filename.
///
/// Any failure simply means no name was recovered.
pub async fn resolve_original_name<F>(fetcher: &F, url: &str) -> Option<String>
where
    F: ResourceFetcher + ?Sized,
{
    let head = match fetcher.head(url).await {
        Ok(head) => head,
        Err(e) => {
            tracing::debug!("HEAD {} failed: {}", url, e);
            return None;
        }
    };

    if head.status != 200 {
        return None;
    }

    parse_content_disposition(head.content_disposition.as_deref()?)
}

/// Choose the destination name for a matched resource.
pub async fn resolve_name<F>(fetcher: &F, url: &str, item: &Item, quiet: bool) -> SvgName
where
    F: ResourceFetcher + ?Sized,
{
    let original = resolve_original_name(fetcher, url).await;

    if let Some(name) = original.as_deref().and_then(SvgName::from_original) {
        if !quiet {
            tracing::info!("    Original filename: {}", name.file_name);
        }
        return name;
    }

    if !quiet {
        tracing::info!("    No original filename found, using item ID");
    }
    SvgName::from_item_id(item.id())
}

/// Run one item through locate, naming and download.
pub async fn process_item<F>(
    fetcher: &F,
    probe_pacer: &dyn Pacer,
    item: &Item,
    output_dir: &Path,
    quiet: bool,
) -> ItemOutcome
where
    F: ResourceFetcher + ?Sized,
{
    let Some(matched) = locate(fetcher, probe_pacer, item, quiet).await else {
        return ItemOutcome::Unmatched;
    };

    let name = resolve_name(fetcher, &matched.url, item, quiet).await;
    let dest = unique_destination(output_dir, &name);

    if !quiet && dest.file_name().and_then(|n| n.to_str()) != Some(name.file_name.as_str()) {
        tracing::info!("    Filename conflict resolved: {}", dest.display());
    }

    match save_resource(fetcher, &matched.url, &dest).await {
        Ok(bytes) => {
            if !quiet {
                tracing::info!("Saved {} ({} bytes)", dest.display(), bytes);
            }
            ItemOutcome::Written {
                path: dest,
                original_name: name.original,
            }
        }
        Err(e) => {
            print_error(&format!(
                "Failed to download {} -> {}: {}",
                matched.url,
                dest.display(),
                e
            ));
            ItemOutcome::WriteFailed
        }
    }
}
