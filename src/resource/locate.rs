//! Resource locator: find the candidate URL that serves SVG content.

use crate::api::{Item, Pacer};
use crate::resource::{candidate_urls, ResourceFetcher};

/// A candidate URL that served SVG content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedResource {
    pub url: String,
    pub content_type: String,
    /// 1-based position of the URL in the candidate list.
    pub attempt: usize,
}

/// Probe the item's candidate URLs in order and return the first SVG match.
///
/// Items without a resource URL return `None` without any request. A failed
/// request only disqualifies that candidate.
pub async fn locate<F>(
    fetcher: &F,
    pacer: &dyn Pacer,
    item: &Item,
    quiet: bool,
) -> Option<MatchedResource>
where
    F: ResourceFetcher + ?Sized,
{
    let src = item.resource_url()?;

    for (index, url) in candidate_urls(src).into_iter().enumerate() {
        if !quiet {
            tracing::info!("    Trying: {}", url);
        }

        pacer.pause().await;

        let probe = match fetcher.probe(&url).await {
            Ok(probe) => probe,
            Err(e) => {
                if !quiet {
                    tracing::warn!("      Error: {}", e);
                }
                continue;
            }
        };

        if !quiet {
            tracing::info!(
                "      Status: {}, Content-Type: {}",
                probe.status,
                probe.content_type
            );
        }

        if probe.is_svg() {
            let matched = MatchedResource {
                url,
                content_type: probe.content_type,
                attempt: index + 1,
            };
            if !quiet {
                tracing::info!(
                    "      Found SVG content on candidate {} (Content-Type: {})",
                    matched.attempt,
                    matched.content_type
                );
            }
            return Some(matched);
        }

        if probe.status == 200 && !quiet {
            let preview: String = probe
                .body_prefix
                .chars()
                .take(100)
                .map(|c| if c == '\n' { ' ' } else { c })
                .collect();
            tracing::debug!("      Content preview: {}...", preview);
        }
    }

    if !quiet {
        tracing::info!("    No SVG content found for item {}", item.id());
    }

    None
}
