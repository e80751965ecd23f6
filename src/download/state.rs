//! Run state tracking.

use std::path::PathBuf;

use crate::api::ItemType;

/// Terminal state of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// No candidate URL served SVG content.
    Unmatched,
    /// The resource was saved.
    Written { path: PathBuf, original_name: bool },
    /// A match was found but fetching or writing it failed.
    WriteFailed,
}

/// Result of scanning one item type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeScan {
    pub item_type: ItemType,
    pub items_seen: u64,
    /// Listing error that ended the scan early.
    pub error: Option<String>,
}

impl TypeScan {
    pub fn new(item_type: ItemType) -> Self {
        Self {
            item_type,
            items_seen: 0,
            error: None,
        }
    }
}

/// Counters for a whole export run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    pub scans: Vec<TypeScan>,
    pub saved: u64,
    pub original_names: u64,
    pub generated_names: u64,
    pub unmatched: u64,
    pub failed: u64,
}

impl RunSummary {
    /// Create an empty summary for the given output directory.
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            ..Default::default()
        }
    }

    /// Count one item's outcome.
    pub fn record(&mut self, outcome: &ItemOutcome) {
        match outcome {
            ItemOutcome::Unmatched => self.unmatched += 1,
            ItemOutcome::WriteFailed => self.failed += 1,
            ItemOutcome::Written { original_name, .. } => {
                self.saved += 1;
                if *original_name {
                    self.original_names += 1;
                } else {
                    self.generated_names += 1;
                }
            }
        }
    }

    /// Scan result for an item type, if it was scanned.
    pub fn scan(&self, item_type: ItemType) -> Option<&TypeScan> {
        self.scans.iter().find(|s| s.item_type == item_type)
    }

    /// Number of item types whose scan ended with a listing error.
    pub fn types_failed(&self) -> usize {
        self.scans.iter().filter(|s| s.error.is_some()).count()
    }

    /// Total items seen across all types.
    pub fn items_seen(&self) -> u64 {
        self.scans.iter().map(|s| s.items_seen).sum()
    }
}
