//! Statistics reporting.

use console::style;

use crate::download::RunSummary;

/// Print the end-of-run summary.
pub fn print_summary(summary: &RunSummary) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Scanned:").bold());
    for scan in &summary.scans {
        match &scan.error {
            Some(error) => println!(
                "  {:<12} {} ({})",
                scan.item_type.as_str(),
                scan.items_seen,
                style(format!("failed: {}", error)).red()
            ),
            None => println!("  {:<12} {}", scan.item_type.as_str(), scan.items_seen),
        }
    }

    println!();
    println!(
        "Done. Saved {} SVG file(s) to {}",
        style(summary.saved).green().bold(),
        summary.output_dir.display()
    );
    if summary.saved > 0 {
        println!("  • {} files kept their original names", summary.original_names);
        println!("  • {} files used generated names (item IDs)", summary.generated_names);
    }
    if summary.unmatched > 0 {
        println!("  • {} items had no SVG content", summary.unmatched);
    }
    if summary.failed > 0 {
        println!("  • {} downloads failed", style(summary.failed).red());
    }
    println!("{}", style("═".repeat(50)).dim());
}
