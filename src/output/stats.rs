//! Run summary reporting.

use console::style;

use crate::download::RunResult;

/// Print totals and every failed item with its reason.
pub fn print_run_summary(result: &RunResult) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Summary:").bold());
    println!("  Listed:     {}", result.total);
    println!("  Downloaded: {}", style(result.succeeded).green());
    if !result.failed.is_empty() {
        println!("  Failed:     {}", style(result.failed.len()).red());
    }
    println!("  Bytes:      {}", result.bytes_written);

    if !result.failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").bold());
        for failed in &result.failed {
            println!("  {}: {}", failed.name, style(&failed.reason).red());
        }
    }
    println!("{}", style("═".repeat(50)).dim());
}
