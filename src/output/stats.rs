//! Statistics reporting.

use console::style;

use crate::download::RunStats;

/// Print the download summary for a run.
pub fn print_run_stats(stats: &RunStats, download_dir: &str) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Download Summary:").bold());
    println!(
        "  Downloaded: {} of {} image(s) to '{}'",
        style(stats.downloaded).green(),
        stats.attempted,
        download_dir
    );
    if stats.failed > 0 {
        println!(
            "  Failed:     {} (see messages above)",
            style(stats.failed).red()
        );
    }
    println!("{}", style("═".repeat(50)).dim());
}
