//! End-of-run summary for a batch.

use console::Style;

use crate::batch::BatchReport;

/// Print per-file failures and warnings, then the counts line.
pub fn print_batch_summary(report: &BatchReport, verb: &str, dry_run: bool) {
    let warn = Style::new().yellow();
    let fail = Style::new().red().bold();

    for (path, warning) in report.warnings() {
        println!("  {} {}: {warning}", warn.apply_to("warning"), path.display());
    }
    for (path, error) in report.failures() {
        println!("  {} {}: {error}", fail.apply_to("failed"), path.display());
    }

    let written_label = if dry_run { "would write" } else { "written" };
    println!(
        "{} {} files: {} {written_label}, {} unchanged, {} skipped, {}",
        Style::new().bold().apply_to(capitalize(verb)),
        report.total(),
        Style::new().green().apply_to(report.written()),
        report.unchanged(),
        report.skipped(),
        failed_count(report.failed()),
    );
}

fn failed_count(failed: usize) -> String {
    let text = format!("{failed} failed");
    if failed > 0 {
        Style::new().red().bold().apply_to(text).to_string()
    } else {
        text
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
