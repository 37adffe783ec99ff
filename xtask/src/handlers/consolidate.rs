use anyhow::{Context, Result};
use bikemgr_assets::classes::scan_files;
use std::path::PathBuf;

const TITLE: &str = "Bike Manager PWA Consolidation Script";
const RULE_WIDTH: usize = 50;
const STEPS: [&str; 5] = [
    "HTML structure (preserved)",
    "CSS (Tailwind utilities + custom)",
    "JavaScript (with new modules)",
    "Remove CDN dependencies",
    "Add IndexedDB, crypto, biometric, camera, backup",
];
const NOTE: &str = "Note: Full consolidation will be done via direct file creation";

/// Renders the static consolidation checklist.
#[must_use]
pub fn banner() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let steps =
        STEPS.iter().enumerate().map(|(n, step)| format!("{}. {step}", n + 1)).collect::<Vec<_>>();

    format!("{TITLE}\n{rule}\n\nThis script will help consolidate:\n{}\n\n{NOTE}\n", steps.join("\n"))
}

/// Prints the checklist and, when markup files are given, the Tailwind classes they use.
///
/// # Result
/// Returns `Ok(())` after printing to stdout.
///
/// # Errors
/// Returns an error if any of the `scan` files cannot be read.
pub fn consolidate(scan: &[PathBuf]) -> Result<()> {
    print!("{}", banner());

    if scan.is_empty() {
        return Ok(());
    }

    let report = scan_files(scan).context("Failed to scan markup for Tailwind classes")?;

    println!("\nTailwind classes in use ({} classes, {} files):", report.len(), report.files.len());
    for class in &report.classes {
        println!("  {class}");
    }

    Ok(())
}
