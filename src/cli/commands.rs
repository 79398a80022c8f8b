use crate::config::MergeConfig;
use crate::core::TracingReporter;
use crate::driver;
use crate::error::{MergeError, MergeResult};
use crate::types::LayoutVariant;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "ledger_merge=debug"
    } else {
        "ledger_merge=info"
    };

    // A subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .try_init();
}

/// Execute the merge command
pub fn merge(config: MergeConfig, json: bool) -> MergeResult<()> {
    if !json {
        println!("{}", "📒 Ledger merge".bold().green());
        println!("   Input:  {}", config.input_dir.display());
        println!("   Output: {}\n", config.output.display());
    }

    let summary = driver::merge(&config, &TracingReporter)?;

    if json {
        let rendered = serde_json::to_string_pretty(&summary)
            .map_err(|e| MergeError::Export(format!("Failed to render summary: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{}", "✅ Merge Complete!".bold().green());
    println!("   Files:  {}", summary.files);
    println!("   Sheets: {}", summary.sheets);
    if summary.sheets_skipped > 0 {
        println!(
            "   {}",
            format!("Skipped sheets (no BP04 marker): {}", summary.sheets_skipped).yellow()
        );
    }
    println!(
        "   Rows:   {} copied / {} read",
        summary.rows_copied, summary.rows_read
    );
    println!("   Excel file: {}\n", summary.output.display());

    Ok(())
}

/// Execute the detect command - show the layout of every worksheet
pub fn detect(input_dir: PathBuf) -> MergeResult<()> {
    println!("{}", "🔍 Ledger merge - Layout detection".bold().green());
    println!("   Input: {}\n", input_dir.display());

    let layouts = driver::detect(&input_dir)?;
    if layouts.is_empty() {
        println!("{}", "   No .xlsx files found".yellow());
        return Ok(());
    }

    let mut missing = 0;
    for entry in &layouts {
        let status = match entry.layout {
            Some(LayoutVariant::Primary) => "primary  (BP04 at D6)".green(),
            Some(LayoutVariant::Fallback) => "fallback (BP04 at C6)".cyan(),
            None => {
                missing += 1;
                "no marker".red().bold()
            }
        };
        println!(
            "   {} [{}]: {}",
            entry.file.display(),
            entry.sheet.bright_blue(),
            status
        );
    }

    println!();
    if missing > 0 {
        println!(
            "{}",
            format!("⚠️  {} sheet(s) without BP04 marker", missing).yellow()
        );
    } else {
        println!("{}", "✅ Every sheet has a known layout".bold().green());
    }

    Ok(())
}
