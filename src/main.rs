use clap::{Parser, Subcommand};
use ledger_merge::cli;
use ledger_merge::config::{LayoutPolicy, MergeConfig, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ledger-merge")]
#[command(about = "Consolidate BP04 ledger workbooks into a single sheet")]
#[command(long_about = "ledger-merge - Consolidate BP04 ledger workbooks

Reads every .xlsx file below the input directory. In each worksheet the BP04
marker on row 6 (column D, else column C) selects the column layout. Marker
rows set the account stamped on the lines that follow; lines dated
DD.MM.YYYY are copied with the date as DD/MM/YYYY and amounts as numbers.

COMMANDS:
  merge   - Build the consolidated workbook
  detect  - Show the layout of every worksheet

EXAMPLES:
  ledger-merge merge                              # input/ → output.xlsx
  ledger-merge merge -i exports -o ledger.xlsx
  ledger-merge merge --on-missing-layout skip-sheet
  ledger-merge detect -i exports")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge all ledger workbooks into one output workbook
    Merge {
        /// Directory searched recursively for .xlsx files
        #[arg(short, long, default_value = DEFAULT_INPUT_DIR, env = "LEDGER_MERGE_INPUT")]
        input: PathBuf,

        /// Output Excel file path (.xlsx)
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE, env = "LEDGER_MERGE_OUTPUT")]
        output: PathBuf,

        /// What to do with a worksheet that has no BP04 marker
        #[arg(long, value_enum, default_value_t = LayoutPolicy::Abort)]
        on_missing_layout: LayoutPolicy,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which layout every worksheet uses, without merging
    Detect {
        /// Directory searched recursively for .xlsx files
        #[arg(short, long, default_value = DEFAULT_INPUT_DIR, env = "LEDGER_MERGE_INPUT")]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::Merge {
            input,
            output,
            on_missing_layout,
            json,
        } => {
            let config = MergeConfig::new(input, output).with_layout_policy(on_missing_layout);
            cli::merge(config, json)?;
        }

        Commands::Detect { input } => cli::detect(input)?,
    }

    Ok(())
}
