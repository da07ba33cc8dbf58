//! Datasplit: split a flat image + label dataset into train/val/test.
//!
//! Datasplit reads a directory of images (`.jpg`, `.png`, `.jpeg`) with
//! optional same-named `.txt` label files, shuffles the images and copies
//! them into `train/`, `val/` and `test/` directories, each with `images/`
//! and `labels/` subdirectories.
//!
//! # Modules
//!
//! - [`split`]: Discovery, planning and copying
//! - [`logging`]: Log subscriber setup for the CLI
//! - [`error`]: Error types for datasplit operations

pub mod error;
pub mod logging;
pub mod split;

use std::path::PathBuf;

use clap::Parser;

pub use error::SplitError;
pub use split::{
    partition_dataset, partition_dataset_with_rng, plan_split, split_counts, Split, SplitOptions,
    SplitPlan, SplitRatios, SplitReport,
};

/// The datasplit CLI application.
#[derive(Parser)]
#[command(name = "datasplit")]
#[command(version, about)]
struct Cli {
    /// Source directory with images and optional .txt labels.
    #[arg(long = "dataset-dir", alias = "dataset_dir")]
    dataset_dir: PathBuf,

    /// Output root; train/, val/ and test/ are created inside it.
    #[arg(long = "output-dir", alias = "output_dir")]
    output_dir: PathBuf,

    /// Fraction of images for the training split.
    #[arg(long = "train-ratio", alias = "train_ratio", default_value_t = 0.8)]
    train_ratio: f64,

    /// Fraction of images for the validation split. The test split gets the rest.
    #[arg(long = "val-ratio", alias = "val_ratio", default_value_t = 0.1)]
    val_ratio: f64,

    /// Seed for a reproducible shuffle.
    #[arg(long, env = "DATASPLIT_SEED")]
    seed: Option<u64>,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Report rendering for the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    fn parse(raw: &str) -> Result<Self, SplitError> {
        match raw {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(SplitError::UnsupportedOutput(format!(
                "'{}' (supported: text, json)",
                other
            ))),
        }
    }
}

/// Run the datasplit CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), SplitError> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Everything that can be rejected up front is checked before the
    // output tree is touched.
    let format = ReportFormat::parse(&cli.output)?;
    let opts = SplitOptions {
        ratios: SplitRatios::from_train_val(cli.train_ratio, cli.val_ratio)?,
        seed: cli.seed,
    };

    let report = partition_dataset(&cli.dataset_dir, &cli.output_dir, &opts)?;

    match format {
        ReportFormat::Json => {
            let json = report
                .to_json()
                .map_err(|source| SplitError::ReportWrite { source })?;
            println!("{}", json);
        }
        ReportFormat::Text => print!("{}", report),
    }

    Ok(())
}
