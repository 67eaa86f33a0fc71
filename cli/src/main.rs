use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use toothseg_eval::prelude::{run, Config, ConfigType, RootPair};

#[derive(Parser)]
#[command(name = "toothseg-eval")]
#[command(about = "Scores per-point tooth-segmentation predictions against FDI ground truth")]
struct Cli {
    /// Raw-data root holding one folder per subject (repeatable)
    #[arg(long = "raw", required = true)]
    raw: Vec<PathBuf>,

    /// Prediction root holding the matching *_label.ply files (repeatable,
    /// paired with --raw by position)
    #[arg(long = "out", required = true)]
    out: Vec<PathBuf>,

    /// Emit a progress line every N folders (0 disables progress)
    #[arg(long, default_value_t = 10)]
    progress_interval: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    if cli.raw.len() != cli.out.len() {
        anyhow::bail!(
            "--raw and --out must be paired: got {} raw roots and {} prediction roots",
            cli.raw.len(),
            cli.out.len()
        );
    }

    let pairs: Vec<RootPair> = cli
        .raw
        .into_iter()
        .zip(cli.out)
        .map(|(raw, out)| RootPair::new(raw, out))
        .collect();

    let mut cfg = Config::default();
    cfg.progress_interval = cli.progress_interval;

    let report = run(&pairs, &cfg)
        .map_err(|e| anyhow::anyhow!("failed to evaluate dataset: {e}"))?;

    println!("total_num: {}", report.valid_samples());
    match report.mean_accuracy() {
        Some(mean) => println!("Over all Results: {mean}"),
        None => println!("Over all Results: No valid data processed"),
    }

    Ok(())
}
