use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use shared::resume::Resume;
use tracing::warn;

/// Renders the portfolio page into a static dist directory the server ships.
#[derive(Parser, Debug)]
struct Cli {
    /// Output directory for the built assets.
    #[arg(long, default_value = "dist")]
    out: PathBuf,
    /// Optional JSON resume record overriding the built-in one.
    #[arg(long)]
    resume: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let cli = Cli::parse();

    let resume = match &cli.resume {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read resume file '{}'", path.display()))?;
            serde_json::from_str::<Resume>(&raw)
                .with_context(|| format!("invalid resume record in '{}'", path.display()))?
        }
        None => Resume::builtin(),
    };

    for warning in resume.completeness_warnings() {
        warn!("{warning}");
    }

    fs::create_dir_all(&cli.out)
        .with_context(|| format!("failed to create output directory '{}'", cli.out.display()))?;
    let index_path = cli.out.join("index.html");
    fs::write(&index_path, site::render_page(&resume))
        .with_context(|| format!("failed to write '{}'", index_path.display()))?;

    println!("wrote {}", index_path.display());
    Ok(())
}
