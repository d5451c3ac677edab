//! CLI for the Keep → Instapaper converter.

use anyhow::{Context, Result};
use clap::Parser;
use keeppaper_core::convert;
use std::path::PathBuf;

/// Convert Google Keep bookmarks into Instapaper format.
///
/// Writes ignore.txt, instapaper.csv and instapaper.html into the current
/// directory, overwriting any previous run.
#[derive(Debug, Parser)]
#[command(name = "keeppaper", version)]
#[command(about = "Convert Google Keep bookmarks into Instapaper format")]
pub struct Cli {
    /// Google Keep takeout path (.../Takeout/Keep).
    pub takeout_path: PathBuf,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.run()
    }

    pub fn run(&self) -> Result<()> {
        let out_dir = std::env::current_dir().context("resolve current directory")?;
        let summary = convert(&self.takeout_path, &out_dir)?;
        println!("{summary}");
        Ok(())
    }
}
