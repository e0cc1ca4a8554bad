mod generate;
mod glob_util;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "erdgen")]
#[command(version)]
#[command(about = "Generate a Mermaid ER diagram from declarative data-model definitions", long_about = None)]
pub struct Cli {
    /// Schema file, directory, or glob pattern (e.g., models/**/*.json)
    #[arg(short, long, default_value = "./models")]
    pub input: PathBuf,

    /// Output directory for the generated erd.mmd
    #[arg(short, long, default_value = "./erd.mmd")]
    pub output: PathBuf,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    generate::run(cli.input, cli.output)
}
