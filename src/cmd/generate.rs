//! Generate command implementation: schema declarations in, Mermaid ERD out.

use super::glob_util;
use crate::erd;
use crate::schema::{self, SchemaSource};
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

/// The document is always written under this name inside the output
/// directory, whatever the directory is called.
const ERD_FILE_NAME: &str = "erd.mmd";

/// Run the generate command.
pub fn run(input: PathBuf, output: PathBuf) -> Result<()> {
    let files = glob_util::discover_sources(&input)?;

    eprintln!(
        "Generating ERD from {} schema source(s) [input: {}]",
        files.len(),
        input.display()
    );

    // Sources that fail to load contribute nothing; they are not errors.
    let sources: Vec<SchemaSource> = files
        .iter()
        .filter_map(|path| schema::load_source(path))
        .collect();

    let diagram = erd::assemble(&sources);

    fs::create_dir_all(&output)?;
    let target = output.join(ERD_FILE_NAME);
    fs::write(&target, &diagram.text)?;

    eprintln!("ERD written to: {}", target.display());
    eprintln!(
        "ERD: {} entities, {} relationships",
        diagram.entity_count, diagram.relationship_count
    );

    Ok(())
}
