//! Diagram assembly.

use crate::erd::entity::generate_entity;
use crate::schema::SchemaSource;

/// First line of every diagram document.
pub const DIAGRAM_HEADER: &str = "erDiagram";

/// An ERD document under construction: the accumulated text plus counters
/// for the CLI summary. The default value is an empty fragment; use
/// [`Diagram::new`] to start a document with its header line.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    pub text: String,
    pub entity_count: usize,
    pub relationship_count: usize,
}

impl Diagram {
    pub fn new() -> Self {
        Self {
            text: format!("{DIAGRAM_HEADER}\n"),
            ..Self::default()
        }
    }
}

/// Assemble the complete diagram document from loaded schema sources, in
/// source order. Each source contributes its entity block, its relationship
/// edges, and any synthetic child entities, before the next source begins.
pub fn assemble<'a, I>(sources: I) -> Diagram
where
    I: IntoIterator<Item = &'a SchemaSource>,
{
    let mut diagram = Diagram::new();

    for source in sources {
        generate_entity(&mut diagram, &source.name, &source.fields);
    }

    diagram
}
