//! Mermaid ERD generation from schema declarations.
//!
//! This module provides:
//! - Field classification (scalar, reference, nested object, collection)
//! - Attribute line formatting with optional annotations
//! - Recursive entity generation with synthetic child entities
//! - Diagram assembly into a single `erDiagram` document

pub mod classify;
pub mod diagram;
pub mod entity;
pub mod format;

pub use classify::{classify, find_first_object, Classified, FieldKind, ScalarKind};
pub use diagram::{assemble, Diagram, DIAGRAM_HEADER};
pub use format::format_field;
