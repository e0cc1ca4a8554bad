//! Schema declaration loading.
//!
//! A schema declaration is one file holding a single mapping from field
//! name to field declaration, authored as JSON or YAML. Declarations are
//! kept as loosely typed `serde_json` values because their shape is
//! open-ended; the classifier in [`crate::erd`] gives them meaning.

use serde_json::Value;
use std::fs;
use std::path::Path;

/// Field-name to field-declaration mapping, in authoring order.
pub type FieldMap = serde_json::Map<String, Value>;

/// One loaded schema declaration: the entity it names and its fields.
#[derive(Debug, Clone)]
pub struct SchemaSource {
    /// Entity name, derived from the source file's stem.
    pub name: String,
    /// The declaration's fields, in authoring order.
    pub fields: FieldMap,
}

impl SchemaSource {
    pub fn new(name: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// Load a schema declaration from a file.
///
/// Returns `None` if the file cannot be read, does not parse as JSON/YAML,
/// or its top-level value is not a mapping. Callers skip such sources; a
/// bad declaration never fails the run.
pub fn load_source(path: &Path) -> Option<SchemaSource> {
    let name = path.file_stem()?.to_str()?.to_string();
    let raw = fs::read_to_string(path).ok()?;

    let value = parse_declaration(path, &raw)?;
    match value {
        Value::Object(fields) => Some(SchemaSource { name, fields }),
        _ => None,
    }
}

fn parse_declaration(path: &Path, raw: &str) -> Option<Value> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml_ng::from_str(raw).ok(),
        _ => serde_json::from_str(raw).ok(),
    }
}
