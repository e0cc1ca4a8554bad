//! Field classification for schema declarations.
//!
//! A field declaration is a loosely typed JSON value; its kind is decided
//! by shape, in a fixed precedence: direct reference, collection of
//! references, nested object (direct or collection), then scalar.

use serde_json::{Map, Value};

/// Annotation keys a plain scalar declaration may carry. A composite value
/// whose keys all fall inside this set is an annotated scalar, not a
/// nested object. The set must stay exact: adding a key here changes which
/// declarations get expanded into child entities.
pub const RECOGNIZED_KEYS: [&str; 4] = ["label", "type", "default", "enum"];

/// Primitive kind of a scalar field, as rendered in the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Text,
    Number,
    Date,
    Boolean,
    Identifier,
    /// Composite value without a recognized type tag.
    Object,
    /// Anything that matches no other shape.
    Unknown,
}

impl ScalarKind {
    /// Diagram token for this kind.
    pub fn token(self) -> &'static str {
        match self {
            ScalarKind::Text => "string",
            ScalarKind::Number => "number",
            ScalarKind::Date => "date",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Identifier => "id",
            ScalarKind::Object => "object",
            ScalarKind::Unknown => "unknown",
        }
    }

    /// Resolve an explicit type tag, if it is one of the recognized primitives.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "text" => Some(ScalarKind::Text),
            "number" => Some(ScalarKind::Number),
            "date" => Some(ScalarKind::Date),
            "boolean" => Some(ScalarKind::Boolean),
            "identifier" => Some(ScalarKind::Identifier),
            _ => None,
        }
    }
}

/// Resolved kind of one field declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind<'a> {
    /// Points at another entity by name. `kind` is the scalar kind of the
    /// carrying declaration, used for the attribute line.
    Reference { target: &'a str, kind: ScalarKind },
    /// Structured sub-shape, expanded into a synthetic child entity.
    Nested { shape: &'a Map<String, Value> },
    /// Plain attribute; no relationship.
    Scalar(ScalarKind),
}

/// A classified field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<'a> {
    pub kind: FieldKind<'a>,
    /// Whether the declaration was wrapped in an array. Multiplicity only
    /// affects the attribute line; relationship edges ignore it.
    pub collection: bool,
}

/// Classify one field declaration.
///
/// Never fails: shapes that match nothing degrade to `Scalar(Unknown)`.
pub fn classify(value: &Value) -> Classified<'_> {
    if let Some(fields) = value.as_object() {
        if let Some(target) = reference_target(fields) {
            return Classified {
                kind: FieldKind::Reference {
                    target,
                    kind: scalar_kind(value),
                },
                collection: false,
            };
        }
    }

    if let Some(items) = value.as_array() {
        return classify_collection(items);
    }

    if let Some(fields) = value.as_object() {
        if !fields.contains_key("type") && has_structural_keys(fields) {
            return Classified {
                kind: FieldKind::Nested { shape: fields },
                collection: false,
            };
        }
    }

    Classified {
        kind: FieldKind::Scalar(scalar_kind(value)),
        collection: false,
    }
}

fn classify_collection(items: &[Value]) -> Classified<'_> {
    if let Some(first) = items.first().and_then(Value::as_object) {
        if let Some(target) = reference_target(first) {
            return Classified {
                kind: FieldKind::Reference {
                    target,
                    kind: scalar_kind(&items[0]),
                },
                collection: true,
            };
        }
    }

    // The representative element decides both whether the collection is a
    // nested object and what shape the child entity takes.
    if let Some(shape) = find_first_object(items) {
        if has_structural_keys(shape) {
            return Classified {
                kind: FieldKind::Nested { shape },
                collection: true,
            };
        }
    }

    let kind = items.first().map(scalar_kind).unwrap_or(ScalarKind::Unknown);
    Classified {
        kind: FieldKind::Scalar(kind),
        collection: true,
    }
}

/// Reference targets must be strings; any other `ref` value drops the
/// declaration through to the nested/scalar rules.
fn reference_target(fields: &Map<String, Value>) -> Option<&str> {
    fields.get("ref").and_then(Value::as_str)
}

/// Whether a composite declaration has sub-fields beyond plain annotations.
fn has_structural_keys(fields: &Map<String, Value>) -> bool {
    fields
        .keys()
        .any(|key| !RECOGNIZED_KEYS.contains(&key.as_str()))
}

/// Depth-first search for the first non-array composite in a collection,
/// descending through any levels of nested arrays.
pub fn find_first_object(items: &[Value]) -> Option<&Map<String, Value>> {
    for item in items {
        match item {
            Value::Object(fields) => return Some(fields),
            Value::Array(nested) => {
                if let Some(found) = find_first_object(nested) {
                    return Some(found);
                }
            }
            _ => {}
        }
    }

    None
}

/// Scalar kind of a declaration: the explicit type tag when recognized,
/// `Object` for any other composite, `Unknown` otherwise.
pub(crate) fn scalar_kind(value: &Value) -> ScalarKind {
    match value {
        Value::Object(fields) => fields
            .get("type")
            .and_then(Value::as_str)
            .and_then(ScalarKind::from_tag)
            .unwrap_or(ScalarKind::Object),
        Value::Array(_) => ScalarKind::Object,
        _ => ScalarKind::Unknown,
    }
}
