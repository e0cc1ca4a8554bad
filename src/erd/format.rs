//! Attribute line formatting.

use crate::erd::classify::{classify, FieldKind, ScalarKind};
use serde_json::Value;

/// Annotation keys in display priority order.
const ANNOTATION_PRIORITY: [&str; 3] = ["enum", "default", "label"];

/// Render one attribute line: `<type-token> <fieldName>`, with a `[]`
/// suffix for collections and at most one quoted trailing annotation
/// (enum over default over label).
///
/// Never fails: unrecognized declaration shapes render as `unknown`.
pub fn format_field(name: &str, declaration: &Value) -> String {
    let classified = classify(declaration);

    let token = match classified.kind {
        FieldKind::Reference { kind, .. } => kind.token(),
        FieldKind::Nested { .. } => ScalarKind::Object.token(),
        FieldKind::Scalar(kind) => kind.token(),
    };

    let mut line = if classified.collection {
        format!("{token}[] {name}")
    } else {
        format!("{token} {name}")
    };

    if let Some(note) = annotation(declaration) {
        line.push_str(" \"");
        line.push_str(&note);
        line.push('"');
    }

    line
}

/// Pick the annotation to display, if any. For collections the annotations
/// are read off the first element.
fn annotation(declaration: &Value) -> Option<String> {
    let fields = match declaration {
        Value::Object(fields) => fields,
        Value::Array(items) => items.first()?.as_object()?,
        _ => return None,
    };

    for key in ANNOTATION_PRIORITY {
        if let Some(value) = fields.get(key) {
            if !value.is_null() {
                return Some(annotation_text(value));
            }
        }
    }

    None
}

/// Display form of an annotation value: strings render bare, sequences
/// join their elements with `,`, everything else renders as compact JSON.
fn annotation_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(annotation_text)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}
