//! Recursive entity generation.

use crate::erd::classify::{classify, FieldKind};
use crate::erd::diagram::Diagram;
use crate::erd::format::format_field;
use crate::schema::FieldMap;

/// Every relationship renders as exactly-one to zero-or-many, regardless
/// of the field's declared multiplicity.
const ONE_TO_ZERO_OR_MANY: &str = "||--o{";

/// Emit one entity into the diagram: its attribute block, its relationship
/// edges, then (pre-order) every synthetic child entity a nested-object
/// field gives rise to. Children are named `<entityName>_<fieldName>`;
/// collisions with real entities are not detected.
pub fn generate_entity(diagram: &mut Diagram, name: &str, fields: &FieldMap) {
    diagram.text.push_str(name);
    diagram.text.push_str(" {\n");
    for (field_name, declaration) in fields {
        diagram.text.push_str("  ");
        diagram.text.push_str(&format_field(field_name, declaration));
        diagram.text.push('\n');
    }
    diagram.text.push_str("}\n");
    diagram.entity_count += 1;

    let mut children: Vec<(String, &FieldMap)> = Vec::new();

    for (field_name, declaration) in fields {
        match classify(declaration).kind {
            FieldKind::Reference { target, .. } => {
                push_edge(diagram, name, target, field_name);
            }
            FieldKind::Nested { shape } => {
                let child_name = format!("{name}_{field_name}");
                push_edge(diagram, name, &child_name, field_name);
                children.push((child_name, shape));
            }
            FieldKind::Scalar(_) => {}
        }
    }

    for (child_name, shape) in children {
        generate_entity(diagram, &child_name, shape);
    }
}

fn push_edge(diagram: &mut Diagram, from: &str, to: &str, field_name: &str) {
    diagram
        .text
        .push_str(&format!("{from} {ONE_TO_ZERO_OR_MANY} \"{to}\" : \"{field_name}\"\n"));
    diagram.relationship_count += 1;
}
