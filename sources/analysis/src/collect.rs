use model::types::{FieldDescriptor, TypeDescriptor};

use crate::accessor::AccessorState;
use crate::hierarchy;
use crate::visibility;

/// A field visible to generated code, tagged with the hierarchy level that
/// declares it.
#[derive(Debug, Clone)]
pub struct AccessibleField<'a> {
    pub field: &'a FieldDescriptor,
    pub level: &'a TypeDescriptor,
    pub accessor: AccessorState,
}

/// Gathers the leaf's own instance fields, then every ancestor field the
/// leaf can reach, in walker order.
///
/// Own fields are not visibility filtered: the leaf always reaches its own
/// declarations, private included. Each level is processed independently,
/// so a shadowed name appears once per eligible level.
pub fn collect(leaf: &TypeDescriptor, modifiable_only: bool) -> Vec<AccessibleField<'_>> {
    let mut fields = Vec::new();

    for field in leaf.fields.iter() {
        if field.is_static {
            continue;
        }

        if modifiable_only && field.is_final {
            continue;
        }

        fields.push(AccessibleField {
            field,
            level: leaf,
            accessor: AccessorState::None,
        });
    }

    for ancestor in hierarchy::ancestors(leaf) {
        for field in ancestor.fields.iter() {
            if !visibility::is_accessible(field, &leaf.package, &ancestor.package) {
                continue;
            }

            if modifiable_only && field.is_final {
                continue;
            }

            fields.push(AccessibleField {
                field,
                level: ancestor,
                accessor: AccessorState::None,
            });
        }
    }

    fields
}
