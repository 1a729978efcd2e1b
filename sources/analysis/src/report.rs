use model::types::TypeDescriptor;

use crate::accessor::AccessorState;
use crate::collect::AccessibleField;
use support::name;

/// The assembled outcome of one analysis run: plain data, ready for line
/// oriented or tabular rendering by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Qualified name of the analyzed type.
    pub type_name: String,
    pub records: Vec<Record>,
}

impl Report {
    pub fn simple_name(&self) -> &str {
        name::simple_name_of(&self.type_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub value_type: String,
    pub field_name: String,
    /// Qualified name of the hierarchy level declaring the field.
    pub level: String,
    pub accessor: AccessorState,
}

/// Flattens the collected fields into the final report. The collector's
/// ordering is preserved; nothing is filtered or sorted here.
pub fn assemble(leaf: &TypeDescriptor, fields: Vec<AccessibleField<'_>>) -> Report {
    let records = fields
        .into_iter()
        .map(|entry| Record {
            value_type: entry.field.value_type.clone(),
            field_name: entry.field.name.clone(),
            level: entry.level.name.clone(),
            accessor: entry.accessor,
        })
        .collect();

    Report {
        type_name: leaf.name.clone(),
        records,
    }
}
