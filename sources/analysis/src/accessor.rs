use std::fmt;
use std::str::FromStr;

use enum_as_inner::EnumAsInner;
use model::types::{FieldDescriptor, TypeDescriptor};
use support::name;

use crate::collect::AccessibleField;
use crate::error::AnalysisError;
use crate::hierarchy;

/// The naming conventions a generator can ask about. Each one is a method
/// name prefix plus a signature shape, so adding a convention is a new
/// match arm, not a new type.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Convention {
    Getter,
    Setter,
    Wither,
}

impl Convention {
    pub fn prefix(&self) -> &'static str {
        match self {
            Convention::Getter => "get",
            Convention::Setter => "set",
            Convention::Wither => "with",
        }
    }

    /// Setters and withers take the field's value as their only parameter;
    /// getters take nothing.
    pub fn takes_value(&self) -> bool {
        !matches!(self, Convention::Getter)
    }

    /// The method name this convention expects for a field.
    pub fn method_name(&self, field_name: &str) -> String {
        format!("{}{}", self.prefix(), name::capitalize(field_name))
    }

    fn expected_parameters<'f>(&self, field: &'f FieldDescriptor) -> &'f [String] {
        if self.takes_value() {
            std::slice::from_ref(&field.value_type)
        } else {
            &[]
        }
    }
}

impl FromStr for Convention {
    type Err = AnalysisError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "get" | "getter" => Ok(Convention::Getter),
            "set" | "setter" => Ok(Convention::Setter),
            "with" | "wither" => Ok(Convention::Wither),
            other => Err(AnalysisError::UnsupportedConvention(other.to_string())),
        }
    }
}

/// Whether an accessor matching the chosen convention already exists for a
/// field, and at which hierarchy level.
#[derive(EnumAsInner, Debug, PartialEq, Eq, Clone, Copy)]
pub enum AccessorState {
    /// No matching accessor anywhere in the hierarchy.
    None,
    /// The leaf type itself declares a matching accessor.
    ResolvedInLeaf,
    /// The nearest match sits on an ancestor level.
    ResolvedInAncestor,
}

impl fmt::Display for AccessorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AccessorState::None => "none",
            AccessorState::ResolvedInLeaf => "leaf",
            AccessorState::ResolvedInAncestor => "ancestor",
        };

        write!(f, "{}", text)
    }
}

/// Annotates every collected field with the state of its accessor under
/// `convention`. The collector's sequence is consumed and rebuilt, never
/// mutated in place; its ordering is preserved exactly.
pub fn resolve<'a>(
    leaf: &'a TypeDescriptor,
    fields: Vec<AccessibleField<'a>>,
    convention: Convention,
) -> Vec<AccessibleField<'a>> {
    fields
        .into_iter()
        .map(|entry| {
            let accessor = locate(leaf, entry.field, convention);
            AccessibleField { accessor, ..entry }
        })
        .collect()
}

/// Leaf first, then each ancestor level in walker order; the earliest
/// exact name+signature match wins. Finding nothing is a valid outcome,
/// not an error.
fn locate(leaf: &TypeDescriptor, field: &FieldDescriptor, convention: Convention) -> AccessorState {
    let method_name = convention.method_name(&field.name);
    let parameters = convention.expected_parameters(field);

    if leaf.methods.locate(&method_name, parameters).is_some() {
        return AccessorState::ResolvedInLeaf;
    }

    for ancestor in hierarchy::ancestors(leaf) {
        if ancestor.methods.locate(&method_name, parameters).is_some() {
            return AccessorState::ResolvedInAncestor;
        }
    }

    AccessorState::None
}
