use std::sync::Arc;

use anyhow::{anyhow, Result};
use enum_as_inner::EnumAsInner;
use parse::flags::{FieldModifierFlag, FieldModifierFlags};
use support::name;

/// The universal terminal supertype. Every ancestor chain ends here, and it
/// never appears in a report.
pub const ROOT_TYPE: &str = "java.lang.Object";

/// The closed set of visibility tags a declaration can carry. Static and
/// final are orthogonal to these and live on the field itself.
#[derive(EnumAsInner, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Visibility {
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl Visibility {
    /// Extracts the visibility tag from a raw modifier word. The bits are
    /// mutually exclusive; none of them set means package private.
    pub fn from_flags(flags: &FieldModifierFlags) -> Result<Self> {
        let public = flags.has(FieldModifierFlag::PUBLIC);
        let private = flags.has(FieldModifierFlag::PRIVATE);
        let protected = flags.has(FieldModifierFlag::PROTECTED);

        match (public, private, protected) {
            (true, false, false) => Ok(Visibility::Public),
            (false, true, false) => Ok(Visibility::Private),
            (false, false, true) => Ok(Visibility::Protected),
            (false, false, false) => Ok(Visibility::PackagePrivate),
            _ => Err(anyhow!("conflicting visibility bits: {:?}", flags.flags)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    /// Semantic name of the declared value type, not a live reference.
    pub value_type: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    pub parameters: Vec<String>,
    pub return_type: String,
}

#[derive(Debug, Clone)]
pub struct Methods {
    pub entries: Vec<MethodDescriptor>,
}

impl Methods {
    /// Finds a declared method by exact name and parameter types.
    pub fn locate(&self, name: &str, parameters: &[String]) -> Option<&MethodDescriptor> {
        self.entries
            .iter()
            .find(|m| m.name == name && m.parameters == parameters)
    }
}

/// One level of a type hierarchy: the declarations made directly on a type,
/// plus a link to its direct ancestor. Descriptors are built once per load,
/// shared as `Arc`, and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Qualified, dot separated name.
    pub name: String,
    pub package: String,
    pub fields: Vec<FieldDescriptor>,
    pub methods: Methods,
    /// Absent only on the root sentinel.
    pub super_type: Option<Arc<TypeDescriptor>>,
}

impl TypeDescriptor {
    pub fn simple_name(&self) -> &str {
        name::simple_name_of(&self.name)
    }

    /// The root sentinel is the one descriptor with no further ancestor.
    pub fn is_root(&self) -> bool {
        self.super_type.is_none()
    }

    /// The sentinel that terminates chains whose artifacts do not ship one.
    pub fn root_sentinel() -> Self {
        Self {
            name: ROOT_TYPE.to_string(),
            package: name::package_of(ROOT_TYPE).to_string(),
            fields: vec![],
            methods: Methods { entries: vec![] },
            super_type: None,
        }
    }
}
