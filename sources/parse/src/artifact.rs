use crate::flags::FieldModifierFlags;

/// One type's compiled metadata, exactly as an artifact file declares it.
/// Ancestors are referenced by name only; linking the chain is the
/// loader's job.
#[derive(Debug, Clone)]
pub struct TypeArtifact {
    pub meta_data: MetaData,

    /// Qualified, dot separated name of the declared type.
    pub name: String,
    /// Absent only on the root sentinel, which ends every chain.
    pub super_name: Option<String>,

    pub fields: Vec<RawField>,
    pub methods: Vec<RawMethod>,
}

#[derive(Debug, Clone)]
pub struct RawField {
    pub flags: FieldModifierFlags,
    pub name: String,
    pub value_type: String,
}

#[derive(Debug, Clone)]
pub struct RawMethod {
    pub name: String,
    pub parameters: Vec<String>,
    pub return_type: String,
}

#[derive(Debug, Clone)]
pub struct MetaData {
    pub major_version: u16,
    pub minor_version: u16,
}
