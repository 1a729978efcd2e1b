use crate::artifact::TypeArtifact;

pub type ParseResult = anyhow::Result<TypeArtifact>;
