use thiserror::Error;

/// Failures raised by the metadata provider. These surface to the caller
/// unchanged; artifact state is not expected to change between attempts,
/// so nothing here is retried.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("could not locate a metadata artifact for '{0}'")]
    NotFound(String),

    #[error("could not load '{name}': {source}")]
    LoadError {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ProviderError {
    pub fn load_error(name: &str, source: anyhow::Error) -> Self {
        Self::LoadError {
            name: name.to_string(),
            source,
        }
    }
}
