use model::error::ProviderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Surfaced from the metadata provider unchanged.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The caller asked for a convention the resolver does not recognise.
    /// Raised before any artifact is touched.
    #[error("unsupported accessor convention '{0}'")]
    UnsupportedConvention(String),
}
