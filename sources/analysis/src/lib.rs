pub mod accessor;
pub mod collect;
pub mod error;
pub mod hierarchy;
pub mod report;
pub mod visibility;

use model::loader::TypeLoader;

use crate::accessor::Convention;
use crate::error::AnalysisError;
use crate::report::Report;

/// Runs field accessibility analysis over types served by a `TypeLoader`.
///
/// A run is pure over the immutable descriptor graph the loader hands out:
/// independent runs may proceed concurrently, and running the same
/// arguments twice yields identical output.
pub struct Analyzer {
    pub loader: TypeLoader,
}

impl Analyzer {
    pub fn new(loader: TypeLoader) -> Self {
        Self { loader }
    }

    /// Reports the fields of `type_name` visible to generated code.
    ///
    /// With a convention, each field is annotated with the state of its
    /// accessor; without one the report is accessibility only. With
    /// `modifiable_only`, final fields are dropped at every level.
    pub fn analyze(
        &self,
        type_name: &str,
        convention: Option<&str>,
        modifiable_only: bool,
    ) -> Result<Report, AnalysisError> {
        // An unknown convention fails before any artifact is touched.
        let convention = convention.map(str::parse::<Convention>).transpose()?;

        let leaf = self.loader.load(type_name)?;

        let mut fields = collect::collect(&leaf, modifiable_only);
        if let Some(convention) = convention {
            fields = accessor::resolve(&leaf, fields, convention);
        }

        Ok(report::assemble(&leaf, fields))
    }
}
