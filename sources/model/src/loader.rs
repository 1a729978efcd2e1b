use std::{collections::HashMap, fs, path::PathBuf, sync::Arc};

use anyhow::{anyhow, Result};
use parking_lot::RwLock;
use parse::artifact::TypeArtifact;
use parse::flags::FieldModifierFlag;
use parse::parser::Parser;
use tracing::debug;

use crate::error::ProviderError;
use crate::types::{
    FieldDescriptor, MethodDescriptor, Methods, TypeDescriptor, Visibility, ROOT_TYPE,
};
use support::name;

/// The metadata provider: resolves qualified type names against a search
/// path of compiled metadata trees and links every loaded type to its full
/// ancestor chain, sentinel included.
pub struct TypeLoader {
    search_path: Vec<PathBuf>,
    cache: RwLock<HashMap<String, Arc<TypeDescriptor>>>,
}

impl TypeLoader {
    pub fn new() -> Self {
        Self {
            search_path: vec![],
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn add_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.search_path.push(path.into());
        self
    }

    /// Loads a type and its full ancestor chain. Descriptors are cached by
    /// qualified name, so repeated loads over the same tree are cheap.
    pub fn load(&self, type_name: &str) -> Result<Arc<TypeDescriptor>, ProviderError> {
        let mut in_chain = Vec::new();
        self.load_chained(type_name, &mut in_chain)
    }

    fn load_chained(
        &self,
        type_name: &str,
        in_chain: &mut Vec<String>,
    ) -> Result<Arc<TypeDescriptor>, ProviderError> {
        if let Some(descriptor) = self.cache.read().get(type_name) {
            debug!("Fast path: {}", type_name);
            return Ok(Arc::clone(descriptor));
        }

        debug!("Slow path: {}", type_name);

        // Ancestor chains are a provider contract, but a looping chain must
        // fail instead of recursing forever.
        if in_chain.iter().any(|n| n == type_name) {
            return Err(ProviderError::load_error(
                type_name,
                anyhow!("ancestor chain loops back through '{}'", type_name),
            ));
        }
        in_chain.push(type_name.to_string());

        let found_path = self.resolve_name(type_name);

        let Some(path) = found_path else {
            // The sentinel does not need an artifact on disk.
            if type_name == ROOT_TYPE {
                let sentinel = Arc::new(TypeDescriptor::root_sentinel());
                self.cache
                    .write()
                    .insert(type_name.to_string(), Arc::clone(&sentinel));
                return Ok(sentinel);
            }

            return Err(ProviderError::NotFound(type_name.to_string()));
        };

        let bytes =
            fs::read(path).map_err(|err| ProviderError::load_error(type_name, err.into()))?;

        let mut parser = Parser::new(&bytes);
        let artifact = parser
            .parse()
            .map_err(|err| ProviderError::load_error(type_name, err))?;

        if artifact.name != type_name {
            return Err(ProviderError::load_error(
                type_name,
                anyhow!("artifact declares '{}' instead", artifact.name),
            ));
        }

        let super_type = match artifact.super_name.as_deref() {
            Some(super_name) => Some(self.load_chained(super_name, in_chain)?),
            None if type_name == ROOT_TYPE => None,
            None => {
                return Err(ProviderError::load_error(
                    type_name,
                    anyhow!("only the root sentinel may omit an ancestor"),
                ));
            }
        };

        let descriptor = describe(artifact, super_type)
            .map_err(|err| ProviderError::load_error(type_name, err))?;

        let descriptor = Arc::new(descriptor);
        self.cache
            .write()
            .insert(type_name.to_string(), Arc::clone(&descriptor));

        Ok(descriptor)
    }

    fn resolve_name(&self, type_name: &str) -> Option<PathBuf> {
        let file_name = format!("{}.tmeta", type_name.replace('.', "/"));

        for root in self.search_path.iter() {
            let path = root.join(&file_name);
            if path.exists() {
                return Some(path);
            }
        }

        None
    }
}

fn describe(artifact: TypeArtifact, super_type: Option<Arc<TypeDescriptor>>) -> Result<TypeDescriptor> {
    let mut fields = Vec::with_capacity(artifact.fields.len());
    for raw in artifact.fields.iter() {
        // Names are unique per level; shadowing across levels is fine.
        if fields.iter().any(|f: &FieldDescriptor| f.name == raw.name) {
            return Err(anyhow!("duplicate field '{}'", raw.name));
        }

        fields.push(FieldDescriptor {
            name: raw.name.clone(),
            value_type: raw.value_type.clone(),
            visibility: Visibility::from_flags(&raw.flags)?,
            is_static: raw.flags.has(FieldModifierFlag::STATIC),
            is_final: raw.flags.has(FieldModifierFlag::FINAL),
        });
    }

    let methods = Methods {
        entries: artifact
            .methods
            .into_iter()
            .map(|raw| MethodDescriptor {
                name: raw.name,
                parameters: raw.parameters,
                return_type: raw.return_type,
            })
            .collect(),
    };

    Ok(TypeDescriptor {
        package: name::package_of(&artifact.name).to_string(),
        name: artifact.name,
        fields,
        methods,
        super_type,
    })
}
