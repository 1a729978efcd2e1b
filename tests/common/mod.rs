use std::fs;
use std::path::{Path, PathBuf};

use parse::artifact::{MetaData, RawField, RawMethod, TypeArtifact};
use parse::constants::SUPPORTED_MAJOR;
use parse::flags::{FieldModifierFlag, FieldModifierFlags};
use parse::writer::Writer;

const TMP_DIR: &str = env!("CARGO_TARGET_TMPDIR");

/// A fresh directory for one test's metadata tree.
pub fn metadata_root(test_name: &str) -> PathBuf {
    let root = Path::new(TMP_DIR).join(test_name);

    if root.exists() {
        fs::remove_dir_all(&root).expect("stale metadata root to be removable");
    }
    fs::create_dir_all(&root).expect("metadata root to be creatable");

    root
}

/// Starts a type declaration. Types extend the root sentinel unless
/// `extends` says otherwise.
pub fn declare(name: &str) -> TypeBuilder {
    TypeBuilder {
        name: name.to_string(),
        super_name: "java.lang.Object".to_string(),
        fields: vec![],
        methods: vec![],
    }
}

pub struct TypeBuilder {
    name: String,
    super_name: String,
    fields: Vec<RawField>,
    methods: Vec<RawMethod>,
}

impl TypeBuilder {
    pub fn extends(mut self, super_name: &str) -> Self {
        self.super_name = super_name.to_string();
        self
    }

    pub fn field(mut self, name: &str, value_type: &str, flags: FieldModifierFlag) -> Self {
        self.fields.push(RawField {
            flags: FieldModifierFlags { flags },
            name: name.to_string(),
            value_type: value_type.to_string(),
        });
        self
    }

    pub fn method(mut self, name: &str, parameters: &[&str], return_type: &str) -> Self {
        self.methods.push(RawMethod {
            name: name.to_string(),
            parameters: parameters.iter().map(|p| p.to_string()).collect(),
            return_type: return_type.to_string(),
        });
        self
    }

    /// Serializes the artifact into `root`, mirroring the package layout
    /// the loader resolves against.
    pub fn write_to(self, root: &Path) {
        let artifact = TypeArtifact {
            meta_data: MetaData {
                major_version: SUPPORTED_MAJOR,
                minor_version: 0,
            },
            name: self.name,
            super_name: Some(self.super_name),
            fields: self.fields,
            methods: self.methods,
        };

        let bytes = Writer::new().write(&artifact);

        let path = root.join(format!("{}.tmeta", artifact.name.replace('.', "/")));
        fs::create_dir_all(path.parent().expect("artifact path to have a parent"))
            .expect("artifact directory to be creatable");
        fs::write(path, bytes).expect("artifact to be writable");
    }
}
