use model::types::FieldDescriptor;

/// Tells whether a field declared on an ancestor level is accessible to
/// code generated for the leaf type.
///
/// Only instance fields take part; static fields are rejected before any
/// visibility rule applies. `leaf_package` is always the most derived
/// type's package, compared against the declaring level's package directly
/// rather than chained through intermediate ancestors.
pub fn is_accessible(
    field: &FieldDescriptor,
    leaf_package: &str,
    declaring_package: &str,
) -> bool {
    if field.is_static || field.visibility.is_private() {
        return false;
    }

    if field.visibility.is_public() || field.visibility.is_protected() {
        return true;
    }

    // Package private: visible only when the leaf shares the package.
    leaf_package == declaring_package
}

#[cfg(test)]
mod tests {
    use model::types::{FieldDescriptor, Visibility};

    use crate::visibility::is_accessible;

    fn field(visibility: Visibility, is_static: bool) -> FieldDescriptor {
        FieldDescriptor {
            name: "value".to_string(),
            value_type: "int".to_string(),
            visibility,
            is_static,
            is_final: false,
        }
    }

    #[test]
    fn it_rejects_static_fields_regardless_of_visibility() {
        for visibility in [
            Visibility::Public,
            Visibility::Protected,
            Visibility::PackagePrivate,
            Visibility::Private,
        ] {
            assert!(!is_accessible(&field(visibility, true), "p1", "p1"));
        }
    }

    #[test]
    fn it_rejects_private_fields() {
        assert!(!is_accessible(&field(Visibility::Private, false), "p1", "p1"));
    }

    #[test]
    fn it_accepts_public_and_protected_across_packages() {
        assert!(is_accessible(&field(Visibility::Public, false), "p1", "p2"));
        assert!(is_accessible(&field(Visibility::Protected, false), "p1", "p2"));
    }

    #[test]
    fn it_gates_package_private_fields_on_the_package() {
        assert!(is_accessible(
            &field(Visibility::PackagePrivate, false),
            "p1",
            "p1"
        ));
        assert!(!is_accessible(
            &field(Visibility::PackagePrivate, false),
            "p2",
            "p1"
        ));
    }
}
