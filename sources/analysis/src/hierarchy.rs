use model::types::TypeDescriptor;

/// Walks a type's ancestor chain, nearest ancestor first, stopping before
/// the root sentinel. The leaf itself is not yielded. The chain is a
/// provider guaranteed finite simple path, so the walk always terminates
/// at the sentinel's missing ancestor link.
pub fn ancestors(leaf: &TypeDescriptor) -> Ancestors<'_> {
    Ancestors {
        current: leaf.super_type.as_deref(),
    }
}

pub struct Ancestors<'a> {
    current: Option<&'a TypeDescriptor>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a TypeDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.current.filter(|t| !t.is_root())?;
        self.current = next.super_type.as_deref();

        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use model::types::{Methods, TypeDescriptor};

    use crate::hierarchy::ancestors;

    fn descriptor(name: &str, super_type: Option<Arc<TypeDescriptor>>) -> TypeDescriptor {
        TypeDescriptor {
            name: name.to_string(),
            package: support::name::package_of(name).to_string(),
            fields: vec![],
            methods: Methods { entries: vec![] },
            super_type,
        }
    }

    fn three_level_leaf() -> TypeDescriptor {
        let sentinel = Arc::new(TypeDescriptor::root_sentinel());
        let grandparent = Arc::new(descriptor("p.Grandparent", Some(sentinel)));
        let parent = Arc::new(descriptor("p.Parent", Some(grandparent)));
        descriptor("p.Leaf", Some(parent))
    }

    #[test]
    fn it_walks_nearest_ancestor_first() {
        let leaf = three_level_leaf();

        let names: Vec<&str> = ancestors(&leaf).map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["p.Parent", "p.Grandparent"]);
    }

    #[test]
    fn it_is_restartable() {
        let leaf = three_level_leaf();

        assert_eq!(ancestors(&leaf).count(), 2);
        assert_eq!(ancestors(&leaf).count(), 2);
    }

    #[test]
    fn it_yields_nothing_for_types_rooted_directly_on_the_sentinel() {
        let sentinel = Arc::new(TypeDescriptor::root_sentinel());
        let leaf = descriptor("p.Leaf", Some(sentinel));

        assert_eq!(ancestors(&leaf).count(), 0);
    }
}
