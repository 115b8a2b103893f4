//! Dependency references.
//!
//! Every import that survives classification becomes one of three kinds of
//! reference: an npm package, a component from the external catalog, or a
//! component that lives in this registry.

use std::fmt;

/// A classified dependency of a component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DependencyReference {
    /// An npm package, truncated to its root (`@radix-ui/react-dialog`)
    Package(String),

    /// A component installable from the external catalog (`button`)
    Catalog(String),

    /// A component or helper from this registry (`use-controllable-state`)
    Internal(String),
}

impl DependencyReference {
    /// The referenced name.
    pub fn name(&self) -> &str {
        match self {
            DependencyReference::Package(name)
            | DependencyReference::Catalog(name)
            | DependencyReference::Internal(name) => name,
        }
    }

    pub fn is_package(&self) -> bool {
        matches!(self, DependencyReference::Package(_))
    }

    pub fn is_catalog(&self) -> bool {
        matches!(self, DependencyReference::Catalog(_))
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, DependencyReference::Internal(_))
    }
}

impl fmt::Display for DependencyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyReference::Package(name) => write!(f, "package `{}`", name),
            DependencyReference::Catalog(name) => write!(f, "catalog `{}`", name),
            DependencyReference::Internal(name) => write!(f, "internal `{}`", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_kinds() {
        let pkg = DependencyReference::Package("clsx".to_string());
        let cat = DependencyReference::Catalog("button".to_string());
        let int = DependencyReference::Internal("utils".to_string());

        assert!(pkg.is_package() && !pkg.is_catalog());
        assert!(cat.is_catalog() && !cat.is_internal());
        assert!(int.is_internal() && !int.is_package());
        assert_eq!(int.name(), "utils");
        assert_eq!(cat.to_string(), "catalog `button`");
    }
}
