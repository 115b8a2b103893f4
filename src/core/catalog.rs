//! The component catalog.
//!
//! The catalog is built once per run and treated as read-only afterwards.

use std::collections::HashMap;

use crate::core::component::ComponentDescriptor;
use crate::core::preview::PreviewExample;

/// All descriptors scanned in one run, in scan order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    descriptors: Vec<ComponentDescriptor>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor. Returns `false` if the name is already taken.
    pub fn insert(&mut self, descriptor: ComponentDescriptor) -> bool {
        if self.index.contains_key(&descriptor.name) {
            return false;
        }
        self.index
            .insert(descriptor.name.clone(), self.descriptors.len());
        self.descriptors.push(descriptor);
        true
    }

    /// Look up a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.index.get(name).map(|&i| &self.descriptors[i])
    }

    /// Look up a descriptor by name for in-place updates.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ComponentDescriptor> {
        self.index.get(name).map(|&i| &mut self.descriptors[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate descriptors in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Attach preview examples to their components.
    ///
    /// Examples for unknown components are skipped. Returns how many were
    /// attached.
    pub fn attach_examples(&mut self, examples: Vec<PreviewExample>) -> usize {
        let mut attached = 0;
        for example in examples {
            match self.get_mut(&example.component) {
                Some(desc) => {
                    if desc.examples.iter().any(|e| e.id == example.id) {
                        tracing::warn!(
                            "duplicate example `{}` for `{}` in {}, keeping the first",
                            example.id,
                            example.component,
                            example.origin.display()
                        );
                        continue;
                    }
                    desc.examples.push(example);
                    attached += 1;
                }
                None => {
                    tracing::debug!(
                        "example `{}` documents unknown component `{}`, skipping",
                        example.id,
                        example.component
                    );
                }
            }
        }
        attached
    }
}

impl FromIterator<ComponentDescriptor> for Catalog {
    fn from_iter<I: IntoIterator<Item = ComponentDescriptor>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for descriptor in iter {
            catalog.insert(descriptor);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::component::ComponentKind;

    fn desc(name: &str) -> ComponentDescriptor {
        ComponentDescriptor::new(
            name,
            ComponentKind::Ui,
            format!("/p/registry/ui/{}.tsx", name),
            format!("registry/ui/{}.tsx", name),
            "",
        )
    }

    #[test]
    fn test_names_are_unique() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(desc("button")));
        assert!(!catalog.insert(desc("button")));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("button"));
    }

    #[test]
    fn test_attach_examples() {
        let mut catalog: Catalog = vec![desc("button"), desc("card")].into_iter().collect();

        let attached = catalog.attach_examples(vec![
            PreviewExample::new("button", "basic", "<Button />", "docs/button.mdx"),
            PreviewExample::new("button", "basic", "<Button>dup</Button>", "docs/button.mdx"),
            PreviewExample::new("missing", "basic", "<Missing />", "docs/missing.mdx"),
        ]);

        assert_eq!(attached, 1);
        let button = catalog.get("button").unwrap();
        assert_eq!(button.examples.len(), 1);
        assert_eq!(button.examples[0].source, "<Button />");
        assert!(catalog.get("card").unwrap().examples.is_empty());
    }
}
