//! Reference trees for display.

use std::collections::HashSet;
use std::fmt;

use crate::core::{Catalog, ComponentDescriptor, DependencyReference};

/// How a tree node relates to the rest of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeMark {
    /// A registry component expanded in place
    Component,
    /// Already shown elsewhere in the tree, not expanded again
    Duplicate,
    /// An internal reference with no matching component
    Missing,
    /// An external catalog component
    Catalog,
}

/// A node in a component's reference tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub mark: TreeMark,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(name: &str, mark: TreeMark) -> Self {
        TreeNode {
            name: name.to_string(),
            mark,
            children: Vec::new(),
        }
    }

    /// Render the tree, one line per node.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_into(0, &mut lines);
        lines
    }

    fn render_into(&self, depth: usize, lines: &mut Vec<String>) {
        let prefix = if depth == 0 {
            String::new()
        } else {
            format!("{}├── ", "│   ".repeat(depth - 1))
        };
        lines.push(format!("{}{}", prefix, self));

        for child in &self.children {
            child.render_into(depth + 1, lines);
        }
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.mark {
            TreeMark::Component => "",
            TreeMark::Duplicate => " (*)",
            TreeMark::Missing => " (missing)",
            TreeMark::Catalog => " (catalog)",
        };
        write!(f, "{}{}", self.name, marker)
    }
}

/// Build the reference tree of `root`, down to `max_depth` levels.
///
/// Internal references are expanded once; later occurrences are marked
/// duplicate. Packages are not shown.
pub fn reference_tree(
    root: &ComponentDescriptor,
    catalog: &Catalog,
    max_depth: Option<usize>,
) -> TreeNode {
    let mut seen = HashSet::new();
    build(root, catalog, 0, max_depth.unwrap_or(usize::MAX), &mut seen)
}

fn build<'a>(
    desc: &'a ComponentDescriptor,
    catalog: &'a Catalog,
    depth: usize,
    max_depth: usize,
    seen: &mut HashSet<&'a str>,
) -> TreeNode {
    seen.insert(desc.name.as_str());
    let mut node = TreeNode::leaf(&desc.name, TreeMark::Component);

    if depth >= max_depth {
        return node;
    }

    for dep in &desc.dependencies {
        let child = match dep {
            DependencyReference::Package(_) => continue,
            DependencyReference::Catalog(name) => TreeNode::leaf(name, TreeMark::Catalog),
            DependencyReference::Internal(name) => {
                if seen.contains(name.as_str()) {
                    TreeNode::leaf(name, TreeMark::Duplicate)
                } else {
                    match catalog.get(name) {
                        Some(child) => build(child, catalog, depth + 1, max_depth, seen),
                        None => TreeNode::leaf(name, TreeMark::Missing),
                    }
                }
            }
        };
        node.children.push(child);
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ComponentKind;

    fn desc(name: &str, deps: Vec<DependencyReference>) -> ComponentDescriptor {
        let mut d = ComponentDescriptor::new(
            name,
            ComponentKind::Ui,
            format!("/p/{}.tsx", name),
            format!("{}.tsx", name),
            "",
        );
        d.dependencies = deps;
        d
    }

    #[test]
    fn test_render_marks() {
        let catalog: Catalog = vec![
            desc(
                "card-input",
                vec![
                    DependencyReference::Catalog("card".to_string()),
                    DependencyReference::Internal("field".to_string()),
                    DependencyReference::Internal("utils".to_string()),
                    DependencyReference::Internal("ghost".to_string()),
                    DependencyReference::Package("clsx".to_string()),
                ],
            ),
            desc("field", vec![DependencyReference::Internal("utils".to_string())]),
            desc("utils", vec![]),
        ]
        .into_iter()
        .collect();

        let tree = reference_tree(catalog.get("card-input").unwrap(), &catalog, None);
        assert_eq!(
            tree.render(),
            vec![
                "card-input",
                "├── card (catalog)",
                "├── field",
                "│   ├── utils",
                "├── utils (*)",
                "├── ghost (missing)",
            ]
        );
    }

    #[test]
    fn test_depth_limit() {
        let catalog: Catalog = vec![
            desc("a", vec![DependencyReference::Internal("b".to_string())]),
            desc("b", vec![DependencyReference::Internal("c".to_string())]),
            desc("c", vec![]),
        ]
        .into_iter()
        .collect();

        let tree = reference_tree(catalog.get("a").unwrap(), &catalog, Some(1));
        assert_eq!(tree.render(), vec!["a", "├── b"]);
    }

    #[test]
    fn test_cycle_is_marked_duplicate() {
        let catalog: Catalog = vec![
            desc("a", vec![DependencyReference::Internal("b".to_string())]),
            desc("b", vec![DependencyReference::Internal("a".to_string())]),
        ]
        .into_iter()
        .collect();

        let tree = reference_tree(catalog.get("a").unwrap(), &catalog, None);
        assert_eq!(tree.render(), vec!["a", "├── b", "│   ├── a (*)"]);
    }
}
