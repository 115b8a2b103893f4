//! Component catalog builder.
//!
//! Walks the configured source directories and turns every source file into
//! a [`ComponentDescriptor`].

use std::path::Path;

use anyhow::Result;

use crate::core::{Catalog, ComponentDescriptor, ComponentKind, DependencyReference};
use crate::resolver::classify::Classifier;
use crate::sources::exports::extract_exports;
use crate::util::config::Config;
use crate::util::fs;
use crate::util::naming::kebab_case;

const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Scan every configured directory into a catalog.
///
/// Missing directories and unreadable files contribute nothing.
pub fn build_catalog(config: &Config, classifier: &Classifier) -> Result<Catalog> {
    let source_dir = config.source_dir();
    let mut catalog = Catalog::new();

    for entry in &config.directories {
        let dir = source_dir.join(&entry.name);
        if !dir.is_dir() {
            tracing::debug!("{} does not exist, no `{}` components", dir.display(), entry.kind);
            continue;
        }

        for path in fs::list_files(&dir) {
            if !is_component_file(&path) {
                continue;
            }

            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("skipping {:#}", e);
                    continue;
                }
            };

            let mut desc = describe_file(config, classifier, &path, entry.kind, content);
            desc.folder = entry.name.clone();

            if catalog.contains(&desc.name) {
                tracing::warn!(
                    "`{}` is defined more than once, ignoring {}",
                    desc.name,
                    path.display()
                );
                continue;
            }

            tracing::debug!(
                "found {} `{}` ({} exports, {} references)",
                desc.kind,
                desc.name,
                desc.exports.named.len(),
                desc.dependencies.len()
            );
            catalog.insert(desc);
        }
    }

    Ok(catalog)
}

/// Build the descriptor for one source file.
pub fn describe_file(
    config: &Config,
    classifier: &Classifier,
    path: &Path,
    kind: ComponentKind,
    content: String,
) -> ComponentDescriptor {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = kebab_case(&stem);

    let exports = extract_exports(&content);
    let dependencies: Vec<DependencyReference> = classifier
        .classify_source(&content, path)
        .into_iter()
        .filter(|dep| !(dep.is_internal() && dep.name() == name))
        .collect();

    let logical = fs::logical_path(config.root(), path);
    let mut desc = ComponentDescriptor::new(name, kind, path, logical, content);
    desc.exports = exports;
    desc.dependencies = dependencies;
    desc
}

fn is_component_file(path: &Path) -> bool {
    let ext_ok = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SOURCE_EXTENSIONS.contains(&e));
    let is_index = path.file_stem().and_then(|s| s.to_str()) == Some("index");
    ext_ok && !is_index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixtures::RegistryFixture;

    #[test]
    fn test_build_catalog() {
        let fixture = RegistryFixture::card_input();
        let config = fixture.config();
        let classifier = Classifier::new(&config).unwrap();

        let catalog = build_catalog(&config, &classifier).unwrap();
        let names: Vec<&str> = catalog.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["card-input", "use-controllable-state", "utils"]);

        let card = catalog.get("card-input").unwrap();
        assert_eq!(card.kind, ComponentKind::Ui);
        assert_eq!(card.logical_path, "registry/ui/card-input.tsx");
        assert_eq!(card.target(), "components/ui/card-input.tsx");
        assert_eq!(card.exports.named, vec!["CardInput"]);
        assert_eq!(
            card.internal_refs().collect::<Vec<_>>(),
            vec!["use-controllable-state", "utils"]
        );
        assert_eq!(card.catalog_refs().collect::<Vec<_>>(), vec!["card", "input"]);

        let utils = catalog.get("utils").unwrap();
        assert_eq!(utils.kind, ComponentKind::Lib);
        assert_eq!(utils.target(), "lib/utils.ts");
        assert_eq!(utils.packages().collect::<Vec<_>>(), vec!["clsx", "tailwind-merge"]);
    }

    #[test]
    fn test_skips_index_and_foreign_files() {
        let fixture = RegistryFixture::new()
            .file("registry/ui/button-group.tsx", "export function ButtonGroup() {}\n")
            .file("registry/ui/index.ts", "export * from \"./button-group\"\n")
            .file("registry/ui/README.md", "# hi\n")
            .file("registry/ui/styles.css", ".a {}\n");
        let config = fixture.config();
        let classifier = Classifier::new(&config).unwrap();

        let catalog = build_catalog(&config, &classifier).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("button-group"));
    }

    #[test]
    fn test_missing_directories_are_empty() {
        let fixture = RegistryFixture::new();
        let config = fixture.config();
        let classifier = Classifier::new(&config).unwrap();

        let catalog = build_catalog(&config, &classifier).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_self_reference_is_dropped() {
        let fixture = RegistryFixture::new().file(
            "registry/ui/tree-view.tsx",
            "import { Node } from \"./tree-view\"\nexport function TreeView() {}\n",
        );
        let config = fixture.config();
        let classifier = Classifier::new(&config).unwrap();

        let catalog = build_catalog(&config, &classifier).unwrap();
        assert!(catalog.get("tree-view").unwrap().dependencies.is_empty());
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let fixture = RegistryFixture::new()
            .file("registry/ui/thing.tsx", "export const Thing = 1\n")
            .file("registry/lib/thing.ts", "export const thing = 2\n");
        let config = fixture.config();
        let classifier = Classifier::new(&config).unwrap();

        let catalog = build_catalog(&config, &classifier).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("thing").unwrap().kind, ComponentKind::Ui);
    }
}
