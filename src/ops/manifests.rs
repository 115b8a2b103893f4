//! Manifest generation.
//!
//! Three families of documents are generated from a catalog:
//!
//! - the registry index, one lightweight item per component
//! - per-component manifests, each bundling its whole internal closure
//! - the aggregate manifest, every component's own file in one block

use std::collections::BTreeSet;

use crate::core::{
    Catalog, ComponentDescriptor, DependencyReference, ItemType, RegistryItem, RegistryManifest,
};
use crate::resolver::closure_of;
use crate::util::config::Config;
use crate::util::naming::title_case;

/// Build the registry index (`registry.json`).
pub fn registry_index(catalog: &Catalog, config: &Config) -> RegistryManifest {
    RegistryManifest {
        name: config.registry.name.clone(),
        homepage: config.registry.homepage.clone(),
        items: catalog
            .iter()
            .map(|desc| index_item(desc, catalog, config))
            .collect(),
    }
}

/// One index entry: the component's own file and its direct references.
fn index_item(desc: &ComponentDescriptor, catalog: &Catalog, config: &Config) -> RegistryItem {
    RegistryItem {
        name: desc.name.clone(),
        item_type: desc.kind.item_type(),
        title: desc.title.clone(),
        description: desc.description.clone(),
        dependencies: desc.packages().map(str::to_string).collect(),
        registry_dependencies: direct_references(desc, catalog, config),
        files: vec![desc.manifest_file()],
        meta: None,
    }
}

/// Catalog names plus pointers to resolvable internal components, in import
/// order. Unresolved internal references are dropped.
fn direct_references(desc: &ComponentDescriptor, catalog: &Catalog, config: &Config) -> Vec<String> {
    let mut refs: Vec<String> = Vec::new();
    for dep in &desc.dependencies {
        let reference = match dep {
            DependencyReference::Package(_) => continue,
            DependencyReference::Catalog(name) => name.clone(),
            DependencyReference::Internal(name) if catalog.contains(name) => config.pointer(name),
            DependencyReference::Internal(name) => {
                tracing::debug!("`{}` references unknown `{}`, dropping", desc.name, name);
                continue;
            }
        };
        if !refs.contains(&reference) {
            refs.push(reference);
        }
    }
    refs
}

/// Build the installable manifest of one component.
///
/// Every internal file the component needs is embedded; only external
/// catalog components remain as references.
pub fn component_manifest(desc: &ComponentDescriptor, catalog: &Catalog) -> RegistryItem {
    let closure = closure_of(desc, catalog);

    RegistryItem {
        name: desc.name.clone(),
        item_type: desc.kind.item_type(),
        title: desc.title.clone(),
        description: desc.description.clone(),
        dependencies: closure.packages.iter().cloned().collect(),
        registry_dependencies: closure.catalog.iter().cloned().collect(),
        files: closure.files(),
        meta: None,
    }
}

/// Name of the aggregate manifest.
pub fn aggregate_name(config: &Config) -> String {
    format!("{}-all", config.registry.name)
}

/// Build the aggregate manifest holding every component's own file.
///
/// References back into this registry are dropped: every file they would
/// pull in is already part of the block.
pub fn aggregate_manifest(catalog: &Catalog, config: &Config) -> RegistryItem {
    let mut packages = BTreeSet::new();
    let mut references = BTreeSet::new();

    for desc in catalog.iter() {
        packages.extend(desc.packages().map(str::to_string));
        references.extend(
            direct_references(desc, catalog, config)
                .into_iter()
                .filter(|r| !config.is_self_reference(r)),
        );
    }

    RegistryItem {
        name: aggregate_name(config),
        item_type: ItemType::Block,
        title: format!("{} (all components)", title_case(&config.registry.name)),
        description: format!(
            "Every component and helper of the {} registry.",
            config.registry.name
        ),
        dependencies: packages.into_iter().collect(),
        registry_dependencies: references.into_iter().collect(),
        files: catalog.iter().map(ComponentDescriptor::manifest_file).collect(),
        meta: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Classifier;
    use crate::sources::build_catalog;
    use crate::test_support::fixtures::RegistryFixture;
    use pretty_assertions::assert_eq;

    fn card_input_catalog() -> (RegistryFixture, Config, Catalog) {
        let fixture = RegistryFixture::card_input();
        let config = fixture.config();
        let classifier = Classifier::new(&config).unwrap();
        let catalog = build_catalog(&config, &classifier).unwrap();
        (fixture, config, catalog)
    }

    #[test]
    fn test_registry_index() {
        let (_fixture, config, catalog) = card_input_catalog();
        let index = registry_index(&catalog, &config);

        assert_eq!(index.name, "acme");
        assert_eq!(index.items.len(), 3);

        let card = &index.items[0];
        assert_eq!(card.name, "card-input");
        assert_eq!(card.item_type, ItemType::Ui);
        assert_eq!(card.files.len(), 1);
        assert!(card.dependencies.is_empty());
        assert_eq!(
            card.registry_dependencies,
            vec![
                "card".to_string(),
                "input".to_string(),
                "https://acme.dev/r/use-controllable-state.json".to_string(),
                "https://acme.dev/r/utils.json".to_string(),
            ]
        );

        let utils = &index.items[2];
        assert_eq!(utils.item_type, ItemType::Lib);
        assert_eq!(utils.dependencies, vec!["clsx", "tailwind-merge"]);
    }

    #[test]
    fn test_component_manifest_bundles_closure() {
        let (_fixture, _config, catalog) = card_input_catalog();
        let item = component_manifest(catalog.get("card-input").unwrap(), &catalog);

        let paths: Vec<&str> = item.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "registry/ui/card-input.tsx",
                "registry/lib/use-controllable-state.ts",
                "registry/lib/utils.ts",
            ]
        );
        assert_eq!(
            item.targets().collect::<Vec<_>>(),
            vec![
                "components/ui/card-input.tsx",
                "lib/use-controllable-state.ts",
                "lib/utils.ts",
            ]
        );
        assert_eq!(item.dependencies, vec!["clsx", "tailwind-merge"]);
        assert_eq!(item.registry_dependencies, vec!["card", "input"]);
    }

    #[test]
    fn test_partition_invariant_for_every_component() {
        let (_fixture, _config, catalog) = card_input_catalog();

        for desc in catalog.iter() {
            let item = component_manifest(desc, &catalog);
            let closure = closure_of(desc, &catalog);
            for name in closure.member_names() {
                assert!(
                    !item.registry_dependencies.iter().any(|r| r == name),
                    "`{}` is both embedded and referenced by `{}`",
                    name,
                    desc.name
                );
            }
            for member in &closure.members {
                for name in member.catalog_refs() {
                    assert!(
                        closure.contains(name) || item.registry_dependencies.iter().any(|r| r == name),
                        "`{}` reachable from `{}` is neither embedded nor referenced",
                        name,
                        desc.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_aggregate_manifest() {
        let (_fixture, config, catalog) = card_input_catalog();
        let item = aggregate_manifest(&catalog, &config);

        assert_eq!(item.name, "acme-all");
        assert_eq!(item.item_type, ItemType::Block);
        assert_eq!(item.files.len(), 3);
        assert_eq!(item.dependencies, vec!["clsx", "tailwind-merge"]);
        assert_eq!(item.registry_dependencies, vec!["card", "input"]);
        assert!(item
            .registry_dependencies
            .iter()
            .all(|r| !config.is_self_reference(r)));
    }
}
