//! Demo block generation.
//!
//! Every documented preview example becomes a standalone block: a generated
//! page that renders the example, the component's own source under a
//! demo-scoped path, and any sibling components the example visibly uses.
//!
//! The component itself is installed through a pointer to its own manifest,
//! so its internal closure is never embedded a second time.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::{
    Catalog, ComponentDescriptor, ComponentKind, DependencyReference, FileType, ItemMeta,
    ItemType, ManifestFile, PreviewExample, RegistryItem,
};
use crate::resolver::classify::{scan_catalog_tags, Classifier};
use crate::resolver::closure_of;
use crate::sources::imports::{scan_imports, split_imports};
use crate::sources::lexer::contains_identifier;
use crate::util::config::Config;
use crate::util::naming::title_case;

const DEMO_ALIAS: &str = "@/components/demo";

const WRAPPER_CLASS: &str = "flex min-h-svh w-full items-center justify-center p-6 md:p-10";

static USE_CLIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*["']use client["'];?[ \t]*\r?\n?"#).expect("directive regex is valid")
});

static IMPORT_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*import\s+([\s\S]*?)\s*\bfrom\b"#).expect("import clause regex is valid")
});

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z_$][\w$]*").expect("identifier regex is valid"));

static LOCAL_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:function|const|let|var|class)\s+([A-Za-z_$][\w$]*)")
        .expect("declaration regex is valid")
});

/// Generate one demo block per documented example, in catalog order.
pub fn demo_manifests(catalog: &Catalog, classifier: &Classifier, config: &Config) -> Vec<RegistryItem> {
    catalog
        .iter()
        .flat_map(|desc| {
            desc.examples
                .iter()
                .map(move |example| demo_manifest(desc, example, catalog, classifier, config))
        })
        .collect()
}

/// Generate the demo block for one example of `desc`.
pub fn demo_manifest(
    desc: &ComponentDescriptor,
    example: &PreviewExample,
    catalog: &Catalog,
    classifier: &Classifier,
    config: &Config,
) -> RegistryItem {
    let closure = closure_of(desc, catalog);
    let source = example.source.as_str();

    let (statements, body) = split_imports(source);
    let body = USE_CLIENT.replace(&body, "").into_owned();

    let peers = find_peers(desc, source, catalog);
    let mut embedded: Vec<&str> = vec![desc.name.as_str()];
    embedded.extend(peers.iter().map(|p| p.name.as_str()));

    // The example's own imports. Imports of embedded components are replaced
    // by generated demo imports, other registry components are installed
    // through their pointer and imported from their install target.
    let mut kept_imports: Vec<String> = Vec::new();
    let mut packages: Vec<String> = Vec::new();
    let mut imported_catalog: Vec<String> = Vec::new();
    let mut imported_internal: Vec<String> = Vec::new();
    let mut local_symbols: HashSet<String> = HashSet::new();

    for statement in &statements {
        let reference = scan_imports(statement)
            .first()
            .and_then(|spec| classifier.classify(spec, &example.origin));
        let clause = IMPORT_CLAUSE.captures(statement).map(|caps| caps[1].to_string());

        let mut line = statement.clone();
        match reference {
            Some(DependencyReference::Internal(name)) => {
                if embedded.contains(&name.as_str()) {
                    continue;
                }
                let (Some(other), Some(clause)) = (catalog.get(&name), clause.as_deref()) else {
                    tracing::debug!(
                        "example `{}` imports unknown component `{}`",
                        example.demo_name(),
                        name
                    );
                    continue;
                };
                line = format!("import {} from \"{}\"", clause, install_import_path(other));
                push_unique(&mut imported_internal, config.pointer(&name));
            }
            Some(DependencyReference::Package(name)) => push_unique(&mut packages, name),
            Some(DependencyReference::Catalog(name)) => push_unique(&mut imported_catalog, name),
            None => {}
        }

        if let Some(clause) = &clause {
            for ident in IDENTIFIER.find_iter(clause) {
                local_symbols.insert(ident.as_str().to_string());
            }
        }
        kept_imports.push(line);
    }

    for caps in LOCAL_DECL.captures_iter(&body) {
        local_symbols.insert(caps[1].to_string());
    }

    for component in std::iter::once(desc).chain(peers.iter().copied()) {
        local_symbols.extend(component.exports.named.iter().cloned());
        local_symbols.extend(component.exports.default.iter().cloned());
        local_symbols.insert(component.exports.default_import_name(&component.name));
    }

    let mut generated: Vec<String> = vec![root_import(desc)];
    for peer in &peers {
        if let Some(line) = peer_import(peer, source) {
            generated.push(line);
        }
    }

    // Shortlist tags used without an import. This can name catalog
    // components the import-based reference list never mentions.
    let mut tag_catalog: Vec<String> = Vec::new();
    let mut tag_imports: Vec<(String, Vec<String>)> = Vec::new();
    for tag in scan_catalog_tags(source) {
        if local_symbols.contains(&tag.tag) || embedded.contains(&tag.catalog.as_str()) {
            continue;
        }
        push_unique(&mut tag_catalog, tag.catalog.clone());
        if imported_catalog.contains(&tag.catalog) {
            continue;
        }
        match tag_imports.iter_mut().find(|(name, _)| *name == tag.catalog) {
            Some((_, tags)) => tags.push(tag.tag),
            None => tag_imports.push((tag.catalog, vec![tag.tag])),
        }
    }
    for (name, tags) in &tag_imports {
        generated.push(format!(
            "import {{ {} }} from \"{}\"",
            tags.join(", "),
            classifier.catalog_import_path(name)
        ));
    }

    let mut registry_dependencies: Vec<String> = vec![config.pointer(&desc.name)];
    for pointer in imported_internal {
        push_unique(&mut registry_dependencies, pointer);
    }
    let external = closure
        .catalog
        .iter()
        .chain(imported_catalog.iter())
        .chain(tag_catalog.iter());
    for name in external {
        if embedded.contains(&name.as_str()) {
            continue;
        }
        push_unique(&mut registry_dependencies, name.clone());
    }

    let mut files = vec![ManifestFile {
        path: page_path(example),
        content: render_page(&generated, &kept_imports, &body),
        file_type: FileType::Page,
        target: page_path(example),
    }];
    files.push(demo_file(desc));
    files.extend(peers.iter().map(|peer| demo_file(peer)));

    tracing::debug!(
        "demo `{}`: {} files, {} references",
        example.demo_name(),
        files.len(),
        registry_dependencies.len()
    );

    RegistryItem {
        name: example.demo_name(),
        item_type: ItemType::Block,
        title: format!("{} ({})", desc.title, title_case(&example.id)),
        description: if desc.description.is_empty() {
            format!("{} example of {}.", title_case(&example.id), desc.title)
        } else {
            desc.description.clone()
        },
        dependencies: packages,
        registry_dependencies,
        files,
        meta: Some(ItemMeta {
            iframe_height: config.demo.iframe_height.clone(),
        }),
    }
}

/// Components the root references that the example code uses directly.
fn find_peers<'a>(
    desc: &ComponentDescriptor,
    source: &str,
    catalog: &'a Catalog,
) -> Vec<&'a ComponentDescriptor> {
    let mut peers: Vec<&ComponentDescriptor> = Vec::new();

    for dep in &desc.dependencies {
        if dep.is_package() || dep.name() == desc.name {
            continue;
        }
        let Some(peer) = catalog.get(dep.name()) else {
            continue;
        };
        if peers.iter().any(|p| p.name == peer.name) {
            continue;
        }

        let used = peer
            .exports
            .named
            .iter()
            .chain(peer.exports.default.iter())
            .any(|symbol| contains_identifier(source, symbol));
        if used {
            peers.push(peer);
        }
    }

    peers
}

fn root_import(desc: &ComponentDescriptor) -> String {
    let path = format!("{}/{}", DEMO_ALIAS, desc.name);
    if desc.exports.named.is_empty() {
        format!(
            "import {} from \"{}\"",
            desc.exports.default_import_name(&desc.name),
            path
        )
    } else {
        format!("import {{ {} }} from \"{}\"", desc.exports.named.join(", "), path)
    }
}

/// Import of the peer symbols the example actually uses.
fn peer_import(peer: &ComponentDescriptor, source: &str) -> Option<String> {
    let path = format!("{}/{}", DEMO_ALIAS, peer.name);
    let used: Vec<&str> = peer
        .exports
        .named
        .iter()
        .filter(|name| contains_identifier(source, name))
        .map(String::as_str)
        .collect();

    if !used.is_empty() {
        return Some(format!("import {{ {} }} from \"{}\"", used.join(", "), path));
    }
    peer.exports
        .default
        .as_ref()
        .filter(|name| contains_identifier(source, name))
        .map(|name| format!("import {} from \"{}\"", name, path))
}

/// `@/components/ui/hint` for a component installed at its normal target.
fn install_import_path(desc: &ComponentDescriptor) -> String {
    let target = desc.target();
    let stem = target
        .rsplit_once('.')
        .map_or(target.as_str(), |(stem, _)| stem);
    format!("@/{}", stem)
}

fn page_path(example: &PreviewExample) -> String {
    format!("app/demo/{}/{}/page.tsx", example.component, example.id)
}

/// A component's own source, installed under the demo directory.
fn demo_file(desc: &ComponentDescriptor) -> ManifestFile {
    let ext = match desc.kind {
        ComponentKind::Ui => "tsx",
        ComponentKind::Lib => "ts",
    };
    ManifestFile {
        path: desc.logical_path.clone(),
        content: desc.content.clone(),
        file_type: FileType::Component,
        target: format!("components/demo/{}.{}", desc.name, ext),
    }
}

fn render_page(generated: &[String], kept: &[String], body: &str) -> String {
    let mut page = String::from("\"use client\"\n\n");
    for line in generated.iter().chain(kept.iter()) {
        page.push_str(line);
        page.push('\n');
    }
    page.push('\n');

    let body = body.trim();
    if body.contains("export default") {
        page.push_str(body);
        page.push('\n');
        return page;
    }

    page.push_str("export default function Page() {\n");
    page.push_str("  return (\n");
    page.push_str(&format!("    <div className=\"{}\">\n", WRAPPER_CLASS));
    for line in body.lines() {
        if line.trim().is_empty() {
            page.push('\n');
        } else {
            page.push_str("      ");
            page.push_str(line);
            page.push('\n');
        }
    }
    page.push_str("    </div>\n");
    page.push_str("  )\n");
    page.push_str("}\n");
    page
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}
