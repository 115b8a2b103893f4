//! Documentation pages.
//!
//! Each Markdown/MDX page documents one component. Its YAML front matter
//! supplies the title and description, and fenced code blocks marked
//! `preview` become preview examples:
//!
//! ````markdown
//! ---
//! title: Card Input
//! description: An input that lives inside a card.
//! ---
//!
//! ```tsx preview name="basic"
//! <CardInput placeholder="Email" />
//! ```
//! ````

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::core::{Catalog, PreviewExample};
use crate::util::fs;
use crate::util::naming::kebab_case;

static NAME_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bname\s*=\s*(?:"([^"]*)"|'([^']*)'|([\w-]+))"#).expect("name attribute regex is valid")
});

const DOC_PATTERNS: &[&str] = &["**/*.md", "**/*.mdx"];

/// Front matter fields berth understands. Everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub component: Option<String>,
}

/// A parsed documentation page.
#[derive(Debug, Clone)]
pub struct DocPage {
    /// Component the page documents
    pub component: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub examples: Vec<PreviewExample>,
    pub path: PathBuf,
}

/// Parse one documentation page.
pub fn parse_doc(text: &str, path: &Path) -> DocPage {
    let (front, body) = split_front_matter(text);

    let front: FrontMatter = match front {
        Some(yaml) => serde_yaml_ng::from_str(yaml).unwrap_or_else(|e| {
            tracing::warn!("ignoring malformed front matter in {}: {}", path.display(), e);
            FrontMatter::default()
        }),
        None => FrontMatter::default(),
    };

    let component = front
        .component
        .clone()
        .or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .map(|name| kebab_case(&name))
        .unwrap_or_default();

    let mut examples: Vec<PreviewExample> = Vec::new();
    for (index, (info, code)) in preview_blocks(body).into_iter().enumerate() {
        let id = NAME_ATTR
            .captures(&info)
            .and_then(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
            .map(|m| kebab_case(m.as_str()))
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("example-{}", index + 1));

        if examples.iter().any(|e| e.id == id) {
            tracing::warn!(
                "duplicate preview `{}` in {}, keeping the first",
                id,
                path.display()
            );
            continue;
        }
        examples.push(PreviewExample::new(component.clone(), id, code, path));
    }

    DocPage {
        component,
        title: front.title,
        description: front.description,
        examples,
        path: path.to_path_buf(),
    }
}

/// Load every documentation page under the given directories.
///
/// Missing directories contribute nothing; unreadable pages are skipped.
pub fn load_docs(dirs: &[PathBuf]) -> Vec<DocPage> {
    let patterns: Vec<String> = DOC_PATTERNS.iter().map(|p| p.to_string()).collect();
    let mut pages = Vec::new();

    for dir in dirs {
        if !dir.is_dir() {
            tracing::debug!("docs directory {} does not exist, skipping", dir.display());
            continue;
        }

        let files = match fs::glob_files(dir, &patterns) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!("failed to list docs in {}: {:#}", dir.display(), e);
                continue;
            }
        };

        for file in files {
            match fs::read_to_string(&file) {
                Ok(text) => pages.push(parse_doc(&text, &file)),
                Err(e) => tracing::warn!("skipping {:#}", e),
            }
        }
    }

    pages
}

/// Merge documentation into the catalog: titles, descriptions and examples.
///
/// Returns the number of examples attached.
pub fn apply_docs(catalog: &mut Catalog, pages: Vec<DocPage>) -> usize {
    let mut examples = Vec::new();

    for page in pages {
        match catalog.get_mut(&page.component) {
            Some(desc) => {
                if let Some(title) = page.title {
                    desc.title = title;
                }
                if let Some(description) = page.description {
                    desc.description = description;
                }
                examples.extend(page.examples);
            }
            None => {
                tracing::debug!(
                    "{} documents unknown component `{}`",
                    page.path.display(),
                    page.component
                );
            }
        }
    }

    catalog.attach_examples(examples)
}

fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let Some(rest) = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
    else {
        return (None, text);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    (None, text)
}

/// An open fenced code block.
struct Fence<'a> {
    marker: String,
    info: String,
    lines: Vec<&'a str>,
}

impl Fence<'_> {
    fn is_closed_by(&self, line: &str) -> bool {
        let line = line.trim_end();
        let ch = self.marker.chars().next().unwrap_or('`');
        line.len() >= self.marker.len() && line.chars().all(|c| c == ch)
    }

    fn is_preview(&self) -> bool {
        self.info.split_whitespace().any(|word| word == "preview")
    }
}

/// Fenced code blocks whose info string carries the `preview` flag, as
/// (info string, code).
fn preview_blocks(body: &str) -> Vec<(String, String)> {
    let mut blocks = Vec::new();
    let mut current: Option<Fence<'_>> = None;

    for line in body.lines() {
        let trimmed = line.trim_start();
        match current.take() {
            None => {
                current = fence_marker(trimmed).map(|marker| Fence {
                    info: trimmed[marker.len()..].trim().to_string(),
                    marker,
                    lines: Vec::new(),
                });
            }
            Some(mut fence) => {
                if fence.is_closed_by(trimmed) {
                    if fence.is_preview() {
                        blocks.push((fence.info, fence.lines.join("\n")));
                    }
                } else {
                    fence.lines.push(line);
                    current = Some(fence);
                }
            }
        }
    }

    blocks
}

fn fence_marker(line: &str) -> Option<String> {
    let ch = line.chars().next()?;
    if ch != '`' && ch != '~' {
        return None;
    }
    let len = line.chars().take_while(|&c| c == ch).count();
    (len >= 3).then(|| ch.to_string().repeat(len))
}
