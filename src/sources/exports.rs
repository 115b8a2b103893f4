//! Export extraction.
//!
//! A best-effort lexical scan of component source for the symbols it exports.
//! It never fails: source it cannot make sense of simply yields no exports.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::ExportSet;
use crate::sources::lexer::strip_comments;

static EXPORT_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bexport\s+(type\s+)?\{([^}]*)\}").expect("export list regex is valid")
});

static EXPORT_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\bexport\s+(?:declare\s+)?(?:async\s+)?(?:(?:const|let|var|enum|class|abstract\s+class)\s+|function\s*\*?\s*)([A-Za-z_$][\w$]*)",
    )
    .expect("export declaration regex is valid")
});

static EXPORT_DEFAULT_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bexport\s+default\s+(?:async\s+)?(?:function\s*\*?\s*|class\s+)([A-Za-z_$][\w$]*)")
        .expect("default declaration regex is valid")
});

static EXPORT_DEFAULT_IDENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)\bexport\s+default\s+([A-Za-z_$][\w$]*)\s*(?:;|$)")
        .expect("default identifier regex is valid")
});

static DISPLAY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b([A-Za-z_$][\w$]*)\.displayName\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("display name regex is valid")
});

const KEYWORDS: &[&str] = &["function", "class", "async", "abstract"];

/// Extract the exported symbols of a source file.
pub fn extract_exports(source: &str) -> ExportSet {
    let code = strip_comments(source);

    // (offset, name) so the final order follows the text
    let mut found: Vec<(usize, String)> = Vec::new();
    let mut default: Option<(usize, String)> = None;

    for caps in EXPORT_LIST.captures_iter(&code) {
        if caps.get(1).is_some() {
            continue;
        }
        let Some(list) = caps.get(2) else { continue };
        for item in list.as_str().split(',') {
            let item = item.trim();
            if item.is_empty() || item.starts_with("type ") {
                continue;
            }
            let (local, exported) = match item.split_once(" as ") {
                Some((local, exported)) => (local.trim(), exported.trim()),
                None => (item, item),
            };
            // `export { default } from "./x"` names no local binding
            if local == "default" && exported == "default" {
                continue;
            }
            if exported == "default" {
                default.get_or_insert((list.start(), local.to_string()));
            } else {
                found.push((list.start(), exported.to_string()));
            }
        }
    }

    for caps in EXPORT_DECL.captures_iter(&code) {
        let start = caps.get(0).map_or(0, |m| m.start());
        found.push((start, caps[1].to_string()));
    }

    for caps in EXPORT_DEFAULT_DECL.captures_iter(&code) {
        let start = caps.get(0).map_or(0, |m| m.start());
        default.get_or_insert((start, caps[1].to_string()));
    }

    for caps in EXPORT_DEFAULT_IDENT.captures_iter(&code) {
        let name = &caps[1];
        if KEYWORDS.contains(&name) {
            continue;
        }
        let start = caps.get(0).map_or(0, |m| m.start());
        default.get_or_insert((start, name.to_string()));
    }

    found.sort_by_key(|(offset, _)| *offset);

    let mut named: Vec<String> = Vec::new();
    for (_, name) in found {
        if is_valid_name(&name) && !named.contains(&name) {
            named.push(name);
        }
    }

    let mut display_names: Vec<(String, String)> = Vec::new();
    for caps in DISPLAY_NAME.captures_iter(&code) {
        let local = caps[1].to_string();
        let display = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        if !is_valid_name(&local) || display_names.iter().any(|(l, _)| *l == local) {
            continue;
        }
        display_names.push((local, display));
    }

    ExportSet {
        named,
        default: default.map(|(_, name)| name).filter(|name| is_valid_name(name)),
        display_names,
    }
}

fn is_valid_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}
