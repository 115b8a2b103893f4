//! Import scanning.
//!
//! Finds the module specifiers a source file imports. Type-only imports are
//! skipped: they vanish at compile time and never need installing.

use std::sync::LazyLock;

use regex::Regex;

use crate::sources::lexer::strip_comments;

/// Start of an `import` or `export` statement.
static KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:import|export)\b").expect("keyword regex is valid"));

/// `import ... from "x"` and `export ... from "x"`, anchored at a keyword
static FROM_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(import|export)\s+(type\s+)?([\w\s{},*$]*?)\s*\bfrom\s*["']([^"']+)["']"#)
        .expect("import regex is valid")
});

/// `import "x"`
static SIDE_EFFECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s*["']([^"']+)["']"#).expect("side-effect import regex is valid")
});

/// `import("x")`
static DYNAMIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s*\(\s*["']([^"']+)["']\s*\)"#).expect("dynamic import regex is valid")
});

/// A whole import statement at the start of a line.
static STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*import\b[^;"']*?["'][^"']+["'][ \t]*;?[ \t]*(?:\r?\n|$)"#)
        .expect("import statement regex is valid")
});

/// Scan source text for imported module specifiers.
///
/// Specifiers are deduplicated and returned in the order they appear.
pub fn scan_imports(source: &str) -> Vec<String> {
    let code = strip_comments(source);
    let mut found: Vec<(usize, String)> = Vec::new();

    for keyword in KEYWORD.find_iter(&code) {
        let start = keyword.start();
        let Some(caps) = FROM_CLAUSE.captures(&code[start..]) else {
            continue;
        };
        // A clause never spans into the next statement.
        if KEYWORD.is_match(&caps[3]) {
            continue;
        }
        if caps.get(2).is_some() || is_type_only_clause(&caps[3]) {
            continue;
        }
        found.push((start, caps[4].to_string()));
    }

    for re in [&*SIDE_EFFECT, &*DYNAMIC] {
        for caps in re.captures_iter(&code) {
            let start = caps.get(0).map_or(0, |m| m.start());
            found.push((start, caps[1].to_string()));
        }
    }

    found.sort_by_key(|(offset, _)| *offset);

    let mut specifiers: Vec<String> = Vec::new();
    for (_, spec) in found {
        if !specifiers.contains(&spec) {
            specifiers.push(spec);
        }
    }
    specifiers
}

/// Split source into its leading-line import statements and everything else.
///
/// Used for example snippets, whose imports must be hoisted above generated
/// page code.
pub fn split_imports(source: &str) -> (Vec<String>, String) {
    let mut statements = Vec::new();
    for m in STATEMENT.find_iter(source) {
        statements.push(m.as_str().trim().to_string());
    }
    let body = STATEMENT.replace_all(source, "").into_owned();
    (statements, body)
}

/// `{ type A, type B }` imports nothing at runtime.
fn is_type_only_clause(clause: &str) -> bool {
    let clause = clause.trim();
    let Some(inner) = clause
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    else {
        return false;
    };

    let items: Vec<&str> = inner
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect();
    !items.is_empty() && items.iter().all(|item| item.starts_with("type "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_common_forms() {
        let src = r#"
"use client"

import * as React from "react"
import {
  Root,
  Trigger,
} from "@radix-ui/react-dialog"
import { cn } from "@/lib/utils"
import "./styles.css"
export { Thing } from "./thing"

const Lazy = React.lazy(() => import("./lazy"))
"#;
        assert_eq!(
            scan_imports(src),
            vec![
                "react",
                "@radix-ui/react-dialog",
                "@/lib/utils",
                "./styles.css",
                "./thing",
                "./lazy",
            ]
        );
    }

    #[test]
    fn test_type_only_imports_are_skipped() {
        let src = r#"
import type { VariantProps } from "class-variance-authority"
import { type ButtonProps, type Size } from "@/components/ui/button"
export type { Other } from "./other"
import { cva, type VariantProps as V } from "class-variance-authority"
"#;
        assert_eq!(scan_imports(src), vec!["class-variance-authority"]);
    }

    #[test]
    fn test_clause_stops_at_next_statement() {
        let src = "export type { Props }\nimport { cn } from \"@/lib/utils\"\n";
        assert_eq!(scan_imports(src), vec!["@/lib/utils"]);

        let src = "export { Card, CardHeader }\nimport type { X } from \"./x\"\nimport { cva } from \"class-variance-authority\"\n";
        assert_eq!(scan_imports(src), vec!["class-variance-authority"]);
    }

    #[test]
    fn test_commented_imports_are_skipped() {
        let src = "// import { x } from \"lodash\"\n/* import \"zod\" */\nimport { y } from \"clsx\"\n";
        assert_eq!(scan_imports(src), vec!["clsx"]);
    }

    #[test]
    fn test_non_import_exports_are_ignored() {
        let src = "export const label = \"from here\"\nexport function go() {}\n";
        assert!(scan_imports(src).is_empty());
    }

    #[test]
    fn test_split_imports() {
        let src = "import { Button } from \"@/components/ui/button\"\nimport {\n  Mail,\n} from \"lucide-react\"\n\n<Button><Mail /></Button>\n";
        let (imports, body) = split_imports(src);
        assert_eq!(imports.len(), 2);
        assert_eq!(imports[0], "import { Button } from \"@/components/ui/button\"");
        assert!(imports[1].contains("lucide-react"));
        assert_eq!(body.trim(), "<Button><Mail /></Button>");
    }
}
