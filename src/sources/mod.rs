//! Registry sources.
//!
//! Everything that reads the project: component source files, the exports and
//! imports inside them, and the documentation pages that carry preview
//! examples.

pub mod catalog;
pub mod docs;
pub mod exports;
pub mod imports;
pub mod lexer;

pub use catalog::{build_catalog, describe_file};
pub use docs::{apply_docs, load_docs, parse_doc, DocPage};
pub use exports::extract_exports;
pub use imports::{scan_imports, split_imports};
