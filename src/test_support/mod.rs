//! Test utilities for berth unit tests.
//!
//! Fixtures write complete registry projects (configuration, component
//! sources, documentation) into a temporary directory so operations can be
//! exercised against a real filesystem.
//!
//! # Example
//!
//! ```rust,ignore
//! use berth::test_support::fixtures::RegistryFixture;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = RegistryFixture::new()
//!         .file("registry/ui/button.tsx", "export function Button() {}\n");
//!     let config = fixture.config();
//!     // Use the config in tests...
//! }
//! ```

pub mod fixtures;

use std::path::Path;

// Re-export fixtures for convenience
pub use fixtures::*;

/// Read a generated JSON file.
pub fn read_json(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("{} is not valid JSON: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_writes_project() {
        let fixture = RegistryFixture::card_input();

        assert!(fixture.path().join("berth.toml").is_file());
        assert!(fixture.path().join("registry/ui/card-input.tsx").is_file());
        assert!(fixture.path().join("docs/card-input.mdx").is_file());
        assert_eq!(fixture.config().registry.name, "acme");
    }

    #[test]
    fn test_read_json() {
        let fixture = RegistryFixture::new().file("out/a.json", "{\"name\": \"a\"}\n");
        let value = read_json(&fixture.path().join("out/a.json"));
        assert_eq!(value["name"], "a");
    }
}
