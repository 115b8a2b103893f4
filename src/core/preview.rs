//! Documented preview examples.

use std::path::PathBuf;

/// A usage snippet from a documentation page.
///
/// Examples are keyed by `(component, id)`; the pair is unique per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewExample {
    /// Component the example belongs to
    pub component: String,

    /// Example identifier, unique per component
    pub id: String,

    /// Example source text
    pub source: String,

    /// Documentation page the example came from
    pub origin: PathBuf,
}

impl PreviewExample {
    pub fn new(
        component: impl Into<String>,
        id: impl Into<String>,
        source: impl Into<String>,
        origin: impl Into<PathBuf>,
    ) -> Self {
        PreviewExample {
            component: component.into(),
            id: id.into(),
            source: source.into(),
            origin: origin.into(),
        }
    }

    /// Name of the demo manifest generated for this example.
    pub fn demo_name(&self) -> String {
        format!("{}-demo-{}", self.component, self.id)
    }
}
