//! Configuration for reading outlines out of an SVG document

/// Namespace of the Inkscape annotations carrying outline labels
pub const INKSCAPE_NAMESPACE: &str = "http://www.inkscape.org/namespaces/inkscape";

/// Controls which path elements become outlines
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentConfig {
    /// Also collect paths nested in groups and layers, not only children of the root
    pub nested_paths: bool,

    /// Namespace of the label attribute
    pub label_namespace: String,

    /// Local name of the label attribute
    pub label_attribute: String,

    /// Let a later path replace an earlier one with the same label
    pub allow_duplicate_labels: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            nested_paths: false,
            label_namespace: INKSCAPE_NAMESPACE.to_string(),
            label_attribute: "label".to_string(),
            allow_duplicate_labels: false,
        }
    }
}

impl DocumentConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect paths at any depth
    pub fn with_nested_paths(mut self, nested: bool) -> Self {
        self.nested_paths = nested;
        self
    }

    /// Read labels from a different namespaced attribute
    pub fn with_label_attribute(
        mut self,
        namespace: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        self.label_namespace = namespace.into();
        self.label_attribute = attribute.into();
        self
    }

    /// Tolerate duplicate labels (last one wins)
    pub fn with_duplicate_labels(mut self, allow: bool) -> Self {
        self.allow_duplicate_labels = allow;
        self
    }
}
