//! Configuration for C++ code generation

/// Configuration options for the generated header and source files
#[derive(Debug, Clone, PartialEq)]
pub struct CodegenConfig {
    /// C++ namespace wrapping all generated declarations
    pub namespace: String,

    /// Name written into the "generated by" banner
    pub generator: String,

    /// File name of the header, used for the include guard and `#include`
    pub header_name: String,

    /// Node entries per line in the outline tables
    pub nodes_per_line: usize,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            namespace: "Outlines".to_string(),
            generator: "outline-extract".to_string(),
            header_name: "Outlines.h".to_string(),
            nodes_per_line: 4,
        }
    }
}

impl CodegenConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the C++ namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the generator name shown in the banner
    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    /// Set the header file name
    pub fn with_header_name(mut self, name: impl Into<String>) -> Self {
        self.header_name = name.into();
        self
    }

    /// Set how many node entries go on each line (at least one)
    pub fn with_nodes_per_line(mut self, count: usize) -> Self {
        self.nodes_per_line = count.max(1);
        self
    }

    /// Include guard macro derived from the header name (`Outlines.h` → `OUTLINES_H_`)
    pub fn include_guard(&self) -> String {
        let mut guard: String = self
            .header_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        guard.push('_');
        guard
    }
}
