//! Run configuration loaded from TOML
//!
//! Every key is optional; anything left out keeps the defaults, which
//! reproduce the fixed layout of the outline build: `outlines.svg` in the
//! working directory, generated files in `../src`.
//!
//! ```toml
//! input = "outlines.svg"
//! header = "../src/Outlines.h"
//! source = "../src/Outlines.cpp"
//!
//! [document]
//! nested_paths = false
//! allow_duplicate_labels = false
//!
//! [codegen]
//! namespace = "Outlines"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::codegen::CodegenConfig;
use crate::document::DocumentConfig;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Everything a run needs: where to read, where to write, how to generate
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractConfig {
    pub input: PathBuf,
    pub header: PathBuf,
    pub source: PathBuf,
    pub document: DocumentConfig,
    pub codegen: CodegenConfig,
}

/// TOML structure for deserializing configuration files
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    input: Option<PathBuf>,
    header: Option<PathBuf>,
    source: Option<PathBuf>,
    document: Option<TomlDocument>,
    codegen: Option<TomlCodegen>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDocument {
    nested_paths: Option<bool>,
    label_namespace: Option<String>,
    label_attribute: Option<String>,
    allow_duplicate_labels: Option<bool>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCodegen {
    namespace: Option<String>,
    generator: Option<String>,
    nodes_per_line: Option<usize>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("outlines.svg"),
            header: PathBuf::from("../src/Outlines.h"),
            source: PathBuf::from("../src/Outlines.cpp"),
            document: DocumentConfig::default(),
            codegen: CodegenConfig::default(),
        }
    }
}

impl ExtractConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    ///
    /// Relative paths in the file are taken relative to the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_str(&content)?;
        if let Some(base) = path.parent() {
            config.input = base.join(&config.input);
            config.header = base.join(&config.header);
            config.source = base.join(&config.source);
        }
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(input) = parsed.input {
            config.input = input;
        }
        if let Some(header) = parsed.header {
            config.header = header;
        }
        if let Some(source) = parsed.source {
            config.source = source;
        }

        if let Some(doc) = parsed.document {
            let defaults = DocumentConfig::default();
            config.document = DocumentConfig::new()
                .with_nested_paths(doc.nested_paths.unwrap_or(defaults.nested_paths))
                .with_label_attribute(
                    doc.label_namespace.unwrap_or(defaults.label_namespace),
                    doc.label_attribute.unwrap_or(defaults.label_attribute),
                )
                .with_duplicate_labels(
                    doc.allow_duplicate_labels
                        .unwrap_or(defaults.allow_duplicate_labels),
                );
        }

        if let Some(codegen) = parsed.codegen {
            if let Some(namespace) = codegen.namespace {
                config.codegen = config.codegen.with_namespace(namespace);
            }
            if let Some(generator) = codegen.generator {
                config.codegen = config.codegen.with_generator(generator);
            }
            if let Some(count) = codegen.nodes_per_line {
                config.codegen = config.codegen.with_nodes_per_line(count);
            }
        }

        Ok(config)
    }

    /// Set the SVG input path
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = path.into();
        self
    }

    /// Set the generated header path
    pub fn with_header(mut self, path: impl Into<PathBuf>) -> Self {
        self.header = path.into();
        self
    }

    /// Set the generated source path
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = path.into();
        self
    }

    /// Set the document configuration
    pub fn with_document(mut self, config: DocumentConfig) -> Self {
        self.document = config;
        self
    }

    /// Set the code generation configuration
    pub fn with_codegen(mut self, config: CodegenConfig) -> Self {
        self.codegen = config;
        self
    }

    /// Code generation settings with the header name taken from the header path
    pub fn effective_codegen(&self) -> CodegenConfig {
        match self.header.file_name() {
            Some(name) => self
                .codegen
                .clone()
                .with_header_name(name.to_string_lossy()),
            None => self.codegen.clone(),
        }
    }
}
