//! Outline Extract - bake SVG path outlines into fixed-point C++ tables
//!
//! This library reads labeled `path` elements from an SVG drawing, resolves
//! their path data into absolute fixed-point nodes (coordinates x 10,000)
//! and generates a C++ header and source file holding one node table per
//! outline.
//!
//! # Example
//!
//! ```rust
//! use outline_extract::render;
//!
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"
//!                   xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape">
//!     <path inkscape:label="box" d="M0,0 L1,0 L1,1 Z" />
//! </svg>"#;
//!
//! let generated = render(svg).unwrap();
//! assert!(generated.header.contains("constexpr std::size_t BOX = 0;"));
//! assert!(generated.source.contains("const Node OUTLINE_BOX[]"));
//! ```

pub mod codegen;
pub mod config;
pub mod document;
pub mod error;
pub mod outline;
pub mod output;
pub mod path;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub use codegen::{CodegenConfig, GeneratedSources};
pub use config::{ConfigError, ExtractConfig};
pub use document::{DocumentConfig, LabeledPath};
pub use error::ExtractError;
pub use outline::{Action, Node, OutlineSet};
pub use path::PathError;

/// What [`run`] does with the generated artifacts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Overwrite the output files
    #[default]
    Write,
    /// Compare with the output files and fail if they differ
    Check,
}

/// Outcome of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub outlines: usize,
    pub nodes: usize,
}

/// Resolve every labeled path in `svg` into an outline
///
/// Labels must uppercase to distinct C identifiers that collide neither with
/// the names the generated code reserves (`COUNT`, `ALL_OUTLINES`) nor with
/// another outline's `OUTLINE_<LABEL>` table. Duplicate labels are an
/// error unless the configuration allows them, in which case the last path
/// wins.
pub fn extract_outlines(svg: &str, config: &DocumentConfig) -> Result<OutlineSet, ExtractError> {
    let mut outlines = OutlineSet::new();
    // generated name -> label that claimed it
    let mut names: HashMap<String, String> = HashMap::new();

    for LabeledPath { label, data } in document::read_labeled_paths(svg, config)? {
        let identifier = outline::identifier_for(&label).ok_or_else(|| {
            ExtractError::InvalidLabel {
                label: label.clone(),
            }
        })?;
        if outline::RESERVED_IDENTIFIERS.contains(&identifier.as_str()) {
            return Err(ExtractError::ReservedLabel { label, identifier });
        }

        if outlines.contains(&label) {
            if !config.allow_duplicate_labels {
                return Err(ExtractError::DuplicateLabel { label });
            }
            log::warn!("duplicate outline label '{}', keeping the last one", label);
        } else {
            for name in outline::generated_names(&identifier) {
                if let Some(first) = names.get(&name) {
                    return Err(ExtractError::IdentifierClash {
                        first: first.clone(),
                        second: label,
                        identifier: name,
                    });
                }
            }
        }

        let nodes = match path::resolve(&data) {
            Ok(nodes) => nodes,
            Err(source) => {
                return Err(ExtractError::Path {
                    label,
                    data,
                    source,
                })
            }
        };

        log::debug!("outline '{}': {} nodes", label, nodes.len());
        for name in outline::generated_names(&identifier) {
            names.insert(name, label.clone());
        }
        outlines.insert(label, nodes);
    }

    Ok(outlines)
}

/// Load a TOML run configuration, see [`ExtractConfig::from_file`]
pub fn load_config(path: &Path) -> Result<ExtractConfig, ExtractError> {
    ExtractConfig::from_file(path).map_err(|source| ExtractError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Generate both artifacts from SVG source with default configuration
pub fn render(svg: &str) -> Result<GeneratedSources, ExtractError> {
    let outlines = extract_outlines(svg, &DocumentConfig::default())?;
    Ok(codegen::generate(&outlines, &CodegenConfig::default()))
}

/// Run the whole extraction described by `config`
///
/// Both artifacts are generated in memory before any file is touched, so an
/// input error leaves existing outputs unchanged. They are then replaced as a
/// pair: if either cannot be written, neither changes.
pub fn run(config: &ExtractConfig, mode: RunMode) -> Result<RunSummary, ExtractError> {
    let svg = fs::read_to_string(&config.input).map_err(|source| ExtractError::Read {
        path: config.input.clone(),
        source,
    })?;
    log::info!("reading outlines from {}", config.input.display());

    let outlines = extract_outlines(&svg, &config.document)?;
    if outlines.is_empty() {
        log::warn!("no labeled paths found in {}", config.input.display());
    }

    let generated = codegen::generate(&outlines, &config.effective_codegen());
    let artifacts = [
        (config.header.as_path(), generated.header.as_str()),
        (config.source.as_path(), generated.source.as_str()),
    ];

    match mode {
        RunMode::Write => {
            output::write_all_atomically(&artifacts)?;
            for (path, _) in artifacts {
                log::info!("wrote {}", path.display());
            }
        }
        RunMode::Check => {
            for (path, contents) in artifacts {
                output::check_current(path, contents)?;
                log::info!("{} is up to date", path.display());
            }
        }
    }

    Ok(RunSummary {
        outlines: outlines.len(),
        nodes: outlines.iter().map(|(_, nodes)| nodes.len()).sum(),
    })
}
