//! Code generation for the outline tables
//!
//! This module turns an OutlineSet into a C++ header of outline indices
//! and a source file holding the node tables.

pub mod config;
pub mod cpp;

pub use config::CodegenConfig;
pub use cpp::{generate, GeneratedSources};
