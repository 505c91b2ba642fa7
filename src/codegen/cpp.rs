//! C++ header and source generation from an outline set

use crate::outline::{identifier_for, table_name, Node, OutlineSet};

use super::CodegenConfig;

/// The two generated artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSources {
    /// Declarations: node type, outline indices, table declaration
    pub header: String,
    /// Definitions: one node table per outline plus the table of tables
    pub source: String,
}

/// Generate both artifacts for `outlines`
pub fn generate(outlines: &OutlineSet, config: &CodegenConfig) -> GeneratedSources {
    let builder = CppBuilder::new(config);
    GeneratedSources {
        header: builder.header(outlines),
        source: builder.source(outlines),
    }
}

/// Identifier stem used for an outline's constants
fn stem(label: &str) -> String {
    identifier_for(label).unwrap_or_else(|| label.to_ascii_uppercase())
}

struct CppBuilder<'a> {
    config: &'a CodegenConfig,
}

impl<'a> CppBuilder<'a> {
    fn new(config: &'a CodegenConfig) -> Self {
        Self { config }
    }

    fn banner(&self) -> String {
        format!(
            "// This file was automatically generated by {}. Do not edit this file by hand.\n\n",
            self.config.generator
        )
    }

    fn header(&self, outlines: &OutlineSet) -> String {
        let guard = self.config.include_guard();
        let mut out = self.banner();

        out.push_str(&format!("#ifndef {}\n#define {}\n\n", guard, guard));
        out.push_str("#include <cstddef>\n\n");
        out.push_str(&format!("namespace {} {{\n\n", self.config.namespace));
        out.push_str("struct Node {\n    int x;\n    int y;\n    char action;\n};\n\n");

        for (index, label) in outlines.labels().enumerate() {
            out.push_str(&format!(
                "constexpr std::size_t {} = {};\n",
                stem(label),
                index
            ));
        }
        out.push_str(&format!(
            "constexpr std::size_t COUNT = {};\n",
            outlines.len()
        ));
        out.push_str("extern const Node* ALL_OUTLINES[COUNT];\n");

        out.push_str(&format!("\n}}  // namespace {}\n\n", self.config.namespace));
        out.push_str(&format!("#endif  // {}\n", guard));
        out
    }

    fn source(&self, outlines: &OutlineSet) -> String {
        let mut out = self.banner();

        out.push_str(&format!("#include \"{}\"\n\n", self.config.header_name));
        out.push_str(&format!("namespace {} {{\n", self.config.namespace));

        for (label, nodes) in outlines.iter() {
            out.push_str(&format!("\nconst Node {}[] = {{\n", table_name(&stem(label))));
            for line in nodes.chunks(self.config.nodes_per_line.max(1)) {
                let entries: Vec<String> = line.iter().map(node_entry).collect();
                out.push_str(&format!("    {}\n", entries.join(" ")));
            }
            out.push_str("};\n");
        }

        out.push_str(&format!(
            "\nconst Node* ALL_OUTLINES[{}] = {{\n",
            outlines.len()
        ));
        for label in outlines.labels() {
            out.push_str(&format!("    {},\n", table_name(&stem(label))));
        }
        out.push_str("};\n");

        out.push_str(&format!("\n}}  // namespace {}\n", self.config.namespace));
        out
    }
}

fn node_entry(node: &Node) -> String {
    format!("{{{:8},{:8}, '{}'}},", node.x, node.y, node.action.as_char())
}
