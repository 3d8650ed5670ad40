// Resolver Options
//
// Configuration of the module resolver.

use serde::{Deserialize, Serialize};

/// Where the metadata of exported modules is recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportEdges {
    /// Append exported modules to `imported_modules`, next to the imports.
    #[default]
    FoldIntoImports,
    /// Append exported modules to `exported_modules`.
    Separate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleResolverOptions {
    pub export_edges: ExportEdges,
}

impl ModuleResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_export_edges(mut self, export_edges: ExportEdges) -> Self {
        self.export_edges = export_edges;
        self
    }
}
