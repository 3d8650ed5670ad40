// Graph Command
//
// Resolves one root module of a manifest and renders the result.

use crate::config::{ManifestGraph, ModuleManifest};
use crate::declarations::{resolvers_for_kinds, DEFAULT_KINDS};
use crate::render::{render_json, render_tree};
use anyhow::{anyhow, Context};
use std::path::PathBuf;
use std::str::FromStr;
use zodox_core::logging::{ConsoleLogger, LogLevel, Logger, NullLogger};
use zodox_core::ModuleResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tree,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" => Ok(OutputFormat::Tree),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!("Unknown output format: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GraphCommand {
    pub manifest: PathBuf,
    pub root: String,
    pub format: OutputFormat,
    /// Declaration kinds to register resolvers for; empty means the defaults.
    pub kinds: Vec<String>,
    pub verbose: bool,
}

impl GraphCommand {
    pub fn execute(&self) -> anyhow::Result<String> {
        let manifest = ModuleManifest::load(&self.manifest)?;
        let graph = manifest
            .build()
            .with_context(|| format!("Invalid manifest {}", self.manifest.display()))?;
        let logger: Box<dyn Logger> = if self.verbose {
            Box::new(ConsoleLogger::new(LogLevel::Debug))
        } else {
            Box::new(NullLogger::new())
        };
        resolve_and_render(&graph, &self.root, &self.kinds, self.format, logger)
    }
}

/// Resolve `root` within `graph` and render it in `format`.
pub fn resolve_and_render(
    graph: &ManifestGraph,
    root: &str,
    kinds: &[String],
    format: OutputFormat,
    logger: Box<dyn Logger>,
) -> anyhow::Result<String> {
    let root_type = graph
        .type_named(root)
        .ok_or_else(|| anyhow!("Module {} is not part of the manifest", root))?;

    let resolvers = if kinds.is_empty() {
        resolvers_for_kinds(&graph.reflector, DEFAULT_KINDS)
    } else {
        resolvers_for_kinds(&graph.reflector, kinds)
    };
    let resolver = ModuleResolver::with_resolvers(&graph.reflector, resolvers)
        .with_options(graph.options.clone())
        .with_logger(logger);

    // ResolveError holds non-Send type handles, so it is flattened to text.
    let metadata = resolver
        .resolve(root_type)
        .map_err(|e| anyhow!("{}: {}", e.code(), e))?;

    match format {
        OutputFormat::Tree => Ok(render_tree(&metadata)),
        OutputFormat::Json => render_json(&metadata),
    }
}
