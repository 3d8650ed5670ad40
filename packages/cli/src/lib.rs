#![deny(clippy::all)]

/**
 * Zodox CLI
 *
 * Loads module manifests from disk and prints their resolved module graph.
 */

pub mod config;
pub mod declarations;
pub mod graph;
pub mod render;

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
