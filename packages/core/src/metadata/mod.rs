//! Resolved metadata records.

pub mod api;
pub mod providers;

pub use api::{DeclarationMetadata, ModuleMetadata, TypeMetadata};
pub use providers::{ModuleWithProviders, Provider, Token};
