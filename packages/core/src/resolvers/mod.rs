//! Metadata resolvers.

pub mod base;
pub mod module;

pub use base::{DeclarationResolver, DeclarationResolvers};
pub use module::ModuleResolver;
