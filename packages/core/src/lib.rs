#![deny(clippy::all)]

//! Zodox Core - module graph resolution
//!
//! Resolves annotated module descriptors (imports, exports, declarations and
//! providers) into a memoized metadata graph that a dependency-injection
//! container consumes at bootstrap time.

pub mod config;
pub mod errors;
pub mod logging;
pub mod metadata;
pub mod reflection;
pub mod resolvers;

pub use config::{ExportEdges, ModuleResolverOptions};
pub use errors::{ErrorCode, ResolveError};
pub use metadata::{
    DeclarationMetadata, ModuleMetadata, ModuleWithProviders, Provider, Token, TypeMetadata,
};
pub use reflection::{
    Annotation, AnnotationKind, AnnotationReader, ModuleAnnotation, ModuleImport, Reflector, Type,
};
pub use resolvers::{DeclarationResolver, DeclarationResolvers, ModuleResolver};
