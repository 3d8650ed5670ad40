//! Type identity and annotation lookup.
//!
//! Module types carry their metadata in an explicit side-table instead of
//! runtime reflection: hosts register annotations on a [`Reflector`] and the
//! resolvers read them back through the [`AnnotationReader`] trait.

pub mod host;
pub mod reflector;

pub use host::{Annotation, AnnotationKind, AnnotationReader, ModuleAnnotation, ModuleImport, Type};
pub use reflector::Reflector;
