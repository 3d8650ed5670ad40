// Resolution Errors
//
// Fatal errors raised while resolving a module graph.

use crate::reflection::{AnnotationKind, Type};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A type used as a module does not carry the `Module` annotation.
    NoAnnotation = 1001,

    /// No declaration resolver supports a declared type.
    NoResolver = 1002,

    /// A module transitively imports or exports itself.
    CyclicModuleGraph = 1003,

    /// A declaration resolver rejected the type it claimed.
    DeclarationFailed = 1004,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZDX-{}", *self as i32)
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{ty} is missing the @{kind} annotation")]
    NoAnnotation { ty: Type, kind: AnnotationKind },

    #[error(
        "Failed to resolve metadata of {ty}, did you add its resolver to the declaration resolvers?"
    )]
    NoResolver { ty: Type },

    #[error("Cyclic module graph: {}", join_path(.path))]
    CyclicModuleGraph { path: Vec<Type> },

    #[error("Failed to resolve declaration {ty}: {message}")]
    Declaration { ty: Type, message: String },
}

fn join_path(path: &[Type]) -> String {
    path.iter()
        .map(|ty| ty.name())
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl ResolveError {
    pub fn missing_module_annotation(ty: &Type) -> Self {
        ResolveError::NoAnnotation {
            ty: ty.clone(),
            kind: AnnotationKind::Module,
        }
    }

    pub fn declaration(ty: &Type, message: impl Into<String>) -> Self {
        ResolveError::Declaration {
            ty: ty.clone(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ResolveError::NoAnnotation { .. } => ErrorCode::NoAnnotation,
            ResolveError::NoResolver { .. } => ErrorCode::NoResolver,
            ResolveError::CyclicModuleGraph { .. } => ErrorCode::CyclicModuleGraph,
            ResolveError::Declaration { .. } => ErrorCode::DeclarationFailed,
        }
    }

    /// The type the error is reported against.
    pub fn ty(&self) -> Option<&Type> {
        match self {
            ResolveError::NoAnnotation { ty, .. }
            | ResolveError::NoResolver { ty }
            | ResolveError::Declaration { ty, .. } => Some(ty),
            ResolveError::CyclicModuleGraph { path } => path.last(),
        }
    }
}
