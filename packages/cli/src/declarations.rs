// Annotated Declarations
//
// Declaration resolver for manifest declarations: claims every type that
// carries an annotation of one kind and keeps the annotation data as is.

use std::any::Any;
use std::rc::Rc;
use zodox_core::{
    Annotation, AnnotationKind, AnnotationReader, DeclarationMetadata, DeclarationResolver,
    DeclarationResolvers, ResolveError, Type, TypeMetadata,
};

/// Kinds resolved when none are requested.
pub const DEFAULT_KINDS: &[&str] = &["component", "directive", "pipe", "injectable"];

/// Metadata of a declaration read from its annotation.
#[derive(Debug)]
pub struct AnnotatedDeclaration {
    pub ty: Type,
    pub kind: String,
    pub data: serde_json::Value,
}

impl TypeMetadata for AnnotatedDeclaration {
    fn ty(&self) -> &Type {
        &self.ty
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct AnnotatedDeclarationResolver<'r> {
    reader: &'r dyn AnnotationReader,
    kind: AnnotationKind,
}

impl<'r> AnnotatedDeclarationResolver<'r> {
    pub fn new(reader: &'r dyn AnnotationReader, kind: impl Into<String>) -> Self {
        Self {
            reader,
            kind: AnnotationKind::Other(kind.into()),
        }
    }
}

impl DeclarationResolver for AnnotatedDeclarationResolver<'_> {
    fn is_supported(&self, ty: &Type) -> bool {
        self.reader.has_annotation(ty, &self.kind)
    }

    fn resolve(&self, ty: &Type) -> Result<DeclarationMetadata, ResolveError> {
        match self.reader.get_annotation(ty, &self.kind) {
            Some(Annotation::Other { kind, data }) => Ok(Rc::new(AnnotatedDeclaration {
                ty: ty.clone(),
                kind: kind.clone(),
                data: data.clone(),
            })),
            _ => Err(ResolveError::declaration(
                ty,
                format!("missing @{} annotation", self.kind),
            )),
        }
    }
}

/// One resolver per kind, in the given order.
pub fn resolvers_for_kinds<'r, S: AsRef<str>>(
    reader: &'r dyn AnnotationReader,
    kinds: &[S],
) -> DeclarationResolvers<'r> {
    let mut resolvers = DeclarationResolvers::new();
    for kind in kinds {
        resolvers.push(AnnotatedDeclarationResolver::new(reader, kind.as_ref()));
    }
    resolvers
}
