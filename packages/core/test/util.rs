// Shared fixtures for the resolver specs.
#![allow(dead_code)]

use serde_json::json;
use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;
use zodox_core::{
    Annotation, AnnotationKind, AnnotationReader, DeclarationMetadata, DeclarationResolver,
    ResolveError, Type, TypeMetadata,
};

/// Metadata produced by [`KindResolver`].
#[derive(Debug)]
pub struct KindMeta {
    pub ty: Type,
    pub kind: String,
    pub resolved_by: &'static str,
    pub data: serde_json::Value,
}

impl TypeMetadata for KindMeta {
    fn ty(&self) -> &Type {
        &self.ty
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Claims types annotated with one kind and counts its resolutions.
pub struct KindResolver<'a> {
    pub reader: &'a dyn AnnotationReader,
    pub kind: AnnotationKind,
    pub name: &'static str,
    pub calls: Rc<Cell<usize>>,
}

impl<'a> KindResolver<'a> {
    pub fn new(reader: &'a dyn AnnotationReader, kind: &str, name: &'static str) -> Self {
        Self {
            reader,
            kind: AnnotationKind::other(kind),
            name,
            calls: Rc::new(Cell::new(0)),
        }
    }
}

impl DeclarationResolver for KindResolver<'_> {
    fn is_supported(&self, ty: &Type) -> bool {
        self.reader.has_annotation(ty, &self.kind)
    }

    fn resolve(&self, ty: &Type) -> Result<DeclarationMetadata, ResolveError> {
        self.calls.set(self.calls.get() + 1);
        match self.reader.get_annotation(ty, &self.kind) {
            Some(Annotation::Other { kind, data }) => Ok(Rc::new(KindMeta {
                ty: ty.clone(),
                kind: kind.clone(),
                resolved_by: self.name,
                data: data.clone(),
            })),
            _ => Err(ResolveError::declaration(ty, "annotation disappeared")),
        }
    }
}

/// Claims every type it is given, whatever its annotations.
pub struct GreedyResolver {
    pub claims: Vec<Type>,
    pub name: &'static str,
}

impl DeclarationResolver for GreedyResolver {
    fn is_supported(&self, ty: &Type) -> bool {
        self.claims.contains(ty)
    }

    fn resolve(&self, ty: &Type) -> Result<DeclarationMetadata, ResolveError> {
        Ok(Rc::new(KindMeta {
            ty: ty.clone(),
            kind: "greedy".to_string(),
            resolved_by: self.name,
            data: json!(null),
        }))
    }
}

/// Always fails.
pub struct FailingResolver {
    pub claims: Type,
}

impl DeclarationResolver for FailingResolver {
    fn is_supported(&self, ty: &Type) -> bool {
        ty == &self.claims
    }

    fn resolve(&self, ty: &Type) -> Result<DeclarationMetadata, ResolveError> {
        Err(ResolveError::declaration(ty, "template could not be parsed"))
    }
}

pub fn kind_meta(meta: &DeclarationMetadata) -> &KindMeta {
    meta.downcast_ref::<KindMeta>()
        .expect("declaration should be resolved by a kind resolver")
}
