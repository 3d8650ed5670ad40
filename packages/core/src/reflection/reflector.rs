// Reflector
//
// In-memory annotation side-table.

use super::host::{Annotation, AnnotationReader, Type};
use std::collections::HashMap;

/// Side-table mapping types to the annotations declared on them.
#[derive(Debug, Default)]
pub struct Reflector {
    annotations: HashMap<Type, Vec<Annotation>>,
}

impl Reflector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an annotation to a type.
    pub fn annotate(&mut self, ty: &Type, annotation: impl Into<Annotation>) {
        self.annotations
            .entry(ty.clone())
            .or_default()
            .push(annotation.into());
    }

    /// Get all annotated types.
    pub fn types(&self) -> impl Iterator<Item = &Type> {
        self.annotations.keys()
    }

    /// Get the number of annotated types.
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

impl AnnotationReader for Reflector {
    fn annotations(&self, ty: &Type) -> &[Annotation] {
        self.annotations
            .get(ty)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
