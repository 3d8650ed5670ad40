// Declaration Resolvers
//
// Pluggable resolvers for the non-module types a module declares.

use crate::errors::ResolveError;
use crate::metadata::DeclarationMetadata;
use crate::reflection::Type;

/// Resolves one family of declared types into metadata.
pub trait DeclarationResolver {
    /// Whether this resolver claims `ty`.
    fn is_supported(&self, ty: &Type) -> bool;

    /// Resolve a type previously accepted by [`is_supported`](Self::is_supported).
    fn resolve(&self, ty: &Type) -> Result<DeclarationMetadata, ResolveError>;
}

/// Ordered list of declaration resolvers. The first supporting resolver wins.
#[derive(Default)]
pub struct DeclarationResolvers<'r> {
    resolvers: Vec<Box<dyn DeclarationResolver + 'r>>,
}

impl<'r> DeclarationResolvers<'r> {
    pub fn new() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    pub fn push(&mut self, resolver: impl DeclarationResolver + 'r) {
        self.resolvers.push(Box::new(resolver));
    }

    pub fn with(mut self, resolver: impl DeclarationResolver + 'r) -> Self {
        self.push(resolver);
        self
    }

    /// First resolver that supports `ty`.
    pub fn find(&self, ty: &Type) -> Option<&dyn DeclarationResolver> {
        self.resolvers
            .iter()
            .find(|r| r.is_supported(ty))
            .map(|r| r.as_ref())
    }

    /// Resolve `ty` with the first supporting resolver, returning its result
    /// unchanged.
    pub fn resolve(&self, ty: &Type) -> Result<DeclarationMetadata, ResolveError> {
        let resolver = self
            .find(ty)
            .ok_or_else(|| ResolveError::NoResolver { ty: ty.clone() })?;
        resolver.resolve(ty)
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl<'r> From<Vec<Box<dyn DeclarationResolver + 'r>>> for DeclarationResolvers<'r> {
    fn from(resolvers: Vec<Box<dyn DeclarationResolver + 'r>>) -> Self {
        Self { resolvers }
    }
}
