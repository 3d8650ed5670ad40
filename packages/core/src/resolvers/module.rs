// Module Resolver
//
// Resolves a module type and everything it imports or exports into a
// memoized metadata graph.

use super::base::{DeclarationResolver, DeclarationResolvers};
use crate::config::{ExportEdges, ModuleResolverOptions};
use crate::errors::ResolveError;
use crate::logging::{LogLevel, Logger, NullLogger};
use crate::metadata::{DeclarationMetadata, ModuleMetadata};
use crate::reflection::{AnnotationKind, AnnotationReader, ModuleImport, Type};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

/// Resolver for module metadata.
///
/// One instance is one resolution session: every module type resolves to a
/// single shared [`ModuleMetadata`] for as long as the cache lives. The
/// resolver is single-threaded and must not be shared across simultaneous
/// sessions.
pub struct ModuleResolver<'r> {
    reader: &'r dyn AnnotationReader,
    resolvers: DeclarationResolvers<'r>,
    options: ModuleResolverOptions,
    logger: Box<dyn Logger + 'r>,
    /// Fully resolved modules, in completion order.
    cache: RefCell<IndexMap<Type, Rc<ModuleMetadata>>>,
    /// Modules whose resolution has started but not finished.
    in_progress: RefCell<Vec<Type>>,
}

impl<'r> ModuleResolver<'r> {
    /// Create a resolver without declaration resolvers.
    pub fn new(reader: &'r dyn AnnotationReader) -> Self {
        Self::with_resolvers(reader, DeclarationResolvers::new())
    }

    pub fn with_resolvers(
        reader: &'r dyn AnnotationReader,
        resolvers: impl Into<DeclarationResolvers<'r>>,
    ) -> Self {
        Self {
            reader,
            resolvers: resolvers.into(),
            options: ModuleResolverOptions::default(),
            logger: Box::new(NullLogger::new()),
            cache: RefCell::new(IndexMap::new()),
            in_progress: RefCell::new(Vec::new()),
        }
    }

    pub fn with_options(mut self, options: ModuleResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_logger(mut self, logger: impl Logger + 'r) -> Self {
        self.logger = Box::new(logger);
        self
    }

    /// Append a declaration resolver after the ones already registered.
    pub fn add_resolver(&mut self, resolver: impl DeclarationResolver + 'r) {
        self.resolvers.push(resolver);
    }

    pub fn options(&self) -> &ModuleResolverOptions {
        &self.options
    }

    /// Whether `ty` carries the `Module` annotation.
    pub fn is_supported(&self, ty: &Type) -> bool {
        self.reader.has_annotation(ty, &AnnotationKind::Module)
    }

    /// Resolve `ty` into its module metadata.
    ///
    /// Cached metadata is returned as is. Otherwise the module's imports,
    /// exports and declarations are resolved depth-first in declaration order
    /// and the result is cached once complete.
    pub fn resolve(&self, ty: &Type) -> Result<Rc<ModuleMetadata>, ResolveError> {
        if let Some(metadata) = self.cached(ty) {
            if self.logger.is_enabled(LogLevel::Debug) {
                self.logger.debug(&format!("{}: cache hit", ty));
            }
            return Ok(metadata);
        }

        self.enter(ty)?;
        let result = self.resolve_uncached(ty);
        self.in_progress.borrow_mut().pop();

        let metadata = Rc::new(result?);
        self.cache
            .borrow_mut()
            .insert(ty.clone(), Rc::clone(&metadata));
        if self.logger.is_enabled(LogLevel::Debug) {
            self.logger.debug(&format!(
                "{}: resolved ({} imported, {} declarations, {} providers)",
                ty,
                metadata.imported_modules.len(),
                metadata.declarations.len(),
                metadata.providers.len()
            ));
        }
        Ok(metadata)
    }

    /// Resolve a declared type with the first declaration resolver that
    /// supports it.
    pub fn resolve_declaration(&self, ty: &Type) -> Result<DeclarationMetadata, ResolveError> {
        self.resolvers.resolve(ty)
    }

    /// Cached metadata for `ty`, if it has been resolved.
    pub fn cached(&self, ty: &Type) -> Option<Rc<ModuleMetadata>> {
        self.cache.borrow().get(ty).cloned()
    }

    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Resolved module types, in the order their resolution completed.
    pub fn resolved_types(&self) -> Vec<Type> {
        self.cache.borrow().keys().cloned().collect()
    }

    /// Drop every cached module, starting a new session.
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Mark `ty` as in progress, failing if it already is.
    fn enter(&self, ty: &Type) -> Result<(), ResolveError> {
        let mut in_progress = self.in_progress.borrow_mut();
        if let Some(start) = in_progress.iter().position(|t| t == ty) {
            let mut path = in_progress[start..].to_vec();
            path.push(ty.clone());
            return Err(ResolveError::CyclicModuleGraph { path });
        }
        in_progress.push(ty.clone());
        Ok(())
    }

    fn resolve_uncached(&self, ty: &Type) -> Result<ModuleMetadata, ResolveError> {
        let annotation = self
            .reader
            .module_annotation(ty)
            .ok_or_else(|| ResolveError::missing_module_annotation(ty))?;

        let mut metadata = ModuleMetadata::new(ty.clone());

        for import in &annotation.imports {
            let imported = match import {
                ModuleImport::Module(module) => module,
                ModuleImport::WithProviders(mwp) => {
                    metadata.providers.extend(mwp.providers.iter().cloned());
                    &mwp.module
                }
            };

            if imported == ty {
                if self.logger.is_enabled(LogLevel::Debug) {
                    self.logger.debug(&format!("{}: skipping self import", ty));
                }
                continue;
            }

            let module_meta = self.resolve_module_ref(imported)?;
            metadata.imported_modules.push(module_meta);
        }

        for exported in &annotation.exports {
            let module_meta = self.resolve_module_ref(exported)?;
            match self.options.export_edges {
                ExportEdges::FoldIntoImports => metadata.imported_modules.push(module_meta),
                ExportEdges::Separate => metadata.exported_modules.push(module_meta),
            }
        }

        for declaration in &annotation.declarations {
            metadata
                .declarations
                .push(self.resolve_declaration(declaration)?);
        }

        metadata.providers.extend(annotation.providers.iter().cloned());

        Ok(metadata)
    }

    /// Resolve a module referenced from another module's imports or exports.
    fn resolve_module_ref(&self, ty: &Type) -> Result<Rc<ModuleMetadata>, ResolveError> {
        if !self.is_supported(ty) {
            return Err(ResolveError::missing_module_annotation(ty));
        }
        self.resolve(ty)
    }
}
