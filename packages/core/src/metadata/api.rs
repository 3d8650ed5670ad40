//! Metadata API
//!
//! Records produced by the module resolver.

use super::providers::Provider;
use crate::reflection::Type;
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Metadata of a resolved declaration. The concrete shape belongs to the
/// declaration resolver that produced it.
pub trait TypeMetadata: Any + fmt::Debug {
    /// The declared type this metadata describes.
    fn ty(&self) -> &Type;

    fn as_any(&self) -> &dyn Any;
}

impl dyn TypeMetadata {
    /// Downcast to the concrete metadata type produced by a resolver.
    pub fn downcast_ref<T: TypeMetadata>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Shared handle to resolved declaration metadata.
pub type DeclarationMetadata = Rc<dyn TypeMetadata>;

/// Fully resolved metadata of one module type.
///
/// Instances are shared: every edge pointing at a module holds the same
/// `Rc`, so `Rc::ptr_eq` tells whether two edges reach the same module.
pub struct ModuleMetadata {
    /// The module type, also the cache key.
    pub ty: Type,
    /// Import-site providers first, then the module's own providers.
    pub providers: Vec<Provider>,
    pub declarations: Vec<DeclarationMetadata>,
    /// Metadata of imported modules. Exported modules are appended here as
    /// well unless exports are kept separate.
    pub imported_modules: Vec<Rc<ModuleMetadata>>,
    pub exported_modules: Vec<Rc<ModuleMetadata>>,
}

impl ModuleMetadata {
    pub fn new(ty: Type) -> Self {
        Self {
            ty,
            providers: Vec::new(),
            declarations: Vec::new(),
            imported_modules: Vec::new(),
            exported_modules: Vec::new(),
        }
    }

    pub fn imported_types(&self) -> Vec<&Type> {
        self.imported_modules.iter().map(|m| &m.ty).collect()
    }

    pub fn exported_types(&self) -> Vec<&Type> {
        self.exported_modules.iter().map(|m| &m.ty).collect()
    }

    pub fn declared_types(&self) -> Vec<&Type> {
        self.declarations.iter().map(|d| d.ty()).collect()
    }
}

// Edges are printed by type only; the graph may share nodes.
impl fmt::Debug for ModuleMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleMetadata")
            .field("ty", &self.ty)
            .field("providers", &self.providers)
            .field("declarations", &self.declared_types())
            .field("imported_modules", &self.imported_types())
            .field("exported_modules", &self.exported_types())
            .finish()
    }
}
