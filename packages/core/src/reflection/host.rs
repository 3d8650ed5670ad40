// Reflection Host API
//
// Types describing host-declared types and the annotations attached to them.

use crate::metadata::{ModuleWithProviders, Provider};
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Handle to a host-declared type.
///
/// Equality and hashing follow identity: two handles are equal only when they
/// were cloned from the same [`Type::new`] call, regardless of their names.
#[derive(Clone)]
pub struct Type(Rc<TypeInner>);

struct TypeInner {
    name: String,
}

impl Type {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Rc::new(TypeInner { name: name.into() }))
    }

    /// Name by which the type was declared.
    pub fn name(&self) -> &str {
        &self.0.name
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({})", self.name())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Kind of an annotation attached to a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    Module,
    /// Host-defined kind, such as a component or pipe marker.
    Other(String),
}

impl AnnotationKind {
    pub fn other(name: impl Into<String>) -> Self {
        AnnotationKind::Other(name.into())
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationKind::Module => f.write_str("Module"),
            AnnotationKind::Other(name) => f.write_str(name),
        }
    }
}

/// An annotation instance attached to a type.
#[derive(Debug, Clone)]
pub enum Annotation {
    Module(ModuleAnnotation),
    /// Annotation owned by a declaration resolver. The data is opaque here.
    Other {
        kind: String,
        data: serde_json::Value,
    },
}

impl Annotation {
    pub fn other(kind: impl Into<String>, data: serde_json::Value) -> Self {
        Annotation::Other {
            kind: kind.into(),
            data,
        }
    }

    pub fn kind(&self) -> AnnotationKind {
        match self {
            Annotation::Module(_) => AnnotationKind::Module,
            Annotation::Other { kind, .. } => AnnotationKind::Other(kind.clone()),
        }
    }

    pub fn is_kind(&self, kind: &AnnotationKind) -> bool {
        match (self, kind) {
            (Annotation::Module(_), AnnotationKind::Module) => true,
            (Annotation::Other { kind: own, .. }, AnnotationKind::Other(expected)) => {
                own == expected
            }
            _ => false,
        }
    }
}

impl From<ModuleAnnotation> for Annotation {
    fn from(annotation: ModuleAnnotation) -> Self {
        Annotation::Module(annotation)
    }
}

/// One entry of a module's `imports` list.
#[derive(Debug, Clone)]
pub enum ModuleImport {
    /// A module type imported directly.
    Module(Type),
    /// A module paired with providers contributed at the import site.
    WithProviders(ModuleWithProviders),
}

impl ModuleImport {
    /// The module type this import refers to.
    pub fn module(&self) -> &Type {
        match self {
            ModuleImport::Module(ty) => ty,
            ModuleImport::WithProviders(mwp) => &mwp.module,
        }
    }
}

impl From<Type> for ModuleImport {
    fn from(ty: Type) -> Self {
        ModuleImport::Module(ty)
    }
}

impl From<&Type> for ModuleImport {
    fn from(ty: &Type) -> Self {
        ModuleImport::Module(ty.clone())
    }
}

impl From<ModuleWithProviders> for ModuleImport {
    fn from(mwp: ModuleWithProviders) -> Self {
        ModuleImport::WithProviders(mwp)
    }
}

/// Data of the `Module` annotation. Absent fields are empty.
#[derive(Debug, Clone, Default)]
pub struct ModuleAnnotation {
    pub imports: Vec<ModuleImport>,
    pub exports: Vec<Type>,
    pub declarations: Vec<Type>,
    pub providers: Vec<Provider>,
}

impl ModuleAnnotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: impl Into<ModuleImport>) -> Self {
        self.imports.push(import.into());
        self
    }

    pub fn export(mut self, module: &Type) -> Self {
        self.exports.push(module.clone());
        self
    }

    pub fn declare(mut self, declaration: &Type) -> Self {
        self.declarations.push(declaration.clone());
        self
    }

    pub fn provide(mut self, provider: impl Into<Provider>) -> Self {
        self.providers.push(provider.into());
        self
    }
}

/// Reads annotations attached to types.
pub trait AnnotationReader {
    /// All annotations attached to `ty`, in registration order.
    fn annotations(&self, ty: &Type) -> &[Annotation];

    /// First annotation of the given kind on `ty`.
    fn get_annotation(&self, ty: &Type, kind: &AnnotationKind) -> Option<&Annotation> {
        self.annotations(ty).iter().find(|a| a.is_kind(kind))
    }

    fn has_annotation(&self, ty: &Type, kind: &AnnotationKind) -> bool {
        self.get_annotation(ty, kind).is_some()
    }

    fn module_annotation(&self, ty: &Type) -> Option<&ModuleAnnotation> {
        match self.get_annotation(ty, &AnnotationKind::Module) {
            Some(Annotation::Module(annotation)) => Some(annotation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    mod type_tests {
        use super::*;

        #[test]
        fn should_compare_by_identity() {
            let a = Type::new("AppModule");
            let same = a.clone();
            let other = Type::new("AppModule");

            assert_eq!(a, same);
            assert_ne!(a, other);
        }

        #[test]
        fn should_hash_by_identity() {
            let a = Type::new("AppModule");
            let b = Type::new("AppModule");

            let mut set = HashSet::new();
            set.insert(a.clone());
            set.insert(a.clone());
            set.insert(b);

            assert_eq!(set.len(), 2);
        }

        #[test]
        fn should_display_name() {
            let ty = Type::new("SharedModule");
            assert_eq!(ty.to_string(), "SharedModule");
            assert_eq!(format!("{:?}", ty), "Type(SharedModule)");
        }
    }

    mod annotation_tests {
        use super::*;

        #[test]
        fn should_match_kinds() {
            let module = Annotation::from(ModuleAnnotation::new());
            let component = Annotation::other("component", serde_json::Value::Null);

            assert!(module.is_kind(&AnnotationKind::Module));
            assert!(!module.is_kind(&AnnotationKind::other("component")));
            assert!(component.is_kind(&AnnotationKind::other("component")));
            assert!(!component.is_kind(&AnnotationKind::other("pipe")));
            assert_eq!(component.kind(), AnnotationKind::other("component"));
        }

        #[test]
        fn should_display_module_kind() {
            assert_eq!(AnnotationKind::Module.to_string(), "Module");
            assert_eq!(AnnotationKind::other("pipe").to_string(), "pipe");
        }

        #[test]
        fn should_build_module_annotation_in_order() {
            let a = Type::new("A");
            let b = Type::new("B");
            let d = Type::new("D");

            let annotation = ModuleAnnotation::new()
                .import(&a)
                .import(ModuleWithProviders::new(&b))
                .export(&a)
                .declare(&d);

            assert_eq!(annotation.imports.len(), 2);
            assert_eq!(annotation.imports[0].module(), &a);
            assert_eq!(annotation.imports[1].module(), &b);
            assert!(matches!(annotation.imports[1], ModuleImport::WithProviders(_)));
            assert_eq!(annotation.exports, vec![a]);
            assert_eq!(annotation.declarations, vec![d]);
            assert!(annotation.providers.is_empty());
        }
    }
}
