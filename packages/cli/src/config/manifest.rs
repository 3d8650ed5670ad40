use anyhow::{bail, Context};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use zodox_core::{
    Annotation, ModuleAnnotation, ModuleImport, ModuleResolverOptions, ModuleWithProviders,
    Provider, Reflector, Token, Type,
};

/// JSON description of a module graph.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleManifest {
    #[serde(default)]
    pub options: ModuleResolverOptions,
    #[serde(default)]
    pub modules: IndexMap<String, ManifestModule>,
    #[serde(default)]
    pub declarations: IndexMap<String, ManifestDeclaration>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ManifestModule {
    pub imports: Vec<ManifestImport>,
    pub exports: Vec<String>,
    pub declarations: Vec<String>,
    pub providers: Vec<ManifestProvider>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ManifestImport {
    Module(String),
    WithProviders {
        module: String,
        #[serde(default)]
        providers: Vec<ManifestProvider>,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ManifestToken {
    Type(String),
    Name { token: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ManifestProvider {
    Type(String),
    #[serde(rename_all = "camelCase")]
    Class {
        provide: ManifestToken,
        use_class: String,
        #[serde(default)]
        multi: bool,
    },
    #[serde(rename_all = "camelCase")]
    Value {
        provide: ManifestToken,
        use_value: serde_json::Value,
        #[serde(default)]
        multi: bool,
    },
    #[serde(rename_all = "camelCase")]
    Factory {
        provide: ManifestToken,
        use_factory: String,
        #[serde(default)]
        deps: Vec<ManifestToken>,
        #[serde(default)]
        multi: bool,
    },
    #[serde(rename_all = "camelCase")]
    Existing {
        provide: ManifestToken,
        use_existing: ManifestToken,
        #[serde(default)]
        multi: bool,
    },
}

/// A declared non-module type. Every field besides `kind` is kept as the
/// annotation data.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestDeclaration {
    pub kind: String,
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// Annotated types built from a manifest.
#[derive(Debug)]
pub struct ManifestGraph {
    pub reflector: Reflector,
    pub options: ModuleResolverOptions,
    types: IndexMap<String, Type>,
}

impl ManifestGraph {
    /// The type interned for `name`, if the manifest mentions it.
    pub fn type_named(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    /// Every type the manifest mentions, in first-mention order.
    pub fn types(&self) -> impl Iterator<Item = &Type> {
        self.types.values()
    }
}

/// One `Type` per manifest name.
#[derive(Default)]
struct TypeTable {
    types: IndexMap<String, Type>,
}

impl TypeTable {
    fn intern(&mut self, name: &str) -> Type {
        self.types
            .entry(name.to_string())
            .or_insert_with(|| Type::new(name))
            .clone()
    }

    fn token(&mut self, token: &ManifestToken) -> Token {
        match token {
            ManifestToken::Type(name) => Token::Type(self.intern(name)),
            ManifestToken::Name { token } => Token::Name(token.clone()),
        }
    }

    fn provider(&mut self, provider: &ManifestProvider) -> Provider {
        let built = match provider {
            ManifestProvider::Type(name) => return Provider::Type(self.intern(name)),
            ManifestProvider::Class {
                provide,
                use_class,
                multi,
            } => (
                Provider::class(self.token(provide), &self.intern(use_class)),
                *multi,
            ),
            ManifestProvider::Value {
                provide,
                use_value,
                multi,
            } => (Provider::value(self.token(provide), use_value.clone()), *multi),
            ManifestProvider::Factory {
                provide,
                use_factory,
                deps,
                multi,
            } => {
                let deps = deps.iter().map(|d| self.token(d)).collect();
                (
                    Provider::factory(self.token(provide), use_factory.as_str(), deps),
                    *multi,
                )
            }
            ManifestProvider::Existing {
                provide,
                use_existing,
                multi,
            } => (
                Provider::existing(self.token(provide), self.token(use_existing)),
                *multi,
            ),
        };
        match built {
            (provider, true) => provider.multi(),
            (provider, false) => provider,
        }
    }
}

impl ModuleManifest {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse manifest {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let manifest: ModuleManifest = serde_json::from_str(content)?;
        Ok(manifest)
    }

    /// Intern every name and attach the declared annotations.
    ///
    /// Names that are referenced but never declared become plain types
    /// without annotations.
    pub fn build(&self) -> anyhow::Result<ManifestGraph> {
        let mut table = TypeTable::default();
        let mut reflector = Reflector::new();

        for name in self.declarations.keys() {
            if self.modules.contains_key(name) {
                bail!("{} is declared both as a module and as a declaration", name);
            }
        }

        for (name, module) in &self.modules {
            let ty = table.intern(name);
            let mut annotation = ModuleAnnotation::new();

            for import in &module.imports {
                let import = match import {
                    ManifestImport::Module(module) => ModuleImport::Module(table.intern(module)),
                    ManifestImport::WithProviders { module, providers } => {
                        let mut mwp = ModuleWithProviders::new(&table.intern(module));
                        for provider in providers {
                            mwp = mwp.with_provider(table.provider(provider));
                        }
                        ModuleImport::WithProviders(mwp)
                    }
                };
                annotation = annotation.import(import);
            }
            for exported in &module.exports {
                annotation = annotation.export(&table.intern(exported));
            }
            for declaration in &module.declarations {
                annotation = annotation.declare(&table.intern(declaration));
            }
            for provider in &module.providers {
                annotation = annotation.provide(table.provider(provider));
            }

            reflector.annotate(&ty, annotation);
        }

        for (name, declaration) in &self.declarations {
            let ty = table.intern(name);
            reflector.annotate(
                &ty,
                Annotation::other(
                    declaration.kind.as_str(),
                    serde_json::Value::Object(declaration.data.clone()),
                ),
            );
        }

        Ok(ManifestGraph {
            reflector,
            options: self.options.clone(),
            types: table.types,
        })
    }
}
