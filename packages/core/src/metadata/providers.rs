// Providers
//
// Provider entries carried through module resolution. They are not
// interpreted here, only kept in declaration order.

use crate::reflection::Type;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Injection token a provider is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Type(Type),
    Name(String),
}

impl From<Type> for Token {
    fn from(ty: Type) -> Self {
        Token::Type(ty)
    }
}

impl From<&Type> for Token {
    fn from(ty: &Type) -> Self {
        Token::Type(ty.clone())
    }
}

impl From<&str> for Token {
    fn from(name: &str) -> Self {
        Token::Name(name.to_string())
    }
}

// Type tokens serialize as the bare type name, name tokens as
// `{"token": name}`, the same shapes the manifest loader reads.
impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Token::Type(ty) => ty.serialize(serializer),
            Token::Name(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("token", name)?;
                map.end()
            }
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Type(ty) => write!(f, "{}", ty),
            Token::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A provider entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Provider {
    /// A type provided under its own token.
    Type(Type),
    #[serde(rename_all = "camelCase")]
    Class {
        provide: Token,
        use_class: Type,
        #[serde(skip_serializing_if = "is_false")]
        multi: bool,
    },
    #[serde(rename_all = "camelCase")]
    Value {
        provide: Token,
        use_value: serde_json::Value,
        #[serde(skip_serializing_if = "is_false")]
        multi: bool,
    },
    #[serde(rename_all = "camelCase")]
    Factory {
        provide: Token,
        use_factory: String,
        deps: Vec<Token>,
        #[serde(skip_serializing_if = "is_false")]
        multi: bool,
    },
    #[serde(rename_all = "camelCase")]
    Existing {
        provide: Token,
        use_existing: Token,
        #[serde(skip_serializing_if = "is_false")]
        multi: bool,
    },
}

impl Provider {
    pub fn class(provide: impl Into<Token>, use_class: &Type) -> Self {
        Provider::Class {
            provide: provide.into(),
            use_class: use_class.clone(),
            multi: false,
        }
    }

    pub fn value(provide: impl Into<Token>, use_value: serde_json::Value) -> Self {
        Provider::Value {
            provide: provide.into(),
            use_value,
            multi: false,
        }
    }

    pub fn factory(
        provide: impl Into<Token>,
        use_factory: impl Into<String>,
        deps: Vec<Token>,
    ) -> Self {
        Provider::Factory {
            provide: provide.into(),
            use_factory: use_factory.into(),
            deps,
            multi: false,
        }
    }

    pub fn existing(provide: impl Into<Token>, use_existing: impl Into<Token>) -> Self {
        Provider::Existing {
            provide: provide.into(),
            use_existing: use_existing.into(),
            multi: false,
        }
    }

    /// Mark the provider as a multi provider. No effect on type providers.
    pub fn multi(mut self) -> Self {
        match &mut self {
            Provider::Type(_) => {}
            Provider::Class { multi, .. }
            | Provider::Value { multi, .. }
            | Provider::Factory { multi, .. }
            | Provider::Existing { multi, .. } => *multi = true,
        }
        self
    }

    /// Token under which this provider registers.
    pub fn token(&self) -> Token {
        match self {
            Provider::Type(ty) => Token::Type(ty.clone()),
            Provider::Class { provide, .. }
            | Provider::Value { provide, .. }
            | Provider::Factory { provide, .. }
            | Provider::Existing { provide, .. } => provide.clone(),
        }
    }

    pub fn is_multi(&self) -> bool {
        match self {
            Provider::Type(_) => false,
            Provider::Class { multi, .. }
            | Provider::Value { multi, .. }
            | Provider::Factory { multi, .. }
            | Provider::Existing { multi, .. } => *multi,
        }
    }
}

impl From<Type> for Provider {
    fn from(ty: Type) -> Self {
        Provider::Type(ty)
    }
}

impl From<&Type> for Provider {
    fn from(ty: &Type) -> Self {
        Provider::Type(ty.clone())
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Type(ty) => write!(f, "{}", ty)?,
            Provider::Class {
                provide, use_class, ..
            } => write!(f, "{} => class {}", provide, use_class)?,
            Provider::Value {
                provide, use_value, ..
            } => write!(f, "{} => value {}", provide, use_value)?,
            Provider::Factory {
                provide,
                use_factory,
                deps,
                ..
            } => {
                let deps: Vec<String> = deps.iter().map(|d| d.to_string()).collect();
                write!(f, "{} => factory {}({})", provide, use_factory, deps.join(", "))?
            }
            Provider::Existing {
                provide,
                use_existing,
                ..
            } => write!(f, "{} => existing {}", provide, use_existing)?,
        }
        if self.is_multi() {
            f.write_str(" (multi)")?;
        }
        Ok(())
    }
}

/// A module import paired with providers contributed at the import site.
#[derive(Debug, Clone)]
pub struct ModuleWithProviders {
    pub module: Type,
    pub providers: Vec<Provider>,
}

impl ModuleWithProviders {
    pub fn new(module: &Type) -> Self {
        Self {
            module: module.clone(),
            providers: Vec::new(),
        }
    }

    pub fn with_provider(mut self, provider: impl Into<Provider>) -> Self {
        self.providers.push(provider.into());
        self
    }
}
