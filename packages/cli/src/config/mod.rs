pub mod manifest;

pub use manifest::{
    ManifestDeclaration, ManifestGraph, ManifestImport, ManifestModule, ManifestProvider,
    ManifestToken, ModuleManifest,
};
