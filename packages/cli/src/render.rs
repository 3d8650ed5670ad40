// Graph Rendering
//
// Text and JSON renderings of a resolved module graph.

use crate::declarations::AnnotatedDeclaration;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Write;
use std::rc::Rc;
use zodox_core::{DeclarationMetadata, ModuleMetadata, Provider, Type};

/// Render the graph as an indented tree. Each module is expanded once;
/// later edges to it are marked `(shared)`.
pub fn render_tree(root: &Rc<ModuleMetadata>) -> String {
    let mut out = String::new();
    let mut seen = HashSet::new();
    write_module(&mut out, "module", root, 0, &mut seen);
    out
}

fn write_module(
    out: &mut String,
    edge: &str,
    meta: &Rc<ModuleMetadata>,
    depth: usize,
    seen: &mut HashSet<Type>,
) {
    let indent = "  ".repeat(depth);
    if !seen.insert(meta.ty.clone()) {
        let _ = writeln!(out, "{}{} {} (shared)", indent, edge, meta.ty);
        return;
    }
    let _ = writeln!(out, "{}{} {}", indent, edge, meta.ty);

    let inner = "  ".repeat(depth + 1);
    for provider in &meta.providers {
        let _ = writeln!(out, "{}provider {}", inner, provider);
    }
    for declaration in &meta.declarations {
        match declaration_kind(declaration) {
            Some(kind) => {
                let _ = writeln!(out, "{}declaration {} ({})", inner, declaration.ty(), kind);
            }
            None => {
                let _ = writeln!(out, "{}declaration {}", inner, declaration.ty());
            }
        }
    }
    for imported in &meta.imported_modules {
        write_module(out, "import", imported, depth + 1, seen);
    }
    for exported in &meta.exported_modules {
        write_module(out, "export", exported, depth + 1, seen);
    }
}

fn declaration_kind(declaration: &DeclarationMetadata) -> Option<&str> {
    declaration
        .downcast_ref::<AnnotatedDeclaration>()
        .map(|d| d.kind.as_str())
}

/// Flat JSON view of a resolved graph.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphView {
    pub root: String,
    pub modules: IndexMap<String, ModuleView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleView {
    pub providers: Vec<Provider>,
    pub declarations: Vec<DeclarationView>,
    pub imported_modules: Vec<String>,
    pub exported_modules: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DeclarationView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Collect every module reachable from `root`, in depth-first pre-order.
pub fn graph_view(root: &Rc<ModuleMetadata>) -> GraphView {
    let mut modules = IndexMap::new();
    let mut seen = HashSet::new();
    let mut stack = vec![Rc::clone(root)];

    while let Some(meta) = stack.pop() {
        if !seen.insert(meta.ty.clone()) {
            continue;
        }
        modules.insert(
            meta.ty.name().to_string(),
            ModuleView {
                providers: meta.providers.clone(),
                declarations: meta
                    .declarations
                    .iter()
                    .map(|d| DeclarationView {
                        name: d.ty().name().to_string(),
                        kind: declaration_kind(d).map(str::to_string),
                    })
                    .collect(),
                imported_modules: edge_names(&meta.imported_modules),
                exported_modules: edge_names(&meta.exported_modules),
            },
        );
        for child in meta
            .exported_modules
            .iter()
            .rev()
            .chain(meta.imported_modules.iter().rev())
        {
            stack.push(Rc::clone(child));
        }
    }

    GraphView {
        root: root.ty.name().to_string(),
        modules,
    }
}

fn edge_names(edges: &[Rc<ModuleMetadata>]) -> Vec<String> {
    edges.iter().map(|m| m.ty.name().to_string()).collect()
}

pub fn render_json(root: &Rc<ModuleMetadata>) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&graph_view(root))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModuleManifest;
    use serde_json::json;
    use zodox_core::{AnnotationReader, Token};

    fn module(name: &str) -> ModuleMetadata {
        ModuleMetadata::new(Type::new(name))
    }

    fn sample() -> Rc<ModuleMetadata> {
        let shared = Rc::new(module("Shared"));

        let mut leaf = module("Leaf");
        leaf.providers.push(Provider::value("p2", json!(2)));
        leaf.declarations.push(Rc::new(AnnotatedDeclaration {
            ty: Type::new("D"),
            kind: "component".to_string(),
            data: json!({}),
        }));
        leaf.imported_modules.push(Rc::clone(&shared));
        let leaf = Rc::new(leaf);

        let mut root = module("Root");
        root.providers.push(Provider::value("p1", json!(1)));
        root.imported_modules.push(Rc::clone(&shared));
        root.imported_modules.push(leaf);
        Rc::new(root)
    }

    #[test]
    fn should_render_tree_with_shared_nodes() {
        let expected = "\
module Root
  provider \"p1\" => value 1
  import Shared
  import Leaf
    provider \"p2\" => value 2
    declaration D (component)
    import Shared (shared)
";
        assert_eq!(render_tree(&sample()), expected);
    }

    #[test]
    fn should_render_separate_exports() {
        let z = Rc::new(module("Z"));
        let mut root = module("Root");
        root.exported_modules.push(z);

        assert_eq!(render_tree(&Rc::new(root)), "module Root\n  export Z\n");
    }

    #[test]
    fn should_collect_modules_in_preorder() {
        let view = graph_view(&sample());

        assert_eq!(view.root, "Root");
        assert_eq!(
            view.modules.keys().collect::<Vec<_>>(),
            vec!["Root", "Shared", "Leaf"]
        );
        assert_eq!(view.modules["Root"].imported_modules, vec!["Shared", "Leaf"]);
        assert_eq!(view.modules["Leaf"].declarations[0].kind.as_deref(), Some("component"));
    }

    #[test]
    fn should_render_json() {
        let rendered: serde_json::Value =
            serde_json::from_str(&render_json(&sample()).unwrap()).unwrap();

        assert_eq!(
            rendered["modules"]["Leaf"],
            json!({
                "providers": [{"provide": {"token": "p2"}, "useValue": 2}],
                "declarations": [{"name": "D", "kind": "component"}],
                "importedModules": ["Shared"],
                "exportedModules": []
            })
        );
        assert_eq!(rendered["root"], "Root");
    }

    #[test]
    fn should_render_providers_the_manifest_loader_reads_back() {
        let http = Type::new("Http");
        let mut root = module("Root");
        root.providers.push(Provider::value("Http", json!(1)));
        root.providers.push(Provider::class(&http, &Type::new("FetchHttp")));
        root.providers.push(Provider::existing("ALIAS", &http).multi());

        let rendered: serde_json::Value =
            serde_json::from_str(&render_json(&Rc::new(root)).unwrap()).unwrap();
        let manifest = json!({
            "modules": {"Root": {"providers": rendered["modules"]["Root"]["providers"]}}
        });
        let graph = ModuleManifest::from_json(&manifest.to_string())
            .unwrap()
            .build()
            .unwrap();
        let annotation = graph
            .reflector
            .module_annotation(graph.type_named("Root").unwrap())
            .unwrap();
        let http = graph.type_named("Http").unwrap();

        assert_eq!(
            annotation.providers,
            vec![
                Provider::value("Http", json!(1)),
                Provider::class(http, graph.type_named("FetchHttp").unwrap()),
                Provider::existing("ALIAS", http).multi(),
            ]
        );
        assert_eq!(annotation.providers[0].token(), Token::Name("Http".to_string()));
        assert_eq!(annotation.providers[1].token(), Token::Type(http.clone()));
    }
}
