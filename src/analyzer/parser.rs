use pyprune_core::{PruneError, PruneResult};
use tree_sitter::{Node, Parser};

/// Python parser for static import analysis
pub struct PythonParser;

impl PythonParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse Python source and return the top-level package of every import.
    ///
    /// `import a.b.c` and `from a.b import c` both yield `a`. Imports nested
    /// in functions, classes and control flow are included. `from . import x`
    /// yields nothing.
    pub fn extract_imports(&self, content: &str, source_path: &str) -> PruneResult<Vec<String>> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| PruneError::Parse(format!("Failed to load Python grammar: {}", e)))?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| PruneError::Parse(format!("{}: parser gave no result", source_path)))?;

        let root = tree.root_node();
        if root.has_error() {
            let line = first_error(root)
                .map(|n| n.start_position().row + 1)
                .unwrap_or(1);
            return Err(PruneError::Parse(format!(
                "{}: invalid syntax at line {}",
                source_path, line
            )));
        }

        let source = content.as_bytes();
        let mut imports = Vec::new();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            match node.kind() {
                "import_statement" => {
                    let mut cursor = node.walk();
                    for name in node.children_by_field_name("name", &mut cursor) {
                        let dotted = if name.kind() == "aliased_import" {
                            name.child_by_field_name("name")
                        } else {
                            Some(name)
                        };
                        imports.extend(dotted.and_then(|d| base_module(d, source)));
                    }
                }
                "import_from_statement" => {
                    // `from .pkg import x` names `pkg`; `from . import x` names nothing
                    let dotted = node.child_by_field_name("module_name").and_then(|m| {
                        if m.kind() == "relative_import" {
                            let mut cursor = m.walk();
                            let found = m
                                .named_children(&mut cursor)
                                .find(|c| c.kind() == "dotted_name");
                            found
                        } else {
                            Some(m)
                        }
                    });
                    imports.extend(dotted.and_then(|d| base_module(d, source)));
                }
                "future_import_statement" => imports.push("__future__".to_string()),
                _ => {
                    let mut cursor = node.walk();
                    let children: Vec<Node> = node.named_children(&mut cursor).collect();
                    // reversed so the stack yields children in source order
                    stack.extend(children.into_iter().rev());
                }
            }
        }

        Ok(imports)
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

fn base_module(dotted: Node, source: &[u8]) -> Option<String> {
    dotted
        .utf8_text(source)
        .ok()?
        .split('.')
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|c| c.has_error())
        .find_map(first_error)
}
