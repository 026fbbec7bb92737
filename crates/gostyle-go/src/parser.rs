//! Go structural parser using Tree-sitter.

use gostyle_core::{
    Declaration, FileStructure, FunctionDecl, ParamDecl, ParseFailure, StructuralParser, TypeDecl,
    TypeExpr, VarKind, VariableDecl,
};
use tracing::debug;
use tree_sitter::{Language, Node, Parser};

use crate::body::body_facts;
use crate::comments::doc_text;
use crate::types::type_expr;

/// Extracts top-level functions, types and package-level values from Go source.
pub struct GoParser {
    language: Language,
}

impl GoParser {
    /// Creates a new Go parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_go::LANGUAGE.into(),
        }
    }

    fn extract_function(node: &Node<'_>, src: &[u8]) -> Option<FunctionDecl> {
        let name = node.child_by_field_name("name")?;

        let mut decl = FunctionDecl::new(text(&name, src), node.start_position().row + 1);
        decl.has_receiver = node.kind() == "method_declaration";
        decl.doc = doc_text(node, src);

        if let Some(params) = node.child_by_field_name("parameters") {
            decl.params = Self::extract_params(&params, src);
        }
        if let Some(block) = node.child_by_field_name("body") {
            decl.body = Some(body_facts(&block, src));
        }

        Some(decl)
    }

    fn extract_params(list: &Node<'_>, src: &[u8]) -> Vec<ParamDecl> {
        let mut params = Vec::new();
        let mut cursor = list.walk();
        for child in list.named_children(&mut cursor) {
            let Some(ty_node) = child.child_by_field_name("type") else {
                continue;
            };
            let name = child
                .child_by_field_name("name")
                .map(|n| text(&n, src).to_owned());

            let ty = match child.kind() {
                "parameter_declaration" => type_expr(&ty_node, src),
                "variadic_parameter_declaration" => {
                    TypeExpr::Other(format!("...{}", type_expr(&ty_node, src)))
                }
                _ => continue,
            };

            params.push(ParamDecl { name, ty });
        }
        params
    }

    fn extract_types(node: &Node<'_>, src: &[u8], out: &mut Vec<Declaration>) {
        let mut cursor = node.walk();
        for spec in node.named_children(&mut cursor) {
            if !matches!(spec.kind(), "type_spec" | "type_alias") {
                continue;
            }
            if let Some(name) = spec.child_by_field_name("name") {
                out.push(Declaration::Type(TypeDecl::new(
                    text(&name, src),
                    name.start_position().row + 1,
                )));
            }
        }
    }

    fn extract_values(node: &Node<'_>, src: &[u8], kind: VarKind, out: &mut Vec<Declaration>) {
        let spec_kind = match kind {
            VarKind::Var => "var_spec",
            VarKind::Const => "const_spec",
        };

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == spec_kind {
                Self::extract_value_spec(&child, src, kind, out);
            } else if child.kind() == "var_spec_list" {
                // Grouped `var ( ... )` declarations.
                let mut inner = child.walk();
                for spec in child.named_children(&mut inner) {
                    if spec.kind() == spec_kind {
                        Self::extract_value_spec(&spec, src, kind, out);
                    }
                }
            }
        }
    }

    fn extract_value_spec(spec: &Node<'_>, src: &[u8], kind: VarKind, out: &mut Vec<Declaration>) {
        let ty = spec
            .child_by_field_name("type")
            .map(|t| type_expr(&t, src));

        let mut cursor = spec.walk();
        for name in spec.children_by_field_name("name", &mut cursor) {
            out.push(Declaration::Variable(VariableDecl {
                name: text(&name, src).to_owned(),
                line: name.start_position().row + 1,
                ty: ty.clone(),
                kind,
            }));
        }
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuralParser for GoParser {
    fn language_id(&self) -> &'static str {
        "go"
    }

    fn parse(&self, source: &str) -> Result<FileStructure, ParseFailure> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseFailure::new(format!("failed to load go grammar: {e}")))?;

        let src = source.as_bytes();
        let tree = parser
            .parse(src, None)
            .ok_or_else(|| ParseFailure::new("parser returned no tree"))?;
        let root = tree.root_node();

        if root.has_error() {
            let line = first_error_line(&root);
            debug!(?line, "go source has syntax errors");
            let failure = ParseFailure::new("syntax error");
            return Err(match line {
                Some(line) => failure.at_line(line),
                None => failure,
            });
        }

        let mut declarations = Vec::new();
        let mut has_package = false;

        let mut cursor = root.walk();
        for node in root.named_children(&mut cursor) {
            match node.kind() {
                "package_clause" => has_package = true,
                "function_declaration" | "method_declaration" => {
                    if let Some(decl) = Self::extract_function(&node, src) {
                        declarations.push(Declaration::Function(decl));
                    }
                }
                "type_declaration" => Self::extract_types(&node, src, &mut declarations),
                "var_declaration" => {
                    Self::extract_values(&node, src, VarKind::Var, &mut declarations);
                }
                "const_declaration" => {
                    Self::extract_values(&node, src, VarKind::Const, &mut declarations);
                }
                _ => {}
            }
        }

        // The Go toolchain rejects files without a package clause.
        if !has_package {
            return Err(ParseFailure::new("expected 'package'").at_line(1));
        }

        Ok(FileStructure::new(declarations))
    }
}

pub(crate) fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or("")
}

/// Line (1-indexed) of the first `ERROR` or `MISSING` node, depth-first.
fn first_error_line(node: &Node<'_>) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            if let Some(line) = first_error_line(&child) {
                return Some(line);
            }
        }
    }
    None
}
