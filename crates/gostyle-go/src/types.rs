//! Conversion of Go type nodes into [`TypeExpr`].

use gostyle_core::TypeExpr;
use tree_sitter::Node;

use crate::parser::text;

/// Converts a Tree-sitter type node into the simplified type expression.
pub(crate) fn type_expr(node: &Node<'_>, src: &[u8]) -> TypeExpr {
    match node.kind() {
        "type_identifier" => TypeExpr::Named(text(node, src).to_owned()),
        "qualified_type" => {
            let package = node.child_by_field_name("package");
            let name = node.child_by_field_name("name");
            match (package, name) {
                (Some(p), Some(n)) => TypeExpr::qualified(text(&p, src), text(&n, src)),
                _ => TypeExpr::Other(text(node, src).to_owned()),
            }
        }
        "pointer_type" => match node.named_child(0) {
            Some(inner) => TypeExpr::pointer(type_expr(&inner, src)),
            None => TypeExpr::Other(text(node, src).to_owned()),
        },
        "parenthesized_type" => match node.named_child(0) {
            Some(inner) => type_expr(&inner, src),
            None => TypeExpr::Other(text(node, src).to_owned()),
        },
        "struct_type" => TypeExpr::Struct,
        "slice_type" => element(node, src).map_or_else(
            || TypeExpr::Other(text(node, src).to_owned()),
            |e| TypeExpr::Slice(Box::new(e)),
        ),
        "array_type" | "implicit_length_array_type" => element(node, src).map_or_else(
            || TypeExpr::Other(text(node, src).to_owned()),
            |e| TypeExpr::Array(Box::new(e)),
        ),
        _ => TypeExpr::Other(text(node, src).to_owned()),
    }
}

fn element(node: &Node<'_>, src: &[u8]) -> Option<TypeExpr> {
    node.child_by_field_name("element")
        .map(|e| type_expr(&e, src))
}

#[cfg(test)]
mod tests {
    use gostyle_core::{FileStructure, StructuralParser};

    use super::*;
    use crate::GoParser;

    fn var_type(decl: &str) -> Option<TypeExpr> {
        let src = format!("package a\n\nimport \"net\"\n\n{decl}\n");
        let s: FileStructure = GoParser::new().parse(&src).expect("parse");
        let ty = s.variables().next().and_then(|v| v.ty.clone());
        ty
    }

    #[test]
    fn named_and_qualified() {
        assert_eq!(var_type("var a string"), Some(TypeExpr::Named("string".into())));
        assert_eq!(
            var_type("var a net.IP"),
            Some(TypeExpr::qualified("net", "IP"))
        );
    }

    #[test]
    fn pointers_and_sequences() {
        assert_eq!(
            var_type("var a *net.IP"),
            Some(TypeExpr::pointer(TypeExpr::qualified("net", "IP")))
        );
        assert_eq!(
            var_type("var a []string"),
            Some(TypeExpr::Slice(Box::new(TypeExpr::Named("string".into()))))
        );
        assert_eq!(
            var_type("var a [3]int"),
            Some(TypeExpr::Array(Box::new(TypeExpr::Named("int".into()))))
        );
    }

    #[test]
    fn struct_and_other() {
        assert_eq!(var_type("var a struct{ N int }"), Some(TypeExpr::Struct));
        assert_eq!(
            var_type("var a map[string]int"),
            Some(TypeExpr::Other("map[string]int".into()))
        );
    }
}
