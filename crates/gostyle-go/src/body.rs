//! Facts gathered from a function body.

use gostyle_core::FunctionBody;
use tree_sitter::Node;

use crate::parser::text;

/// Composite literal types that make a value look like a test table.
const TABLE_LITERAL_TYPES: &[&str] = &[
    "slice_type",
    "array_type",
    "implicit_length_array_type",
    "struct_type",
    "type_identifier",
    "qualified_type",
];

/// Walks a function body block and records qualified calls, table values and
/// range loops anywhere inside it, including nested closures.
pub(crate) fn body_facts(block: &Node<'_>, src: &[u8]) -> FunctionBody {
    let mut body = FunctionBody::new();
    let mut stack = vec![*block];

    while let Some(node) = stack.pop() {
        match node.kind() {
            "call_expression" => {
                if let Some((qualifier, selector)) = qualified_call(&node, src) {
                    body.record_call(qualifier, selector);
                }
            }
            "var_spec" => {
                let typed_table = node
                    .child_by_field_name("type")
                    .is_some_and(|t| is_sequence_type(&t));
                if typed_table || builds_table(node.child_by_field_name("value")) {
                    body.mark_table_value();
                }
            }
            "short_var_declaration" | "assignment_statement" => {
                if builds_table(node.child_by_field_name("right")) {
                    body.mark_table_value();
                }
            }
            "for_statement" => {
                let mut cursor = node.walk();
                if node
                    .named_children(&mut cursor)
                    .any(|c| c.kind() == "range_clause")
                {
                    body.mark_range_loop();
                }
            }
            _ => {}
        }

        let mut cursor = node.walk();
        let children: Vec<_> = node.named_children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }

    body
}

/// `pkg.Fn(...)` or `t.Helper()`: an identifier operand with a field selector.
fn qualified_call<'a>(call: &Node<'_>, src: &'a [u8]) -> Option<(&'a str, &'a str)> {
    let function = call.child_by_field_name("function")?;
    if function.kind() != "selector_expression" {
        return None;
    }
    let operand = function.child_by_field_name("operand")?;
    if operand.kind() != "identifier" {
        return None;
    }
    let field = function.child_by_field_name("field")?;
    Some((text(&operand, src), text(&field, src)))
}

fn is_sequence_type(node: &Node<'_>) -> bool {
    matches!(
        node.kind(),
        "slice_type" | "array_type" | "implicit_length_array_type"
    )
}

/// Whether an expression list directly contains a table-shaped composite literal.
fn builds_table(list: Option<Node<'_>>) -> bool {
    let Some(list) = list else {
        return false;
    };
    let mut cursor = list.walk();
    let found = list.named_children(&mut cursor).any(|expr| {
        expr.kind() == "composite_literal"
            && expr
                .child_by_field_name("type")
                .is_some_and(|t| TABLE_LITERAL_TYPES.contains(&t.kind()))
    });
    found
}
