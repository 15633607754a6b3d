//! Structural analysis of expression trees

use indexmap::IndexSet;

use crate::node::Node;

/// Collect the distinct symbol names `node` mentions.
///
/// Only the tree passed in is inspected: symbol references are never looked
/// up or followed, so this terminates and succeeds even for names that no
/// table binds, or that a table binds cyclically. Compare the result as a
/// set; iteration order is first mention in a left-to-right walk but is not
/// part of the contract.
///
/// # Example
///
/// ```
/// use symtree::{referenced_symbols, Node};
///
/// let node: Node = Node::sum([Node::symbol("x"), Node::abs(Node::symbol("y")), Node::symbol("x")]);
/// let names = referenced_symbols(&node);
///
/// assert_eq!(names.len(), 2);
/// assert!(names.contains("x") && names.contains("y"));
/// ```
pub fn referenced_symbols<N>(node: &Node<N>) -> IndexSet<String> {
    let mut names = IndexSet::new();
    collect_symbols(node, &mut names);
    names
}

fn collect_symbols<N>(node: &Node<N>, names: &mut IndexSet<String>) {
    match node {
        Node::Literal(_) => {}
        Node::Symbol(name) => {
            names.insert(name.clone());
        }
        Node::Expression(expr) => collect_symbols(expr.root(), names),
        Node::NAry(op) => {
            for operand in &op.operands {
                collect_symbols(operand, names);
            }
        }
        Node::Binary(op) => {
            collect_symbols(&op.left, names);
            collect_symbols(&op.right, names);
        }
        Node::Unary(op) => collect_symbols(&op.operand, names),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_has_no_symbols() {
        assert!(referenced_symbols(&Node::literal(1.0)).is_empty());
        assert!(referenced_symbols::<f64>(&Node::sum([])).is_empty());
    }

    #[test]
    fn test_symbol_contributes_its_name() {
        let names = referenced_symbols::<f64>(&Node::symbol("x"));
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["x".to_string()]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let node: Node<i64> = Node::product([
            Node::symbol("a"),
            Node::difference(Node::symbol("a"), Node::symbol("b")),
            Node::abs(Node::symbol("b")),
        ]);
        let names = referenced_symbols(&node);
        assert_eq!(names.len(), 2);
        assert!(names.contains("a"));
        assert!(names.contains("b"));
    }

    #[test]
    fn test_first_mention_order() {
        let node: Node = Node::division(
            Node::sum([Node::symbol("z"), Node::symbol("a")]),
            Node::expression(Node::symbol("m")),
        );
        let names: Vec<_> = referenced_symbols(&node).into_iter().collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_repeated_mention_keeps_first_position() {
        let node: Node<i64> = Node::sum([
            Node::symbol("b"),
            Node::symbol("a"),
            Node::abs(Node::symbol("b")),
            Node::symbol("a"),
            Node::symbol("c"),
        ]);
        let names: Vec<_> = referenced_symbols(&node).into_iter().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}
