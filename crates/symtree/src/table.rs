//! Symbol table mapping names to bound expressions

use indexmap::{IndexMap, IndexSet};

use crate::node::{Node, SubExpression};

/// A mapping from symbol name to the expression it stands for.
///
/// The caller builds the table; evaluation only ever reads it, so one table
/// can be shared by any number of reductions. Iteration follows definition
/// order.
///
/// # Example
///
/// ```
/// use symtree::{Node, SubExpression, SymbolTable};
///
/// let mut table: SymbolTable = SymbolTable::new();
/// table.define("x", SubExpression::new(Node::literal(2.0)));
///
/// assert!(table.contains("x"));
/// assert_eq!(table.get("x").map(SubExpression::root), Some(&Node::literal(2.0)));
/// assert!(table.get("y").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable<N = f64> {
    entries: IndexMap<String, SubExpression<N>>,
}

impl<N> Default for SymbolTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> SymbolTable<N> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` to `expr`.
    ///
    /// Redefining a name replaces the old binding in place and returns it.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        expr: impl Into<SubExpression<N>>,
    ) -> Option<SubExpression<N>> {
        self.entries.insert(name.into(), expr.into())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// The expression bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&SubExpression<N>> {
        self.entries.get(name)
    }

    /// Check if `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bound names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Bindings in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubExpression<N>)> {
        self.entries.iter().map(|(name, expr)| (name.as_str(), expr))
    }

    /// Names `node` mentions directly that this table does not bind.
    ///
    /// Only the given tree is inspected; bound expressions are not followed.
    pub fn unbound_symbols(&self, node: &Node<N>) -> IndexSet<String> {
        crate::analysis::referenced_symbols(node)
            .into_iter()
            .filter(|name| !self.contains(name))
            .collect()
    }
}

impl<N, K: Into<String>> FromIterator<(K, SubExpression<N>)> for SymbolTable<N> {
    fn from_iter<I: IntoIterator<Item = (K, SubExpression<N>)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<N, K: Into<String>> Extend<(K, SubExpression<N>)> for SymbolTable<N> {
    fn extend<I: IntoIterator<Item = (K, SubExpression<N>)>>(&mut self, iter: I) {
        for (name, expr) in iter {
            self.define(name, expr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lit(value: f64) -> SubExpression {
        SubExpression::new(Node::literal(value))
    }

    #[test]
    fn test_new_table_is_empty() {
        let table: SymbolTable = SymbolTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.get("x").is_none());
    }

    #[test]
    fn test_redefine_replaces_and_returns_old() {
        let mut table = SymbolTable::new();
        assert!(table.define("x", lit(1.0)).is_none());
        assert_eq!(table.define("x", lit(2.0)), Some(lit(1.0)));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("x"), Some(&lit(2.0)));
    }

    #[test]
    fn test_names_follow_definition_order() {
        let table: SymbolTable = [("b", lit(1.0)), ("a", lit(2.0)), ("c", lit(3.0))]
            .into_iter()
            .collect();
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_define_accepts_bare_node() {
        let mut table: SymbolTable<i64> = SymbolTable::new();
        table.define("x", Node::literal(5i64));
        assert_eq!(table.get("x").map(SubExpression::root), Some(&Node::Literal(5)));
    }

    #[test]
    fn test_unbound_symbols() {
        let table: SymbolTable = [("x", lit(1.0))].into_iter().collect();
        let node = Node::sum([Node::symbol("x"), Node::symbol("y"), Node::symbol("z")]);
        let unbound: Vec<_> = table.unbound_symbols(&node).into_iter().collect();
        assert_eq!(unbound, vec!["y".to_string(), "z".to_string()]);
    }
}
