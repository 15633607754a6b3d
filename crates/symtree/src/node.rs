//! Expression tree representation

mod display;

use indexmap::IndexSet;

use crate::error::Result;
use crate::number::Number;
use crate::table::SymbolTable;

/// One position in an expression tree.
///
/// The variant set is closed: the evaluator and the symbol analysis both
/// match on it exhaustively, so a new operator form has to be handled in
/// every consumer before the crate compiles again.
///
/// Every non-terminal node owns its children. Sharing between trees only
/// happens by name, through [`Node::Symbol`] and a [`SymbolTable`].
///
/// Constructors do no validation; a tree that mentions a missing symbol or
/// divides by zero is only rejected when it is reduced.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<N = f64> {
    /// A numeric constant
    Literal(N),

    /// A reference to a symbol table entry
    Symbol(String),

    /// A transparent wrapper around another node
    Expression(SubExpression<N>),

    /// Sum or product over any number of operands
    NAry(NAryOp<N>),

    /// Difference or division of two operands
    Binary(BinaryOp<N>),

    /// Absolute value of one operand
    Unary(UnaryOp<N>),
}

/// A transparent wrapper around a root node.
///
/// This marks the top of a tree and is the type every symbol table entry
/// binds to. Reducing it is the same as reducing its root.
#[derive(Debug, Clone, PartialEq)]
pub struct SubExpression<N = f64> {
    root: Box<Node<N>>,
}

/// Associative n-ary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NAryKind {
    /// `a + b + ...`, identity `0`
    Sum,

    /// `a * b * ...`, identity `1`
    Product,
}

/// An n-ary operator node.
#[derive(Debug, Clone, PartialEq)]
pub struct NAryOp<N = f64> {
    /// Which operator
    pub kind: NAryKind,

    /// Operands, folded left to right
    pub operands: Vec<Node<N>>,
}

/// Non-commutative binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryKind {
    /// `left - right`
    Difference,

    /// `left / right`
    Division,
}

/// A binary operator node.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp<N = f64> {
    /// Which operator
    pub kind: BinaryKind,

    /// Left operand (reduced first)
    pub left: Box<Node<N>>,

    /// Right operand
    pub right: Box<Node<N>>,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryKind {
    /// `|operand|`
    Abs,
}

/// A unary operator node.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp<N = f64> {
    /// Which operator
    pub kind: UnaryKind,

    /// The operand
    pub operand: Box<Node<N>>,
}

// ═══════════════════════════════════════════════════════════════════════
// Operator Kinds
// ═══════════════════════════════════════════════════════════════════════

impl NAryKind {
    /// The value of the operator applied to zero operands.
    pub fn identity<N: Number>(self) -> N {
        match self {
            NAryKind::Sum => N::ZERO,
            NAryKind::Product => N::ONE,
        }
    }

    /// Combine an accumulator with one more operand.
    pub fn apply<N: Number>(self, acc: N, operand: N) -> Result<N> {
        match self {
            NAryKind::Sum => acc.try_add(operand),
            NAryKind::Product => acc.try_mul(operand),
        }
    }

    /// Infix glyph.
    pub fn symbol(self) -> &'static str {
        match self {
            NAryKind::Sum => "+",
            NAryKind::Product => "*",
        }
    }

    /// Human-readable name.
    pub fn kind_name(self) -> &'static str {
        match self {
            NAryKind::Sum => "sum",
            NAryKind::Product => "product",
        }
    }
}

impl BinaryKind {
    /// Combine two reduced operands.
    pub fn apply<N: Number>(self, left: N, right: N) -> Result<N> {
        match self {
            BinaryKind::Difference => left.try_sub(right),
            BinaryKind::Division => left.try_div(right),
        }
    }

    /// Infix glyph.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryKind::Difference => "-",
            BinaryKind::Division => "/",
        }
    }

    /// Human-readable name.
    pub fn kind_name(self) -> &'static str {
        match self {
            BinaryKind::Difference => "difference",
            BinaryKind::Division => "division",
        }
    }
}

impl UnaryKind {
    /// Apply the operator to a reduced operand.
    pub fn apply<N: Number>(self, operand: N) -> Result<N> {
        match self {
            UnaryKind::Abs => operand.try_abs(),
        }
    }

    /// Human-readable name.
    pub fn kind_name(self) -> &'static str {
        match self {
            UnaryKind::Abs => "abs",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════

impl<N> Node<N> {
    /// A literal number.
    pub fn literal(value: N) -> Self {
        Node::Literal(value)
    }

    /// A reference to the symbol `name`.
    pub fn symbol(name: impl Into<String>) -> Self {
        Node::Symbol(name.into())
    }

    /// Wrap `root` in a [`SubExpression`].
    pub fn expression(root: Node<N>) -> Self {
        Node::Expression(SubExpression::new(root))
    }

    /// An n-ary operator over `operands` (possibly none).
    pub fn nary(kind: NAryKind, operands: impl IntoIterator<Item = Node<N>>) -> Self {
        Node::NAry(NAryOp {
            kind,
            operands: operands.into_iter().collect(),
        })
    }

    /// `operands[0] + operands[1] + ...`
    pub fn sum(operands: impl IntoIterator<Item = Node<N>>) -> Self {
        Self::nary(NAryKind::Sum, operands)
    }

    /// `operands[0] * operands[1] * ...`
    pub fn product(operands: impl IntoIterator<Item = Node<N>>) -> Self {
        Self::nary(NAryKind::Product, operands)
    }

    /// A binary operator.
    pub fn binary(kind: BinaryKind, left: Node<N>, right: Node<N>) -> Self {
        Node::Binary(BinaryOp {
            kind,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// `left - right`
    pub fn difference(left: Node<N>, right: Node<N>) -> Self {
        Self::binary(BinaryKind::Difference, left, right)
    }

    /// `left / right`
    pub fn division(left: Node<N>, right: Node<N>) -> Self {
        Self::binary(BinaryKind::Division, left, right)
    }

    /// `|operand|`
    pub fn abs(operand: Node<N>) -> Self {
        Node::Unary(UnaryOp {
            kind: UnaryKind::Abs,
            operand: Box::new(operand),
        })
    }

    /// Human-readable name of this node's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Literal(_) => "literal",
            Node::Symbol(_) => "symbol",
            Node::Expression(_) => "expression",
            Node::NAry(op) => op.kind.kind_name(),
            Node::Binary(op) => op.kind.kind_name(),
            Node::Unary(op) => op.kind.kind_name(),
        }
    }

    /// Names this tree mentions directly. See [`crate::referenced_symbols`].
    pub fn referenced_symbols(&self) -> IndexSet<String> {
        crate::analysis::referenced_symbols(self)
    }
}

impl<N: Number> Node<N> {
    /// Reduce this tree against `table`. See [`crate::reduce`].
    pub fn evaluate(&self, table: &SymbolTable<N>) -> Result<N> {
        crate::eval::reduce(self, table)
    }
}

impl<N> From<SubExpression<N>> for Node<N> {
    fn from(expr: SubExpression<N>) -> Self {
        Node::Expression(expr)
    }
}

impl<N> SubExpression<N> {
    /// Wrap `root`.
    pub fn new(root: Node<N>) -> Self {
        Self {
            root: Box::new(root),
        }
    }

    /// The wrapped node.
    pub fn root(&self) -> &Node<N> {
        &self.root
    }

    /// Names the root mentions directly.
    pub fn referenced_symbols(&self) -> IndexSet<String> {
        crate::analysis::referenced_symbols(&self.root)
    }
}

impl<N: Number> SubExpression<N> {
    /// Reduce the root against `table`.
    pub fn evaluate(&self, table: &SymbolTable<N>) -> Result<N> {
        crate::eval::reduce(&self.root, table)
    }
}

impl<N> From<Node<N>> for SubExpression<N> {
    fn from(root: Node<N>) -> Self {
        Self::new(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_take_ownership_of_children() {
        let node: Node = Node::difference(Node::literal(3.0), Node::symbol("x"));
        match node {
            Node::Binary(BinaryOp { kind, left, right }) => {
                assert_eq!(kind, BinaryKind::Difference);
                assert_eq!(*left, Node::Literal(3.0));
                assert_eq!(*right, Node::Symbol("x".to_string()));
            }
            other => panic!("Expected binary node, got {:?}", other),
        }
    }

    #[test]
    fn test_nary_accepts_zero_operands() {
        let node: Node = Node::sum([]);
        match node {
            Node::NAry(op) => assert!(op.operands.is_empty()),
            other => panic!("Expected n-ary node, got {:?}", other),
        }
    }

    #[test]
    fn test_nary_preserves_operand_order() {
        let node: Node = Node::product([Node::literal(1.0), Node::symbol("a"), Node::literal(2.0)]);
        let Node::NAry(op) = node else {
            panic!("Expected n-ary node");
        };
        assert_eq!(op.kind, NAryKind::Product);
        assert_eq!(
            op.operands,
            vec![Node::literal(1.0), Node::symbol("a"), Node::literal(2.0)]
        );
    }

    #[test]
    fn test_identity_elements() {
        assert_eq!(NAryKind::Sum.identity::<f64>(), 0.0);
        assert_eq!(NAryKind::Product.identity::<f64>(), 1.0);
        assert_eq!(NAryKind::Sum.identity::<i64>(), 0);
        assert_eq!(NAryKind::Product.identity::<i64>(), 1);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Node::<f64>::literal(1.0).kind_name(), "literal");
        assert_eq!(Node::<f64>::symbol("x").kind_name(), "symbol");
        assert_eq!(Node::<f64>::expression(Node::literal(1.0)).kind_name(), "expression");
        assert_eq!(Node::<f64>::sum([]).kind_name(), "sum");
        assert_eq!(Node::<f64>::product([]).kind_name(), "product");
        assert_eq!(
            Node::<f64>::division(Node::literal(1.0), Node::literal(2.0)).kind_name(),
            "division"
        );
        assert_eq!(Node::<f64>::abs(Node::literal(1.0)).kind_name(), "abs");
    }

    #[test]
    fn test_sub_expression_round_trip_through_node() {
        let expr = SubExpression::new(Node::<i64>::literal(4));
        assert_eq!(expr.root(), &Node::Literal(4));
        let node: Node<i64> = expr.clone().into();
        assert_eq!(node, Node::Expression(expr));
    }

    #[test]
    fn test_validation_is_deferred() {
        // A dangling symbol and a zero divisor are both fine to build
        let _: Node<i64> = Node::division(Node::symbol("missing"), Node::literal(0));
    }
}
