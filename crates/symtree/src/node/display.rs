//! Infix rendering for expression trees

use std::fmt;

use super::*;

impl<N: fmt::Display> fmt::Display for Node<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(value) => write!(f, "{}", value),
            Node::Symbol(name) => write!(f, "{}", name),
            Node::Expression(expr) => write!(f, "{}", expr),
            Node::NAry(op) => write!(f, "{}", op),
            Node::Binary(op) => write!(f, "{}", op),
            Node::Unary(op) => write!(f, "{}", op),
        }
    }
}

impl<N: fmt::Display> fmt::Display for SubExpression<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

impl<N: fmt::Display> fmt::Display for NAryOp<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operands.is_empty() {
            return write!(f, "{}()", self.kind.kind_name());
        }

        write!(f, "(")?;
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", self.kind.symbol())?;
            }
            write!(f, "{}", operand)?;
        }
        write!(f, ")")
    }
}

impl<N: fmt::Display> fmt::Display for BinaryOp<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.kind.symbol(), self.right)
    }
}

impl<N: fmt::Display> fmt::Display for UnaryOp<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            UnaryKind::Abs => write!(f, "|{}|", self.operand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested_tree() {
        let root: Node = Node::difference(
            Node::literal(3.0),
            Node::product([
                Node::sum([Node::literal(5.0), Node::symbol("x")]),
                Node::sum([Node::symbol("x"), Node::symbol("y"), Node::literal(1.0)]),
            ]),
        );
        assert_eq!(root.to_string(), "(3 - ((5 + x) * (x + y + 1)))");
    }

    #[test]
    fn test_display_abs_and_division() {
        let node: Node<i64> = Node::abs(Node::division(Node::literal(-7), Node::symbol("n")));
        assert_eq!(node.to_string(), "|(-7 / n)|");
    }

    #[test]
    fn test_display_empty_nary() {
        assert_eq!(Node::<f64>::sum([]).to_string(), "sum()");
        assert_eq!(Node::<f64>::product([]).to_string(), "product()");
    }

    #[test]
    fn test_display_sub_expression_is_transparent() {
        let inner: Node = Node::sum([Node::literal(1.0), Node::literal(2.5)]);
        let wrapped = Node::expression(inner.clone());
        assert_eq!(wrapped.to_string(), inner.to_string());
        assert_eq!(wrapped.to_string(), "(1 + 2.5)");
    }
}
