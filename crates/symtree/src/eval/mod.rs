//! Expression reduction

pub mod operators;
pub mod symbol;

use tracing::{debug, trace};

use crate::{EvalContext, Node, Number, Resolver, Result, SymbolTable};

/// Trait for reducing tree nodes to numbers.
///
/// This is the core abstraction of the evaluator. Reduction is depth-first
/// and post-order: children are fully reduced before their parent combines
/// them, and the first error is propagated unchanged.
pub trait Reduce<N: Number> {
    /// Reduce this node, resolving symbols through `resolver`.
    fn reduce(&self, resolver: &mut Resolver<'_, N>, ctx: &EvalContext) -> Result<N>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Node Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl<N: Number> Reduce<N> for Node<N> {
    fn reduce(&self, resolver: &mut Resolver<'_, N>, ctx: &EvalContext) -> Result<N> {
        ctx.checkpoint()?;

        let mut guard = resolver.descend()?;
        let resolver = &mut *guard;

        if ctx.is_traced() {
            trace!(
                kind = self.kind_name(),
                depth = resolver.depth(),
                "reducing node"
            );
        }

        match self {
            Node::Literal(value) => Ok(*value),
            Node::Symbol(name) => symbol::resolve(name, resolver, ctx),
            Node::Expression(expr) => expr.reduce(resolver, ctx),
            Node::NAry(op) => op.reduce(resolver, ctx),
            Node::Binary(op) => op.reduce(resolver, ctx),
            Node::Unary(op) => op.reduce(resolver, ctx),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Reduce `node` to a number, resolving symbols through `table`.
///
/// Uses [`EvalContext::default`]. Symbol cycles fail with
/// [`EvalError::UnboundedRecursion`](crate::EvalError::UnboundedRecursion) instead of recursing forever.
///
/// # Example
///
/// ```
/// use symtree::{reduce, EvalError, Node, SymbolTable};
///
/// let table: SymbolTable<i64> = SymbolTable::new();
///
/// assert_eq!(reduce(&Node::abs(Node::literal(-7)), &table), Ok(7));
/// assert_eq!(
///     reduce(&Node::division(Node::literal(10), Node::literal(0)), &table),
///     Err(EvalError::DivisionByZero)
/// );
/// ```
pub fn reduce<N: Number>(node: &Node<N>, table: &SymbolTable<N>) -> Result<N> {
    reduce_with(node, table, &EvalContext::default())
}

/// Reduce `node` with an explicit context.
pub fn reduce_with<N: Number>(
    node: &Node<N>,
    table: &SymbolTable<N>,
    ctx: &EvalContext,
) -> Result<N> {
    let mut resolver = Resolver::new(table, ctx);
    node.reduce(&mut resolver, ctx).map_err(|err| {
        debug!(
            kind = err.kind_name(),
            policy = %N::POLICY,
            "reduction failed: {}",
            err
        );
        err
    })
}
