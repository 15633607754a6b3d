//! Symbol resolution

use tracing::debug;

use crate::node::SubExpression;
use crate::{EvalContext, Number, Resolver, Result};

use super::Reduce;

impl<N: Number> Reduce<N> for SubExpression<N> {
    fn reduce(&self, resolver: &mut Resolver<'_, N>, ctx: &EvalContext) -> Result<N> {
        self.root().reduce(resolver, ctx)
    }
}

/// Resolve `name` through the table and reduce its bound expression.
///
/// Every occurrence is resolved afresh; nothing is memoized. The name stays
/// on the active path while its expression is reduced, so reaching it again
/// on that path fails with `UnboundedRecursion`.
pub fn resolve<N: Number>(
    name: &str,
    resolver: &mut Resolver<'_, N>,
    ctx: &EvalContext,
) -> Result<N> {
    let bound = resolver.lookup(name)?;
    let mut guard = resolver.enter_symbol(name)?;
    debug!(symbol = name, depth = guard.depth(), "resolving symbol");
    bound.reduce(&mut *guard, ctx)
}
