//! Operator node reduction

use crate::node::{BinaryOp, NAryOp, UnaryOp};
use crate::{EvalContext, Number, Resolver, Result};

use super::Reduce;

impl<N: Number> Reduce<N> for NAryOp<N> {
    /// Fold operands left to right, starting from the operator's identity.
    fn reduce(&self, resolver: &mut Resolver<'_, N>, ctx: &EvalContext) -> Result<N> {
        let mut acc = self.kind.identity();
        for operand in &self.operands {
            let value = operand.reduce(resolver, ctx)?;
            acc = self.kind.apply(acc, value)?;
        }
        Ok(acc)
    }
}

impl<N: Number> Reduce<N> for BinaryOp<N> {
    fn reduce(&self, resolver: &mut Resolver<'_, N>, ctx: &EvalContext) -> Result<N> {
        // Left before right, always
        let left = self.left.reduce(resolver, ctx)?;
        let right = self.right.reduce(resolver, ctx)?;
        self.kind.apply(left, right)
    }
}

impl<N: Number> Reduce<N> for UnaryOp<N> {
    fn reduce(&self, resolver: &mut Resolver<'_, N>, ctx: &EvalContext) -> Result<N> {
        let operand = self.operand.reduce(resolver, ctx)?;
        self.kind.apply(operand)
    }
}
