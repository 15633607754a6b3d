//! RAII guards for resolution state

use std::fmt;

use super::Resolver;

/// Undoes one step of resolver state when dropped.
///
/// The guard borrows the resolver mutably and derefs to it, so nested work
/// goes through the guard. `release` runs exactly once, on drop, whether the
/// branch that took the guard returned normally or with `?`.
///
/// # Example
///
/// ```
/// use symtree::{EvalContext, Resolver, SymbolTable};
///
/// let table: SymbolTable = SymbolTable::new();
/// let ctx = EvalContext::default();
/// let mut resolver = Resolver::new(&table, &ctx);
///
/// {
///     let guard = resolver.enter_symbol("x").unwrap();
///     assert_eq!(guard.active_symbols().collect::<Vec<_>>(), vec!["x"]);
/// }
/// // guard dropped, "x" is no longer being resolved
/// assert_eq!(resolver.active_symbols().count(), 0);
/// ```
pub struct ResolverGuard<'r, 't, N> {
    resolver: &'r mut Resolver<'t, N>,
    release: fn(&mut Resolver<'t, N>),
}

/// Keeps a symbol on the active resolution path; pops it when dropped.
pub type SymbolGuard<'r, 't, N> = ResolverGuard<'r, 't, N>;

/// Holds one level of nesting depth; releases it when dropped.
pub type DepthGuard<'r, 't, N> = ResolverGuard<'r, 't, N>;

impl<'r, 't, N> ResolverGuard<'r, 't, N> {
    pub(super) fn new(
        resolver: &'r mut Resolver<'t, N>,
        release: fn(&mut Resolver<'t, N>),
    ) -> Self {
        Self { resolver, release }
    }
}

impl<'r, 't, N> Drop for ResolverGuard<'r, 't, N> {
    fn drop(&mut self) {
        (self.release)(self.resolver);
    }
}

impl<'r, 't, N> std::ops::Deref for ResolverGuard<'r, 't, N> {
    type Target = Resolver<'t, N>;

    fn deref(&self) -> &Self::Target {
        self.resolver
    }
}

impl<'r, 't, N> std::ops::DerefMut for ResolverGuard<'r, 't, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.resolver
    }
}

impl<'r, 't, N: fmt::Debug> fmt::Debug for ResolverGuard<'r, 't, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverGuard")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EvalContext, EvalError, SymbolTable};

    #[test]
    fn test_symbol_guard_pops_on_drop() {
        let table: SymbolTable = SymbolTable::new();
        let ctx = EvalContext::default();
        let mut resolver = Resolver::new(&table, &ctx);

        {
            let mut outer = resolver.enter_symbol("a").unwrap();
            {
                let inner = outer.enter_symbol("b").unwrap();
                assert_eq!(inner.active_symbols().collect::<Vec<_>>(), vec!["a", "b"]);
            }
            assert_eq!(outer.active_symbols().collect::<Vec<_>>(), vec!["a"]);
        }
        assert_eq!(resolver.active_symbols().count(), 0);
    }

    #[test]
    fn test_depth_guard_restores_depth() {
        let table: SymbolTable = SymbolTable::new();
        let ctx = EvalContext::default();
        let mut resolver = Resolver::new(&table, &ctx);

        {
            let mut guard = resolver.descend().unwrap();
            let nested = guard.descend().unwrap();
            assert_eq!(nested.depth(), 2);
        }
        assert_eq!(resolver.depth(), 0);
    }

    #[test]
    fn test_mixed_guards_release_only_their_own_step() {
        let table: SymbolTable = SymbolTable::new();
        let ctx = EvalContext::default();
        let mut resolver = Resolver::new(&table, &ctx);

        let mut depth = resolver.descend().unwrap();
        {
            let mut symbol = depth.enter_symbol("x").unwrap();
            {
                let nested = symbol.descend().unwrap();
                assert_eq!(nested.depth(), 2);
                assert_eq!(nested.active_symbols().count(), 1);
            }
            assert_eq!(symbol.depth(), 1);
            assert_eq!(symbol.active_symbols().count(), 1);
        }
        assert_eq!(depth.depth(), 1);
        assert_eq!(depth.active_symbols().count(), 0);
        drop(depth);
        assert_eq!(resolver.depth(), 0);
    }

    #[test]
    fn test_guard_released_when_inner_step_fails() {
        let table: SymbolTable = SymbolTable::new();
        let ctx = EvalContext::default();
        let mut resolver = Resolver::new(&table, &ctx);

        let result = (|| -> Result<(), EvalError> {
            let guard = resolver.enter_symbol("x")?;
            guard.lookup("x")?;
            Ok(())
        })();

        assert!(matches!(result, Err(EvalError::UnboundSymbol { .. })));
        assert_eq!(resolver.active_symbols().count(), 0);
    }
}
