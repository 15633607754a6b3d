//! Per-reduction resolution state
//!
//! A [`Resolver`] is created for one top-level reduction. It carries the
//! table being read, the chain of symbols currently being resolved and the
//! current nesting depth. Both the chain and the depth only change through
//! RAII guards, so they are restored when a branch returns, on success or
//! on error.

mod guard;

pub use guard::{DepthGuard, ResolverGuard, SymbolGuard};

use indexmap::IndexSet;

use crate::context::EvalContext;
use crate::error::{EvalError, Result};
use crate::node::SubExpression;
use crate::table::SymbolTable;

/// Resolution state threaded through a reduction.
#[derive(Debug)]
pub struct Resolver<'t, N> {
    /// The table symbols are looked up in
    table: &'t SymbolTable<N>,

    /// Symbols on the active resolution path, outermost first
    active: IndexSet<String>,

    /// Current nesting depth
    depth: usize,

    /// Maximum allowed nesting depth
    max_depth: usize,
}

impl<'t, N> Resolver<'t, N> {
    /// Create a resolver over `table` with the context's depth limit.
    pub fn new(table: &'t SymbolTable<N>, ctx: &EvalContext) -> Self {
        Self {
            table,
            active: IndexSet::new(),
            depth: 0,
            max_depth: ctx.max_depth(),
        }
    }

    /// Look up `name`, failing with `UnboundSymbol` on a miss.
    pub fn lookup(&self, name: &str) -> Result<&'t SubExpression<N>> {
        self.table.get(name).ok_or_else(|| EvalError::UnboundSymbol {
            name: name.to_string(),
        })
    }

    // ═══════════════════════════════════════════════════════════════════
    // Cycle Detection
    // ═══════════════════════════════════════════════════════════════════

    /// Mark `name` as being resolved until the guard is dropped.
    ///
    /// Fails with `UnboundedRecursion` if `name` is already on the active
    /// path, i.e. resolving it would eventually require its own value.
    pub fn enter_symbol(&mut self, name: &str) -> Result<SymbolGuard<'_, 't, N>> {
        if self.active.contains(name) {
            return Err(EvalError::UnboundedRecursion {
                name: name.to_string(),
                chain: self.active.iter().cloned().collect(),
            });
        }
        self.active.insert(name.to_string());
        Ok(SymbolGuard::new(self, Self::exit_symbol))
    }

    /// Symbols currently being resolved, outermost first.
    pub fn active_symbols(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    fn exit_symbol(&mut self) {
        self.active.pop();
    }

    // ═══════════════════════════════════════════════════════════════════
    // Depth Tracking (Stack Overflow Protection)
    // ═══════════════════════════════════════════════════════════════════

    /// Enter one level of nesting until the guard is dropped.
    pub fn descend(&mut self) -> Result<DepthGuard<'_, 't, N>> {
        if self.depth >= self.max_depth {
            return Err(EvalError::DepthLimitExceeded {
                depth: self.depth,
                max: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(DepthGuard::new(self, Self::ascend))
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
