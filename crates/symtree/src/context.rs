//! Reduction limits, cancellation and tracing
//!
//! An [`EvalContext`] is built once and handed to [`reduce_with`]. It bounds
//! how deep a reduction may nest, carries a [`CancelToken`] that another
//! thread can trip to stop work between nodes, and switches per-node trace
//! events on or off. The context itself is never mutated by a reduction, so
//! one context can drive any number of reductions.
//!
//! [`reduce_with`]: crate::reduce_with

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{EvalError, Result};

/// Nesting depth allowed when no limit is given.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Shared cancellation flag for in-flight reductions.
///
/// Clones observe the same flag. Tripping it makes every reduction that
/// polls it fail with [`EvalError::Interrupted`] at its next node.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A token that has not been tripped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every reduction polling this token to stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Clear a previous [`cancel`](Self::cancel) so the token can be reused.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Check if [`cancel`](Self::cancel) has been called since the last reset.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Settings for one or more calls to [`reduce_with`](crate::reduce_with).
///
/// # Example
///
/// ```
/// use symtree::{reduce_with, EvalContext, EvalError, Node, SymbolTable};
///
/// let table: SymbolTable = SymbolTable::new();
/// let ctx = EvalContext::new().with_max_depth(2);
///
/// let shallow = Node::abs(Node::literal(-1.0));
/// assert_eq!(reduce_with(&shallow, &table, &ctx), Ok(1.0));
///
/// let deep = Node::abs(Node::abs(Node::literal(-1.0)));
/// assert!(matches!(
///     reduce_with(&deep, &table, &ctx),
///     Err(EvalError::DepthLimitExceeded { max: 2, .. })
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct EvalContext {
    max_depth: usize,
    cancel: CancelToken,
    trace: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            cancel: CancelToken::new(),
            trace: false,
        }
    }
}

impl EvalContext {
    /// A context with [`DEFAULT_MAX_DEPTH`], its own cancel token and tracing
    /// off.
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Builder
    // ═══════════════════════════════════════════════════════════════════

    /// Limit nesting to `max_depth` nodes, counting symbol hops.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Poll `token` instead of the context's own one.
    ///
    /// Lets a single token stop reductions running under several contexts.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Emit a `TRACE` event for every node visited.
    pub fn traced(mut self) -> Self {
        self.trace = true;
        self
    }

    // ═══════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════

    /// Maximum nesting depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// A handle to the token this context polls.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Whether per-node trace events are on.
    pub fn is_traced(&self) -> bool {
        self.trace
    }

    /// Fail with `Interrupted` if the token has been tripped.
    pub(crate) fn checkpoint(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(EvalError::Interrupted);
        }
        Ok(())
    }
}
