//! Error types for expression evaluation

use thiserror::Error;

/// Errors raised while reducing an expression tree.
///
/// Every recursive step propagates the first error unchanged; a failed
/// reduction never yields a partial or default value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A symbol reference found no entry in the table
    #[error("Unbound symbol: `{name}`")]
    UnboundSymbol {
        /// The missing symbol name
        name: String,
    },

    /// Exact division with a zero divisor
    #[error("Division by zero")]
    DivisionByZero,

    /// Exact arithmetic left the representable range
    #[error("Arithmetic overflow in `{op}`")]
    ArithmeticOverflow {
        /// Operator glyph that overflowed
        op: &'static str,
    },

    /// A symbol was reached again while it was still being resolved
    #[error(
        "Unbounded recursion: symbol `{name}` refers back to itself ({} -> {name})",
        .chain.join(" -> ")
    )]
    UnboundedRecursion {
        /// The symbol that closed the cycle
        name: String,
        /// Symbols on the active resolution path, outermost first
        chain: Vec<String>,
    },

    /// Nesting went deeper than the configured limit
    #[error("Depth limit exceeded: depth {depth} exceeds maximum {max}")]
    DepthLimitExceeded {
        /// Depth at which evaluation stopped
        depth: usize,
        /// Configured maximum
        max: usize,
    },

    /// Evaluation was stopped through the context's cancel token
    #[error("Evaluation interrupted")]
    Interrupted,
}

impl EvalError {
    /// Short, stable name of the error kind (for logs).
    pub fn kind_name(&self) -> &'static str {
        match self {
            EvalError::UnboundSymbol { .. } => "unbound_symbol",
            EvalError::DivisionByZero => "division_by_zero",
            EvalError::ArithmeticOverflow { .. } => "arithmetic_overflow",
            EvalError::UnboundedRecursion { .. } => "unbounded_recursion",
            EvalError::DepthLimitExceeded { .. } => "depth_limit_exceeded",
            EvalError::Interrupted => "interrupted",
        }
    }
}

/// Result type alias for evaluation
pub type Result<T> = std::result::Result<T, EvalError>;
