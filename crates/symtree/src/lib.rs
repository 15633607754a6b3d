//! # Symtree
//!
//! Arithmetic expression trees whose leaves are literal numbers or named
//! symbols, where each symbol is bound to another expression in a
//! [`SymbolTable`].
//!
//! ## Architecture
//!
//! - **Node model**: a closed sum type ([`Node`]) over literals, symbol
//!   references, transparent sub-expressions and the operator forms
//!   (n-ary sum/product, binary difference/division, unary abs)
//! - **Evaluator**: [`reduce`] collapses a tree to a number, resolving
//!   symbols through the table and failing fast on the first error
//! - **Analysis**: [`referenced_symbols`] collects the names a tree
//!   mentions without consulting any table
//!
//! The numeric policy is chosen by the node's type parameter: `f64` for
//! IEEE floating point (the default), `i64` for exact checked arithmetic.
//! See [`Number`].
//!
//! ## Example
//!
//! ```
//! use symtree::{reduce, referenced_symbols, Node, SubExpression, SymbolTable};
//!
//! let mut table: SymbolTable = SymbolTable::new();
//! table.define("x", SubExpression::new(Node::sum([Node::literal(1.0), Node::symbol("y")])));
//! table.define("y", SubExpression::new(Node::abs(Node::difference(Node::literal(1.0), Node::literal(3.0)))));
//!
//! let root = Node::difference(
//!     Node::literal(3.0),
//!     Node::product([
//!         Node::sum([Node::literal(5.0), Node::symbol("x")]),
//!         Node::sum([Node::symbol("x"), Node::symbol("y"), Node::literal(1.0)]),
//!     ]),
//! );
//!
//! assert_eq!(reduce(&root, &table).unwrap(), -45.0);
//! assert_eq!(referenced_symbols(&root).len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod context;
pub mod error;
pub mod eval;
pub mod node;
pub mod number;
pub mod resolver;
pub mod table;

// Re-export main types
pub use analysis::referenced_symbols;
pub use context::{CancelToken, EvalContext, DEFAULT_MAX_DEPTH};
pub use error::{EvalError, Result};
pub use eval::{reduce, reduce_with, Reduce};
pub use node::{BinaryKind, BinaryOp, NAryKind, NAryOp, Node, SubExpression, UnaryKind, UnaryOp};
pub use number::{Number, NumericPolicy};
pub use resolver::{DepthGuard, Resolver, ResolverGuard, SymbolGuard};
pub use table::SymbolTable;

/// Symtree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
