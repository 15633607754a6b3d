//! Numeric policies
//!
//! A tree's number type fixes how every arithmetic operator behaves. The two
//! provided policies are:
//!
//! | Type  | Policy                            | `x / 0`            | Overflow                    |
//! |-------|-----------------------------------|--------------------|-----------------------------|
//! | `f64` | [`NumericPolicy::FloatingPoint`]  | `±inf` or NaN      | never (saturates to `±inf`) |
//! | `i64` | [`NumericPolicy::CheckedInteger`] | `DivisionByZero`   | `ArithmeticOverflow`        |
//!
//! Because the policy is a type parameter, a single tree cannot mix them.

use std::fmt;

use crate::error::{EvalError, Result};

/// Which arithmetic rules a [`Number`] type follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericPolicy {
    /// IEEE 754 arithmetic; operators never fail
    FloatingPoint,

    /// Exact integer arithmetic; overflow and zero divisors are errors
    CheckedInteger,
}

impl fmt::Display for NumericPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericPolicy::FloatingPoint => write!(f, "floating-point"),
            NumericPolicy::CheckedInteger => write!(f, "checked-integer"),
        }
    }
}

/// The single numeric domain of an expression tree.
pub trait Number: Copy + PartialEq + fmt::Debug + fmt::Display {
    /// Additive identity, the value of an empty sum
    const ZERO: Self;

    /// Multiplicative identity, the value of an empty product
    const ONE: Self;

    /// Policy this type implements
    const POLICY: NumericPolicy;

    /// `self + rhs`
    fn try_add(self, rhs: Self) -> Result<Self>;

    /// `self - rhs`
    fn try_sub(self, rhs: Self) -> Result<Self>;

    /// `self * rhs`
    fn try_mul(self, rhs: Self) -> Result<Self>;

    /// `self / rhs`
    fn try_div(self, rhs: Self) -> Result<Self>;

    /// `|self|`
    fn try_abs(self) -> Result<Self>;
}

impl Number for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const POLICY: NumericPolicy = NumericPolicy::FloatingPoint;

    fn try_add(self, rhs: Self) -> Result<Self> {
        Ok(self + rhs)
    }

    fn try_sub(self, rhs: Self) -> Result<Self> {
        Ok(self - rhs)
    }

    fn try_mul(self, rhs: Self) -> Result<Self> {
        Ok(self * rhs)
    }

    // Zero divisors follow IEEE 754: ±inf, or NaN for 0/0.
    fn try_div(self, rhs: Self) -> Result<Self> {
        Ok(self / rhs)
    }

    fn try_abs(self) -> Result<Self> {
        Ok(self.abs())
    }
}

impl Number for i64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const POLICY: NumericPolicy = NumericPolicy::CheckedInteger;

    fn try_add(self, rhs: Self) -> Result<Self> {
        self.checked_add(rhs)
            .ok_or(EvalError::ArithmeticOverflow { op: "+" })
    }

    fn try_sub(self, rhs: Self) -> Result<Self> {
        self.checked_sub(rhs)
            .ok_or(EvalError::ArithmeticOverflow { op: "-" })
    }

    fn try_mul(self, rhs: Self) -> Result<Self> {
        self.checked_mul(rhs)
            .ok_or(EvalError::ArithmeticOverflow { op: "*" })
    }

    /// Truncates toward zero.
    fn try_div(self, rhs: Self) -> Result<Self> {
        if rhs == 0 {
            return Err(EvalError::DivisionByZero);
        }
        // Only i64::MIN / -1 can fail past this point
        self.checked_div(rhs)
            .ok_or(EvalError::ArithmeticOverflow { op: "/" })
    }

    fn try_abs(self) -> Result<Self> {
        self.checked_abs()
            .ok_or(EvalError::ArithmeticOverflow { op: "abs" })
    }
}
