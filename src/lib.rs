// ============================================================================
// Numeric Algebra Library
// Dynamically-typed arithmetic with decimal-precision rounding
// ============================================================================

//! # Numeric Algebra
//!
//! Arithmetic over values whose concrete numeric kind is only known at run
//! time, plus decimal-precision rounding with signed digit counts and
//! overflow-safe rounded integer division.
//!
//! ## Features
//!
//! - **Dynamic values** as a closed tagged union: `i32`, `i64`, `f32`, `f64`,
//!   [`rust_decimal::Decimal`], a signed duration, an absolute instant, and an
//!   explicit absent state
//! - **Kind promotion** along a strict ladder, so binary operations always
//!   compute in the smallest common representation
//! - **Checked arithmetic** with a deliberate `Float64` fallback for integer
//!   products and inexact integer quotients only
//! - **Away-from-zero rounding** (`round`/`floor`/`ceiling`/`truncate`) at
//!   any signed digit count, with cached powers of ten for the ±5 range
//! - **Rounded integer division** using an overflow-safe midpoint test
//!
//! ## Example
//!
//! ```rust
//! use numeric_algebra::prelude::*;
//! use numeric_algebra::rounding;
//!
//! // 6 (i32) * 7 (i64) promotes to Int64
//! let p = product(Value::from(6i32), Value::from(7i64)).unwrap();
//! assert_eq!(p, Value::Int64(42));
//!
//! // an absent operand is the identity for sums
//! assert_eq!(sum(Value::Absent, Value::from(5i32)).unwrap(), Value::Int32(5));
//!
//! // round to the nearest ten, ties away from zero
//! assert_eq!(rounding::float::round(125.0, -1), 130.0);
//! assert_eq!(rounding::divide_rounded_i32(8, 3), 3);
//! ```

pub mod algebra;
pub mod rounding;
pub mod value;

// Re-exports for convenience
pub mod prelude {
    pub use crate::algebra::{
        absolute, convert, difference, negate, product, quotient, sum, AlgebraError,
        AlgebraResult,
    };
    pub use crate::rounding::{divide_rounded_i32, divide_rounded_i64};
    pub use crate::value::{largest_kind, NumericKind, Value};
}
