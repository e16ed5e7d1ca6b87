// ============================================================================
// Algebra Module
// Kind promotion, conversion and the public arithmetic operations
// ============================================================================
//
// This module provides:
// - sum/difference/product/quotient: binary arithmetic over dynamic values
// - negate/absolute: unary arithmetic
// - convert: widening conversion along the promotion ladder
// - AlgebraError: error taxonomy for the dispatcher
//
// Design principles:
// - Operands promote to the smallest common kind before arithmetic
// - Checked arithmetic everywhere; only integer product and quotient define
//   a Float64 fallback, every other overflow is surfaced as an error
// - Undefined kind pairings are recoverable TypeMismatch errors naming both
//   kinds; division by zero stays a native fault

mod convert;
mod dispatch;
mod errors;

pub use convert::convert;
pub use dispatch::{absolute, difference, negate, product, quotient, sum};
pub use errors::{AlgebraError, AlgebraResult};
