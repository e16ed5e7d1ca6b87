// ============================================================================
// Value Module
// Run-time classification and the dynamic value type
// ============================================================================
//
// This module provides:
// - Value: tagged union over the seven supported representations plus Absent
// - NumericKind: classification tag with membership predicates
// - largest_kind: the promotion table for binary operations
//
// Design principles:
// - Closed sum type: unsupported representations are unrepresentable
// - Values are immutable and Copy; operations always produce new values
// - Classification is total and never fails

mod dynamic_value;
mod kind;

pub use dynamic_value::Value;
pub use kind::{largest_kind, NumericKind};
