//! Error and diagnostic types.
//!
//! This module provides [`MismatchInfo`], the report of a failed match,
//! [`Mismatches`] for accumulating reports across many suspects, and
//! [`TdError`] for type descriptions that cannot be built.

mod mismatch_info;
mod td_error;

pub use mismatch_info::{MismatchInfo, Mismatches};
pub use td_error::TdError;
