//! Error types for buffer transforms.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when a doubling
//! operation is handed a count that its buffer cannot satisfy.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending count and the actual
//!   buffer size.
//! * **Fail-fast**: Errors are raised before any mutation, so a failed call
//!   never leaves a half-doubled buffer behind.
//! * **No-std**: Implements `Display` from `core`; `std::error::Error` is
//!   gated behind the `std` feature.
//!
//! ## Invariants
//!
//! * Every variant carries enough context to diagnose the violation.
//! * Numeric fields use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for precondition violations in the doubling operations.
///
/// The summation operation is total and never produces an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// Row count exceeds the number of rows actually present in the matrix.
    RowCountExceeded {
        /// The row count supplied by the caller.
        got: usize,
        /// Number of rows in the matrix buffer.
        rows: usize,
    },

    /// Element count exceeds the length of the vector buffer.
    ElementCountExceeded {
        /// The element count supplied by the caller.
        got: usize,
        /// Length of the vector buffer.
        len: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for TransformError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::RowCountExceeded { got, rows } => {
                write!(f, "Row count {got} exceeds matrix rows {rows}")
            }
            Self::ElementCountExceeded { got, len } => {
                write!(f, "Element count {got} exceeds vector length {len}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for TransformError {}
