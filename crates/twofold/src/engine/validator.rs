//! Precondition validation for the doubling operations.
//!
//! ## Purpose
//!
//! This module validates the caller-supplied counts against the buffers
//! they describe. Validation runs before any mutation, so a rejected call
//! leaves the buffer exactly as it was and never reaches the sink.
//!
//! ## Design notes
//!
//! * **Fail-fast**: Validation stops at the first violation.
//! * **Deterministic**: Checks are pure comparisons with no side effects.
//!
//! ## Invariants
//!
//! * A validated count is a safe slice bound for its buffer.
//!
//! ## Non-goals
//!
//! * This module does not mutate or transform input data.
//! * This module does not validate element values; every integer is a
//!   valid doubling input.

// Internal dependencies
use crate::primitives::errors::TransformError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for the doubling operations.
///
/// Provides static methods that return `Result<(), TransformError>` and
/// fail fast upon identifying a violation.
pub struct Validator;

impl Validator {
    /// Validate a row count against the number of rows in a matrix buffer.
    pub fn validate_row_count(count: usize, rows: usize) -> Result<(), TransformError> {
        if count > rows {
            return Err(TransformError::RowCountExceeded { got: count, rows });
        }
        Ok(())
    }

    /// Validate an element count against the length of a vector buffer.
    pub fn validate_element_count(count: usize, len: usize) -> Result<(), TransformError> {
        if count > len {
            return Err(TransformError::ElementCountExceeded { got: count, len });
        }
        Ok(())
    }
}
