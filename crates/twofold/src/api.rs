//! High-level API for the buffer transforms.
//!
//! ## Purpose
//!
//! This module provides the user-facing operations. Each doubling
//! operation composes the three lower layers: validate the count, run the
//! in-place kernel on the processed prefix, forward the whole buffer to
//! the sink.
//!
//! ## Design notes
//!
//! * **Stateless**: The operations are free functions; there is nothing to
//!   configure and no identity to carry between calls.
//! * **Mutate-and-forward**: The caller's buffer is doubled in place and
//!   then forwarded. There is no copy-and-return variant; the aliasing is
//!   the contract.
//! * **Validated**: A count that overruns its buffer fails before any
//!   mutation and before the sink is reached.
//!
//! ## Key concepts
//!
//! * **Processed prefix**: Only the first `count` rows/elements are
//!   doubled; the sink still receives the full buffer plus the count.
//! * **Zero counts**: `count = 0` is a valid no-op that still invokes the
//!   sink once.

// External dependencies
use num_traits::{PrimInt, WrappingMul};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::transforms::doubling::{double_rows, double_slice};

// Publicly re-exported types
pub use crate::math::promote::{sum_mixed, widen};
pub use crate::primitives::errors::TransformError;
pub use crate::primitives::row::{Row, ROW_WIDTH};
pub use crate::sinks::reference::{MatrixRecorder, RowSumRelay, VectorRecorder};
pub use crate::sinks::{MatrixSink, VectorSink};

#[cfg(feature = "std")]
pub use crate::sinks::reference::StdoutSink;

// ============================================================================
// Operations
// ============================================================================

/// Double the first `count` rows of `matrix` in place and forward the
/// result.
///
/// Every element of rows `[0, count)` is multiplied by 2, wrapping on
/// overflow; rows at index `>= count` are untouched. On success the sink's
/// [`send`](MatrixSink::send) is invoked exactly once with `count` and the
/// mutated buffer.
///
/// # Errors
///
/// Returns [`TransformError::RowCountExceeded`] if `count > matrix.len()`.
/// The buffer is not mutated and the sink is not invoked.
///
/// # Examples
///
/// ```rust
/// use twofold::prelude::*;
///
/// let mut matrix = [[1, 2, 3], [4, 5, 6]];
/// let mut sink = MatrixRecorder::new();
///
/// double_matrix(2, &mut matrix, &mut sink)?;
///
/// assert_eq!(matrix, [[2, 4, 6], [8, 10, 12]]);
/// assert_eq!(sink.last_count, Some(2));
/// # Result::<(), TransformError>::Ok(())
/// ```
pub fn double_matrix<T, S>(
    count: usize,
    matrix: &mut [Row<T>],
    sink: &mut S,
) -> Result<(), TransformError>
where
    T: PrimInt + WrappingMul,
    S: MatrixSink<T>,
{
    Validator::validate_row_count(count, matrix.len())?;
    double_rows(&mut matrix[..count]);
    sink.send(count, matrix);
    Ok(())
}

/// Double the first `count` elements of `vector` in place and forward the
/// result.
///
/// Elements `[0, count)` are multiplied by 2, wrapping on overflow;
/// elements at index `>= count` are untouched. On success the sink's
/// [`output`](VectorSink::output) is invoked exactly once with `count` and
/// the mutated buffer.
///
/// # Errors
///
/// Returns [`TransformError::ElementCountExceeded`] if
/// `count > vector.len()`. The buffer is not mutated and the sink is not
/// invoked.
///
/// # Examples
///
/// ```rust
/// use twofold::prelude::*;
///
/// let mut vector = [1, 2, 3, 99];
/// let mut sink = VectorRecorder::new();
///
/// double_vector(3, &mut vector, &mut sink)?;
///
/// assert_eq!(vector, [2, 4, 6, 99]);
/// # Result::<(), TransformError>::Ok(())
/// ```
pub fn double_vector<T, S>(
    count: usize,
    vector: &mut [T],
    sink: &mut S,
) -> Result<(), TransformError>
where
    T: PrimInt + WrappingMul,
    S: VectorSink<T>,
{
    Validator::validate_element_count(count, vector.len())?;
    double_slice(&mut vector[..count]);
    sink.output(count, vector);
    Ok(())
}
