//! In-place doubling kernels.
//!
//! ## Purpose
//!
//! This module multiplies every element of a slice (or every element of a
//! slice of rows) by 2, in place. These are the tight loops everything else
//! composes.
//!
//! ## Design notes
//!
//! * **Wrapping**: Doubling wraps on overflow in two's complement rather
//!   than panicking, so debug and release builds behave identically.
//! * **Allocation-free**: The kernels mutate borrowed buffers and allocate
//!   nothing.
//! * **Row-major**: Rows are processed in order, each row fully before the
//!   next. Element operations are independent, so the order is not
//!   externally observable.
//!
//! ## Invariants
//!
//! * Exactly the elements of the given slice are written; the kernels never
//!   see, let alone touch, anything outside it.
//! * `0` maps to `0`; doubling is injective on values that do not wrap.
//!
//! ## Non-goals
//!
//! * This module does not validate counts against buffer sizes.
//! * This module does not forward results anywhere.

// External dependencies
use num_traits::{PrimInt, WrappingMul};

// Internal dependencies
use crate::primitives::row::Row;

// ============================================================================
// Doubling Kernels
// ============================================================================

/// Double every element of `values` in place, wrapping on overflow.
#[inline]
pub fn double_slice<T: PrimInt + WrappingMul>(values: &mut [T]) {
    let two = T::one() + T::one();
    for v in values.iter_mut() {
        *v = v.wrapping_mul(&two);
    }
}

/// Double every element of every row in place, row-major.
#[inline]
pub fn double_rows<T: PrimInt + WrappingMul>(rows: &mut [Row<T>]) {
    for row in rows.iter_mut() {
        double_slice(row);
    }
}
