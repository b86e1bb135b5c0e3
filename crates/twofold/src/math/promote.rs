//! Numeric widening and mixed-width summation.
//!
//! ## Purpose
//!
//! This module sums five values of different native widths (typically
//! `i16`, `i32`, `i64`, `f32`, `f64`) as a double-precision float. Every
//! input is widened to `f64` *before* any addition, never summed in its
//! native integer width first.
//!
//! ## Design notes
//!
//! * **Promotion first**: Widening happens per input, so integer overflow
//!   in a native-width intermediate sum is impossible.
//! * **Fixed order**: The add chain is left-to-right (`a + b + c + d + e`),
//!   making the rounding order reproducible bit-for-bit.
//! * **Generics**: Inputs are anything `AsPrimitive<f64>` accepts, which
//!   covers all primitive integer and float widths.
//!
//! ## Key concepts
//!
//! * **Value preservation**: Integers within `f64`'s exact-integer range
//!   (|v| <= 2^53) widen without loss; `f32` widens exactly.
//! * **Inherent rounding**: A 64-bit integer beyond 2^53 loses low bits on
//!   widening. That is a property of the representation, not an error.
//!
//! ## Non-goals
//!
//! * This module does not detect or report precision loss.
//! * This module does not offer compensated (Kahan) summation; five terms
//!   do not warrant it.

// External dependencies
use num_traits::AsPrimitive;

// ============================================================================
// Widening
// ============================================================================

/// Widen a primitive numeric value to double precision.
#[inline]
pub fn widen<T: AsPrimitive<f64>>(value: T) -> f64 {
    value.as_()
}

// ============================================================================
// Mixed-Width Summation
// ============================================================================

/// Sum five numeric values of mixed widths as `f64`.
///
/// Each input is widened to double precision first, then the widened values
/// are added left-to-right. The sum is total: any combination of primitive
/// numeric inputs is valid.
///
/// # Examples
///
/// ```rust
/// use twofold::prelude::*;
///
/// assert_eq!(sum_mixed(1i16, 2i32, 3i64, 4.0f32, 5.0f64), 15.0);
/// ```
#[inline]
pub fn sum_mixed<A, B, C, D, E>(a: A, b: B, c: C, d: D, e: E) -> f64
where
    A: AsPrimitive<f64>,
    B: AsPrimitive<f64>,
    C: AsPrimitive<f64>,
    D: AsPrimitive<f64>,
    E: AsPrimitive<f64>,
{
    widen(a) + widen(b) + widen(c) + widen(d) + widen(e)
}
