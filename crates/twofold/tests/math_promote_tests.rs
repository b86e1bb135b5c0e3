//! Tests for mixed-width summation and numeric widening.
//!
//! These tests verify the promoted sum:
//! - Exact results for values inside f64's exact-integer range
//! - Promotion before addition (never native-width integer sums)
//! - Commutativity within double-precision tolerance
//! - Inherent rounding for 64-bit integers beyond 2^53
//!
//! ## Test Organization
//!
//! 1. **Exact Scenarios** - Concrete sums with exact expected values
//! 2. **Commutativity** - Order independence within tolerance
//! 3. **Widening** - Value preservation and inherent precision loss

use approx::assert_relative_eq;

use twofold::prelude::*;

// ============================================================================
// Exact Scenario Tests
// ============================================================================

/// Test the all-integer-friendly scenario: (1, 2, 3, 4.0, 5.0) = 15.0.
#[test]
fn test_sum_mixed_fifteen() {
    assert_eq!(sum_mixed(1i16, 2i32, 3i64, 4.0f32, 5.0f64), 15.0);
}

/// Test the fractional scenario: (0, 0, 0, 0.5, 0.25) = 0.75.
///
/// Both fractions are exact in binary, so the result is exact.
#[test]
fn test_sum_mixed_fractions() {
    assert_eq!(sum_mixed(0i16, 0i32, 0i64, 0.5f32, 0.25f64), 0.75);
}

/// Test a sum with a negative wide integer: (1, 2, -3, 4.25, 5.75) = 10.0.
#[test]
fn test_sum_mixed_negative_term() {
    let total = sum_mixed(1i16, 2i32, -3i64, 4.25f32, 5.75f64);
    assert_eq!(total, 10.0);
}

/// Test extreme narrow-integer inputs.
#[test]
fn test_sum_mixed_narrow_extremes() {
    let total = sum_mixed(i16::MIN, i32::MAX, 0i64, 0.0f32, 0.0f64);
    assert_eq!(total, f64::from(i16::MIN) + f64::from(i32::MAX));
}

// ============================================================================
// Commutativity Tests
// ============================================================================

/// Test that reversing the argument order changes nothing beyond rounding.
#[test]
fn test_sum_mixed_commutative() {
    let forward = sum_mixed(1i16, 2i32, -3i64, 4.25f32, 5.75f64);
    let reverse = sum_mixed(5.75f64, 4.25f32, -3i64, 2i32, 1i16);

    assert_relative_eq!(forward, reverse, max_relative = 1e-9);
}

/// Test commutativity on rounding-sensitive magnitudes.
#[test]
fn test_sum_mixed_commutative_mixed_magnitudes() {
    let forward = sum_mixed(30_000i16, 2_000_000_000i32, 1i64 << 40, 0.1f32, 1e-9f64);
    let reverse = sum_mixed(1e-9f64, 0.1f32, 1i64 << 40, 2_000_000_000i32, 30_000i16);

    assert_relative_eq!(forward, reverse, max_relative = 1e-9);
}

// ============================================================================
// Widening Tests
// ============================================================================

/// Test that widening preserves integers inside the exact range.
#[test]
fn test_widen_exact_integers() {
    assert_eq!(widen(i16::MAX), 32767.0);
    assert_eq!(widen(-1i32), -1.0);
    assert_eq!(widen(1i64 << 52), 4_503_599_627_370_496.0);
}

/// Test that f32 widens exactly.
#[test]
fn test_widen_f32_exact() {
    assert_eq!(widen(4.25f32), 4.25);
    assert_eq!(widen(f32::MAX), f32::MAX as f64);
}

/// Test inherent rounding beyond f64's exact-integer range.
///
/// 2^53 + 1 is not representable; widening rounds to the nearest even,
/// which is 2^53. Expected, not an error.
#[test]
fn test_widen_beyond_exact_range_rounds() {
    let v = (1i64 << 53) + 1;
    assert_eq!(widen(v), 9_007_199_254_740_992.0);
}
