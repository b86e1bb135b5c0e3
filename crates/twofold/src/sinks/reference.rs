//! Reference sink implementations.
//!
//! ## Purpose
//!
//! This module provides ready-made sinks for the common downstream
//! handlings: recording the forwarded buffer for later inspection, printing
//! it, and relaying a matrix onward as a doubled vector of row sums.
//!
//! ## Key concepts
//!
//! * **Recorders**: [`MatrixRecorder`] and [`VectorRecorder`] copy the
//!   forwarded buffer and count each invocation. Tests lean on these.
//! * **Printing**: [`StdoutSink`] writes the processed prefix one element
//!   per line (`std` only).
//! * **Relaying**: [`RowSumRelay`] bridges the matrix side to the vector
//!   side: each processed row collapses to its element sum, the sums are
//!   doubled in place, and the result is forwarded to an inner vector sink.
//!
//! ## Non-goals
//!
//! * This module does not define the sink contract; see the traits in the
//!   parent module.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{PrimInt, WrappingAdd, WrappingMul};

// Internal dependencies
use crate::primitives::row::Row;
use crate::sinks::{MatrixSink, VectorSink};
use crate::transforms::doubling::double_slice;

// ============================================================================
// Recorders
// ============================================================================

/// Matrix sink that records each forwarded buffer.
///
/// Keeps a copy of the most recently forwarded matrix, the count it came
/// with, and the total number of invocations.
#[derive(Debug, Clone, Default)]
pub struct MatrixRecorder<T> {
    /// Number of times the sink has been invoked.
    pub invocations: usize,

    /// Count from the most recent invocation.
    pub last_count: Option<usize>,

    /// Copy of the most recently forwarded matrix buffer.
    pub rows: Vec<Row<T>>,
}

impl<T> MatrixRecorder<T> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            invocations: 0,
            last_count: None,
            rows: Vec::new(),
        }
    }
}

impl<T: Copy> MatrixSink<T> for MatrixRecorder<T> {
    fn send(&mut self, count: usize, matrix: &[Row<T>]) {
        self.invocations += 1;
        self.last_count = Some(count);
        self.rows.clear();
        self.rows.extend_from_slice(matrix);
    }
}

/// Vector sink that records each forwarded buffer.
#[derive(Debug, Clone, Default)]
pub struct VectorRecorder<T> {
    /// Number of times the sink has been invoked.
    pub invocations: usize,

    /// Count from the most recent invocation.
    pub last_count: Option<usize>,

    /// Copy of the most recently forwarded vector buffer.
    pub elements: Vec<T>,
}

impl<T> VectorRecorder<T> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            invocations: 0,
            last_count: None,
            elements: Vec::new(),
        }
    }
}

impl<T: Copy> VectorSink<T> for VectorRecorder<T> {
    fn output(&mut self, count: usize, vector: &[T]) {
        self.invocations += 1;
        self.last_count = Some(count);
        self.elements.clear();
        self.elements.extend_from_slice(vector);
    }
}

// ============================================================================
// Stdout Sink
// ============================================================================

/// Vector sink that prints the processed prefix, one element per line.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

#[cfg(feature = "std")]
impl<T: core::fmt::Display> VectorSink<T> for StdoutSink {
    fn output(&mut self, count: usize, vector: &[T]) {
        for v in &vector[..count] {
            println!("{v}");
        }
    }
}

// ============================================================================
// Row-Sum Relay
// ============================================================================

/// Matrix sink that forwards the doubled row sums to a vector sink.
///
/// Each of the `count` processed rows collapses to the wrapping sum of its
/// elements; the resulting vector is doubled in place and handed to the
/// inner sink with the same count. Additions wrap like the doubling kernels
/// do.
///
/// The relay reads only the processed prefix, so `count` must not exceed
/// the forwarded matrix's row count, which the doubling operations
/// guarantee.
#[derive(Debug, Clone, Default)]
pub struct RowSumRelay<S> {
    inner: S,
}

impl<S> RowSumRelay<S> {
    /// Wrap a vector sink.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Borrow the inner sink.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap the inner sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<T, S> MatrixSink<T> for RowSumRelay<S>
where
    T: PrimInt + WrappingAdd + WrappingMul,
    S: VectorSink<T>,
{
    fn send(&mut self, count: usize, matrix: &[Row<T>]) {
        let mut summed: Vec<T> = matrix[..count]
            .iter()
            .map(|row| row.iter().fold(T::zero(), |acc, v| acc.wrapping_add(v)))
            .collect();
        double_slice(&mut summed);
        self.inner.output(count, &summed);
    }
}
