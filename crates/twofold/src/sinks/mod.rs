//! Layer 5: Sinks
//!
//! # Purpose
//!
//! This layer defines the forwarding seam: after an operation has mutated
//! its buffer, it hands the buffer and its count to a sink. Sinks are
//! consumed, not defined, by the operations; what a sink does with the data
//! (display, transmit, record) is outside this crate's contract.
//!
//! Sinks are total: they accept a count and a buffer and return nothing.
//! The count tells the sink how much of the buffer the operation processed;
//! the remainder is forwarded untouched for sinks that want it.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Sinks ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Transforms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

// Internal dependencies
use crate::primitives::row::Row;

/// Reference sink implementations.
pub mod reference;

// ============================================================================
// Sink Traits
// ============================================================================

/// Consumer of a finished matrix.
///
/// Invoked exactly once per successful matrix operation with the row count
/// and the full, mutated matrix buffer. Rows at index `>= count` were not
/// processed.
pub trait MatrixSink<T> {
    /// Accept `count` processed rows of `matrix`.
    fn send(&mut self, count: usize, matrix: &[Row<T>]);
}

/// Consumer of a finished vector.
///
/// Invoked exactly once per successful vector operation with the element
/// count and the full, mutated vector buffer. Elements at index `>= count`
/// were not processed.
pub trait VectorSink<T> {
    /// Accept `count` processed elements of `vector`.
    fn output(&mut self, count: usize, vector: &[T]);
}
