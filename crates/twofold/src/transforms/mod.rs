//! Layer 3: Transforms
//!
//! # Purpose
//!
//! This layer provides the in-place doubling kernels. They mutate
//! caller-owned buffers and know nothing about counts, validation, or
//! sinks; the slicing to the first `count` elements happens above them.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Sinks
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Transforms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// In-place doubling of slices and row slices.
pub mod doubling;
