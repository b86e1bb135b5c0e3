//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numeric functions with no buffer or sink
//! involvement: widening of mixed-width values to double precision and the
//! five-term promoted sum.
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
//! Layer 3: Transforms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Numeric widening and mixed-width summation.
pub mod promote;
