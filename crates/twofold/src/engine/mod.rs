//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer checks preconditions before any buffer is touched. A count
//! that overruns its buffer is rejected here, fail-fast, so the transform
//! kernels below never need bounds logic of their own.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Sinks
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Transforms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Precondition validation.
pub mod validator;
