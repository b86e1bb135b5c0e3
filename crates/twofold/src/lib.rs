//! # twofold — in-place doubling transforms and mixed-width summation
//!
//! Three independent, stateless operations over caller-owned buffers:
//!
//! 1. **Matrix doubling** — scale every element of the first `n` rows of an
//!    n×3 integer matrix by 2, in place, then forward the mutated matrix and
//!    its row count to a caller-supplied sink.
//! 2. **Vector doubling** — scale the first `n` elements of an integer
//!    vector by 2, in place, then forward the mutated vector and the element
//!    count to a caller-supplied sink.
//! 3. **Mixed-width summation** — sum five numeric values of different
//!    native widths as `f64`, widening every input to double precision
//!    before the add chain.
//!
//! The operations never allocate and retain no state across calls; buffers
//! are borrowed, mutated in place, and forwarded. Sinks are the only
//! extension point: they receive the finished buffer together with the
//! count and do whatever downstream handling they like (display, transmit,
//! record).
//!
//! ## Quick Start
//!
//! ### Doubling a matrix
//!
//! ```rust
//! use twofold::prelude::*;
//!
//! let mut matrix = [[1, 2, 3], [4, 5, 6]];
//! let mut sink = MatrixRecorder::new();
//!
//! double_matrix(2, &mut matrix, &mut sink)?;
//!
//! assert_eq!(matrix, [[2, 4, 6], [8, 10, 12]]);
//! assert_eq!(sink.invocations, 1);
//! # Result::<(), TransformError>::Ok(())
//! ```
//!
//! ### Doubling a vector prefix
//!
//! Only the first `count` elements are touched; the rest of the buffer is
//! forwarded unchanged:
//!
//! ```rust
//! use twofold::prelude::*;
//!
//! let mut vector = [1, 2, 3, 99];
//! let mut sink = VectorRecorder::new();
//!
//! double_vector(3, &mut vector, &mut sink)?;
//!
//! assert_eq!(vector, [2, 4, 6, 99]);
//! assert_eq!(sink.last_count, Some(3));
//! # Result::<(), TransformError>::Ok(())
//! ```
//!
//! ### Mixed-width summation
//!
//! ```rust
//! use twofold::prelude::*;
//!
//! let total = sum_mixed(1i16, 2i32, -3i64, 4.25f32, 5.75f64);
//! assert_eq!(total, 10.0);
//! ```
//!
//! ## Result and Error Handling
//!
//! The doubling operations return `Result<(), TransformError>`. The only
//! failure mode is a precondition violation: a `count` larger than the
//! buffer it describes. Validation happens before any mutation, so a failed
//! call leaves the buffer untouched and never invokes the sink.
//!
//! ```rust
//! use twofold::prelude::*;
//!
//! let mut vector = [1, 2, 3];
//! let mut sink = VectorRecorder::new();
//!
//! let err = double_vector(5, &mut vector, &mut sink).unwrap_err();
//! assert!(matches!(err, TransformError::ElementCountExceeded { got: 5, len: 3 }));
//! assert_eq!(vector, [1, 2, 3]);
//! assert_eq!(sink.invocations, 0);
//! ```
//!
//! ## Overflow
//!
//! Doubling uses wrapping multiplication: an element that overflows its
//! integer width wraps in two's complement instead of panicking. This keeps
//! release and debug builds identical and matches the fixed-width integer
//! semantics the transforms were written against.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! twofold = { version = "0.1", default-features = false }
//! ```
//!
//! The core operations and sink traits are allocation-free; only the
//! recording sinks require `alloc`, and `StdoutSink` requires `std`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - row type and shared error type.
mod primitives;

// Layer 2: Math - numeric widening and mixed-width summation.
mod math;

// Layer 3: Transforms - in-place doubling kernels.
mod transforms;

// Layer 4: Engine - precondition validation.
mod engine;

// Layer 5: Sinks - forwarding traits and reference sinks.
mod sinks;

// Public operations composing validation, transform, and forwarding.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        double_matrix, double_vector, sum_mixed, widen, MatrixRecorder, MatrixSink, Row,
        RowSumRelay, TransformError, VectorRecorder, VectorSink, ROW_WIDTH,
    };

    #[cfg(feature = "std")]
    pub use crate::api::StdoutSink;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod transforms {
        pub use crate::transforms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod sinks {
        pub use crate::sinks::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
