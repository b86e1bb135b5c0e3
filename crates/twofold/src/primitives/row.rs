//! Fixed-width matrix row.
//!
//! A matrix is a slice of rows, and a row always has exactly
//! [`ROW_WIDTH`] columns. Encoding the column count in the type means the
//! matrix operations never need to validate the second dimension: a
//! `&mut [Row<T>]` cannot carry a short row.

/// Number of columns in every matrix row.
pub const ROW_WIDTH: usize = 3;

/// One matrix row: exactly [`ROW_WIDTH`] elements of `T`.
pub type Row<T> = [T; ROW_WIDTH];
