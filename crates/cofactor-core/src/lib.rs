//! # cofactor-core — Foundational Types for Cofactor
//!
//! Every other crate in the workspace depends on `cofactor-core`; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Square by construction.** [`Matrix`] has private fields and a single
//!    validating constructor. Empty, ragged, non-square, and non-finite input
//!    is rejected at the boundary, so the determinant tracer downstream is a
//!    total function over every `Matrix` it can be handed.
//!
//! 2. **Immutable inputs.** Row operations (`minor`, `swap_rows`,
//!    `scale_row`, `transpose`) return new matrices. Nothing in the workspace
//!    mutates a matrix after construction.
//!
//! 3. **One error hierarchy.** [`MatrixError`], [`TraceError`], and the
//!    aggregating [`CofactorError`] live here and use `thiserror`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cofactor-*` crates.
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.

pub mod error;
pub mod matrix;

pub use error::{CofactorError, MatrixError, TraceError};
pub use matrix::Matrix;
