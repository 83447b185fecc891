#![no_std]

//! Matsum Core - Row-Partitioned Matrix Summation Primitives
//!
//! This crate provides the pure pieces of the summation pipeline: element
//! and matrix traits, partition policies, the accumulation kernel, and
//! input validation. Concurrent execution lives in the `matsum` crate.

pub mod element;
pub mod error;
pub mod matrix;
pub mod partition;
pub mod reduce;
pub mod validation;

pub use element::*;
pub use error::*;
pub use matrix::*;
pub use partition::*;
pub use reduce::*;
pub use validation::*;
