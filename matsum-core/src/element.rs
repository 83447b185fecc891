//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! summed as matrix elements.

use core::ops::{Add, AddAssign};

/// Trait for types that can be summed as matrix elements
///
/// This trait defines the requirements for element types flowing through
/// the summation pipeline. All matrix element types must be:
/// - Copy: Can be copied without allocation
/// - PartialEq: Can be compared for equality
/// - Add / AddAssign: Can be accumulated
/// - Sized: Have a known size at compile time
pub trait MatrixElement:
    Copy + Clone + PartialEq + Sized + Add<Output = Self> + AddAssign
{
    /// Additive identity used to seed accumulators
    const ZERO: Self;

    /// Convert from f64 for generic construction
    ///
    /// This is used for generic matrix construction where the exact
    /// element type may not be known at compile time.
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    ///
    /// This is used for generic operations where a common numeric
    /// type is needed.
    fn to_f64(self) -> f64;
}

// Implement MatrixElement for standard numeric types

impl MatrixElement for f32 {
    const ZERO: Self = 0.0;

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for f64 {
    const ZERO: Self = 0.0;

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl MatrixElement for i32 {
    const ZERO: Self = 0;

    fn from_f64(value: f64) -> Self {
        value as i32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for i64 {
    const ZERO: Self = 0;

    fn from_f64(value: f64) -> Self {
        value as i64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for u32 {
    const ZERO: Self = 0;

    fn from_f64(value: f64) -> Self {
        value as u32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for u64 {
    const ZERO: Self = 0;

    fn from_f64(value: f64) -> Self {
        value as u64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}
