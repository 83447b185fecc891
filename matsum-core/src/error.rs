//! Error types for matsum operations

/// Errors that can occur during matsum operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SumError {
    /// Worker count must be at least one
    InvalidWorkerCount,
    /// Rows of unequal length
    RaggedMatrix,
    /// Backing buffer length does not match rows x cols
    DimensionMismatch,
    /// rows x cols does not fit in usize
    SizeOverflow,
    /// Worker pool could not be constructed
    ExecutorUnavailable,
}

impl core::fmt::Display for SumError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SumError::InvalidWorkerCount => "Worker count must be at least one",
            SumError::RaggedMatrix => "Matrix rows have unequal lengths",
            SumError::DimensionMismatch => "Buffer length does not match matrix dimensions",
            SumError::SizeOverflow => "Matrix element count overflows usize",
            SumError::ExecutorUnavailable => "Worker pool could not be constructed",
        };
        write!(f, "{msg}")
    }
}

/// Result type for matsum operations
pub type Result<T> = core::result::Result<T, SumError>;
