//! Error handling for the lattica ecosystem

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Standard library error conversions
#[cfg(feature = "std")]
impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0, // unknown at this point
            actual: 0,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
