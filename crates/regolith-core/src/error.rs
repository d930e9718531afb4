//! Error types shared across the regolith crates.

use std::error::Error;
use std::fmt;

/// Errors from binding, validating, or mutating a region.
///
/// Mutating operations are atomic: on error the region is exactly as it was
/// before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionError {
    /// No free atom can accommodate the request. The region is unchanged.
    OutOfSpace {
        /// Requested payload size in bytes.
        requested: usize,
    },
    /// The region bytes violate a layout invariant.
    InvalidLayout {
        /// Byte offset of the atom where validation stopped.
        offset: u32,
        /// Which invariant was violated.
        reason: String,
    },
    /// A caller-supplied argument is unusable: misaligned or undersized
    /// region, an offset that is not a live allocation, an incompatible
    /// element type.
    InvalidArgument {
        /// What was wrong with the argument.
        reason: String,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfSpace { requested } => {
                write!(f, "out of space: no free atom holds {requested} bytes")
            }
            Self::InvalidLayout { offset, reason } => {
                write!(f, "invalid layout at offset {offset}: {reason}")
            }
            Self::InvalidArgument { reason } => {
                write!(f, "invalid argument: {reason}")
            }
        }
    }
}

impl Error for RegionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = RegionError::OutOfSpace { requested: 512 };
        assert_eq!(err.to_string(), "out of space: no free atom holds 512 bytes");

        let err = RegionError::InvalidLayout {
            offset: 48,
            reason: "two adjacent free atoms".into(),
        };
        assert!(err.to_string().contains("offset 48"));
        assert!(err.to_string().contains("adjacent free"));
    }
}
