//! The external vector reference record.

use std::fmt;

use bytemuck::{Pod, Zeroable};

use regolith_core::HEADER_LEN;

/// Stable external identity of a region-backed vector.
///
/// Two little-endian `u32` fields: the byte offset from the region base to
/// the backing allocation's payload, and the live element count. The
/// record lives *outside* the region bytes; a [`Vector`](crate::Vector)
/// borrows it mutably and rewrites `offset` whenever a growth operation
/// relocates the backing allocation.
///
/// `offset == 0` denotes an unbound vector — a bound offset is always at
/// least two header lengths (past the data atom's header and payload, and
/// its own allocation header).
///
/// The record is itself `Pod`, so callers may persist it alongside the
/// region (for example inside the data atom's reserved payload).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct VectorRef {
    /// Byte offset from the region base to the allocation payload, or zero.
    pub offset: u32,
    /// Live element count.
    pub count: u32,
}

impl VectorRef {
    /// An unbound reference.
    pub const fn new() -> Self {
        Self {
            offset: 0,
            count: 0,
        }
    }

    /// Whether this reference currently points at an allocation.
    pub const fn is_bound(&self) -> bool {
        self.offset != 0
    }

    /// Offset of the backing allocation's atom header, if bound.
    pub fn atom(&self) -> Option<u32> {
        self.is_bound().then(|| self.offset - HEADER_LEN)
    }
}

impl Default for VectorRef {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VectorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VectorRef(offset={}, count={})", self.offset, self.count)
    }
}
