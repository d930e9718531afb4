//! Borrowed read-only view of a region's bytes.

use regolith_core::{is_aligned, AtomHeader, RegionError, ALIGNMENT, HEADER_LEN};

use crate::iter::{Atoms, AtomsRev};

/// A read-only view of a caller-owned region.
///
/// Binding checks only the cheap byte-buffer preconditions (base alignment,
/// length bounds); whether the bytes actually form a valid atom chain is a
/// separate question answered by [`RegionView::check`]. All atom accessors
/// therefore return `Option` and degrade gracefully on garbage input.
///
/// Atoms are addressed by their byte offset from the region base. Offsets
/// are stable for the lifetime of the atom — they are what allocation
/// handles and vector references store.
#[derive(Clone, Copy)]
pub struct RegionView<'a> {
    bytes: &'a [u8],
}

impl<'a> RegionView<'a> {
    /// Bind a byte slice as a region view.
    ///
    /// Fails with [`RegionError::InvalidArgument`] if the base pointer is
    /// not sixteen-byte aligned, or the length is not a multiple of sixteen,
    /// below the two-atom minimum, or beyond `u32` addressing.
    pub fn new(bytes: &'a [u8]) -> Result<Self, RegionError> {
        check_region_bytes(bytes)?;
        Ok(Self { bytes })
    }

    /// Total region length in bytes.
    pub fn length(&self) -> u32 {
        self.bytes.len() as u32
    }

    /// The raw region bytes.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Offset of the end sentinel: the final sixteen-byte slot.
    pub fn end_offset(&self) -> u32 {
        self.length() - HEADER_LEN
    }

    /// Decode the atom header at `offset`.
    ///
    /// Returns `None` if `offset` is unaligned or does not leave room for a
    /// full header.
    pub fn header(&self, offset: u32) -> Option<AtomHeader> {
        if !is_aligned(offset) || offset > self.end_offset() {
            return None;
        }
        AtomHeader::decode(&self.bytes[offset as usize..])
    }

    /// Offset of the atom after the one at `offset`.
    ///
    /// The end sentinel has no successor; a chain that would step past the
    /// sentinel slot yields `None`.
    pub fn next(&self, offset: u32) -> Option<u32> {
        if offset >= self.end_offset() {
            return None;
        }
        let header = self.header(offset)?;
        let next = offset.checked_add(header.length)?;
        if next > self.end_offset() {
            return None;
        }
        Some(next)
    }

    /// Offset of the atom before the one at `offset`.
    ///
    /// The first atom (`previous == 0`) has no predecessor.
    pub fn previous(&self, offset: u32) -> Option<u32> {
        let header = self.header(offset)?;
        if header.previous == 0 {
            return None;
        }
        offset.checked_sub(header.previous)
    }

    /// Payload bytes of the atom at `offset`.
    ///
    /// Returns `None` when the header is unreadable or claims a span that
    /// leaves the region.
    pub fn contents(&self, offset: u32) -> Option<&'a [u8]> {
        let header = self.header(offset)?;
        if header.length < HEADER_LEN {
            return None;
        }
        let start = offset.checked_add(HEADER_LEN)? as usize;
        let end = offset.checked_add(header.length)? as usize;
        if end > self.bytes.len() {
            return None;
        }
        Some(&self.bytes[start..end])
    }

    /// Payload bytes of the data atom: the caller-reserved header content.
    pub fn data_contents(&self) -> Option<&'a [u8]> {
        self.contents(0)
    }

    /// Forward iterator over the atom chain, starting at the data atom.
    ///
    /// Yields `(offset, header)` pairs; the end sentinel is the past-the-end
    /// position and is not yielded. Stops early if the chain is malformed.
    pub fn atoms(&self) -> Atoms<'a> {
        self.atoms_from(0)
    }

    /// Forward iterator starting from the atom at `offset`.
    pub fn atoms_from(&self, offset: u32) -> Atoms<'a> {
        Atoms::new(*self, offset)
    }

    /// Backward iterator over the atom chain, starting at the atom before
    /// the end sentinel and retreating by each atom's `previous` width.
    ///
    /// Yields `(offset, header)` pairs down to and including the data atom.
    pub fn atoms_rev(&self) -> AtomsRev<'a> {
        AtomsRev::from_sentinel(*self)
    }

    /// Backward iterator starting from (and including) the atom at `offset`.
    pub fn atoms_rev_from(&self, offset: u32) -> AtomsRev<'a> {
        AtomsRev::new(*self, offset)
    }
}

/// Buffer precondition checks shared by read and write bindings.
pub(crate) fn check_region_bytes(bytes: &[u8]) -> Result<(), RegionError> {
    if bytes.as_ptr() as usize % ALIGNMENT as usize != 0 {
        return Err(RegionError::InvalidArgument {
            reason: "region base is not sixteen-byte aligned".into(),
        });
    }
    if bytes.len() > u32::MAX as usize {
        return Err(RegionError::InvalidArgument {
            reason: "region exceeds u32 addressing".into(),
        });
    }
    let length = bytes.len() as u32;
    if length < 2 * HEADER_LEN {
        return Err(RegionError::InvalidArgument {
            reason: "region is shorter than two atom headers".into(),
        });
    }
    if !is_aligned(length) {
        return Err(RegionError::InvalidArgument {
            reason: "region length is not a multiple of sixteen".into(),
        });
    }
    Ok(())
}
