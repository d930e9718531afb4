//! Forward and backward iterators over the atom chain.

use regolith_core::{is_aligned, AtomHeader, HEADER_LEN};

use crate::region::RegionView;

/// Forward iterator over a region's atoms.
///
/// Steps by each atom's `length`. The end sentinel is the past-the-end
/// position: iteration yields every atom before it and then stops. A
/// malformed chain (unaligned or under-length atom, span leaving the
/// region) ends the iteration early rather than yielding garbage.
pub struct Atoms<'a> {
    region: RegionView<'a>,
    cursor: Option<u32>,
}

impl<'a> Atoms<'a> {
    pub(crate) fn new(region: RegionView<'a>, start: u32) -> Self {
        Self {
            region,
            cursor: Some(start),
        }
    }
}

impl Iterator for Atoms<'_> {
    type Item = (u32, AtomHeader);

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.cursor.take()?;
        if offset >= self.region.end_offset() {
            return None;
        }
        let header = self.region.header(offset)?;
        if header.length < HEADER_LEN || !is_aligned(header.length) {
            return None;
        }
        self.cursor = offset
            .checked_add(header.length)
            .filter(|&next| next <= self.region.end_offset());
        Some((offset, header))
    }
}

/// Backward iterator over a region's atoms.
///
/// Steps by each atom's `previous` width, yielding atoms in reverse order
/// down to and including the data atom (`previous == 0`). As with
/// [`Atoms`], a malformed chain ends the iteration early.
pub struct AtomsRev<'a> {
    region: RegionView<'a>,
    cursor: Option<u32>,
}

impl<'a> AtomsRev<'a> {
    pub(crate) fn new(region: RegionView<'a>, start: u32) -> Self {
        Self {
            region,
            cursor: Some(start),
        }
    }

    /// Start from the atom preceding the end sentinel, so the sentinel
    /// itself is not yielded.
    pub(crate) fn from_sentinel(region: RegionView<'a>) -> Self {
        let cursor = region.previous(region.end_offset());
        Self { region, cursor }
    }
}

impl Iterator for AtomsRev<'_> {
    type Item = (u32, AtomHeader);

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.cursor.take()?;
        let header = self.region.header(offset)?;
        if offset > 0 {
            self.cursor = offset
                .checked_sub(header.previous)
                .filter(|_| header.previous > 0 && is_aligned(header.previous));
        }
        Some((offset, header))
    }
}
