//! Reserve, resize, and free.

use regolith_core::{aligned_size, AtomHeader, AtomKind, RegionError, HEADER_LEN};

use crate::region::RegionMut;

impl RegionMut<'_> {
    /// Allocate a new atom with payload capacity for `contents` bytes.
    ///
    /// Placement is a first-fit forward scan from the data atom; the chosen
    /// free atom is split in place, or consumed whole when it fits exactly.
    /// `contents == 0` is accepted and yields a header-only atom. Returns
    /// the new allocation's atom offset.
    pub fn reserve(&mut self, contents: u32) -> Result<u32, RegionError> {
        let needed = HEADER_LEN + self.aligned_request(contents)?;

        let end = self.view().end_offset();
        let mut offset = 0u32;
        while offset < end {
            let header = self.header_at(offset);
            if header.kind() == Some(AtomKind::Free) && header.length >= needed {
                return Ok(self.carve(offset, header, needed));
            }
            offset += header.length;
        }
        Err(RegionError::OutOfSpace {
            requested: contents as usize,
        })
    }

    /// Resize the allocation at `atom` to a payload capacity of `contents`
    /// bytes, relocating if it cannot grow in place.
    ///
    /// Returns the allocation's offset, which differs from `atom` only when
    /// relocation occurred; the payload (up to the smaller of the old and
    /// new capacities) is preserved across a move. On [`RegionError::OutOfSpace`]
    /// the original allocation is untouched.
    pub fn resize(&mut self, atom: u32, contents: u32) -> Result<u32, RegionError> {
        let header = self.allocation_at(atom)?;
        let requested = self.aligned_request(contents)?;
        let current = header.contents_size();

        if requested == current {
            return Ok(atom);
        }
        if requested < current {
            self.shrink(atom, header, requested);
            return Ok(atom);
        }

        let next_at = atom + header.length;
        let next = self.header_at(next_at);
        if next.kind() == Some(AtomKind::Free) && requested - current <= next.length {
            self.grow_in_place(atom, header, next, requested);
            return Ok(atom);
        }

        let new_atom = self.reserve(contents)?;
        let src = (atom + HEADER_LEN) as usize;
        let dst = (new_atom + HEADER_LEN) as usize;
        let copied = current.min(requested) as usize;
        self.raw_bytes_mut().copy_within(src..src + copied, dst);
        self.free(atom)?;
        Ok(new_atom)
    }

    /// Convert the allocation at `atom` into free space, coalescing with a
    /// free neighbor on either side. Returns the resulting free atom's
    /// offset.
    ///
    /// Fails with [`RegionError::InvalidArgument`] unless `atom` is a live
    /// allocation.
    pub fn free(&mut self, atom: u32) -> Result<u32, RegionError> {
        let header = self.allocation_at(atom)?;

        let mut offset = atom;
        let mut merged = AtomHeader::new(AtomKind::Free, header.length, header.previous);

        let next = self.header_at(atom + header.length);
        if next.kind() == Some(AtomKind::Free) {
            merged.length += next.length;
        }

        if merged.previous != 0 {
            let before_at = atom - merged.previous;
            let before = self.header_at(before_at);
            if before.kind() == Some(AtomKind::Free) {
                offset = before_at;
                merged = AtomHeader::new(AtomKind::Free, before.length + merged.length, before.previous);
            }
        }

        self.put_header(offset, merged);
        self.fix_previous(offset + merged.length, merged.length);
        Ok(offset)
    }

    /// Round a payload request up to alignment, rejecting requests that
    /// cannot fit in this region at all.
    fn aligned_request(&self, contents: u32) -> Result<u32, RegionError> {
        if contents as u64 + u64::from(HEADER_LEN) > u64::from(self.length()) {
            return Err(RegionError::OutOfSpace {
                requested: contents as usize,
            });
        }
        Ok(aligned_size(contents))
    }

    /// Turn the free atom at `offset` into an allocation of `needed` total
    /// bytes, splitting off the residue as a smaller free atom.
    fn carve(&mut self, offset: u32, free: AtomHeader, needed: u32) -> u32 {
        let residue = free.length - needed;
        if residue == 0 {
            self.put_header(
                offset,
                AtomHeader::new(AtomKind::Allocation, free.length, free.previous),
            );
        } else {
            self.put_header(
                offset,
                AtomHeader::new(AtomKind::Allocation, needed, free.previous),
            );
            let free_at = offset + needed;
            self.put_header(free_at, AtomHeader::new(AtomKind::Free, residue, needed));
            self.fix_previous(free_at + residue, residue);
        }
        offset
    }

    fn shrink(&mut self, atom: u32, header: AtomHeader, requested: u32) {
        let new_len = HEADER_LEN + requested;
        let residue = header.length - new_len;
        self.put_header(
            atom,
            AtomHeader::new(AtomKind::Allocation, new_len, header.previous),
        );

        let free_at = atom + new_len;
        let next_at = atom + header.length;
        let next = self.header_at(next_at);
        if next.kind() == Some(AtomKind::Free) {
            let merged = residue + next.length;
            self.put_header(free_at, AtomHeader::new(AtomKind::Free, merged, new_len));
            self.fix_previous(free_at + merged, merged);
        } else {
            self.put_header(free_at, AtomHeader::new(AtomKind::Free, residue, new_len));
            self.fix_previous(next_at, residue);
        }
    }

    fn grow_in_place(&mut self, atom: u32, header: AtomHeader, next: AtomHeader, requested: u32) {
        let new_len = HEADER_LEN + requested;
        let leftover = header.length + next.length - new_len;
        self.put_header(
            atom,
            AtomHeader::new(AtomKind::Allocation, new_len, header.previous),
        );

        if leftover == 0 {
            self.fix_previous(atom + new_len, new_len);
        } else {
            let free_at = atom + new_len;
            self.put_header(free_at, AtomHeader::new(AtomKind::Free, leftover, new_len));
            self.fix_previous(free_at + leftover, leftover);
        }
    }

    /// Rewrite the `previous` width of the atom at `offset`.
    fn fix_previous(&mut self, offset: u32, previous: u32) {
        let mut header = self.header_at(offset);
        header.previous = previous;
        self.put_header(offset, header);
    }
}
