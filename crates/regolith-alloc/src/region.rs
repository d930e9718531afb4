//! Mutable region binding and initial formatting.

use regolith_core::{aligned_size, AtomHeader, AtomKind, RegionError, HEADER_LEN};
use regolith_layout::RegionView;

/// A host-side mutable binding of a caller-owned region.
///
/// The mutable counterpart of [`RegionView`]: same storage, mutability
/// decides the type. Obtain one either by formatting fresh bytes
/// ([`RegionMut::format`]) or by re-binding an already formatted region
/// ([`RegionMut::bind`]). Binding runs only the cheap buffer preconditions;
/// callers re-binding untrusted bytes should run
/// [`RegionView::check`](regolith_layout::RegionView::check) once first —
/// mutation on a malformed chain is not defended.
pub struct RegionMut<'a> {
    bytes: &'a mut [u8],
}

impl<'a> RegionMut<'a> {
    /// Bind an already formatted region for mutation.
    pub fn bind(bytes: &'a mut [u8]) -> Result<Self, RegionError> {
        RegionView::new(bytes)?;
        Ok(Self { bytes })
    }

    /// Initialize `bytes` as a freshly formatted region.
    ///
    /// With `reserved == 0` the chain is `data | free | end`; a nonzero
    /// `reserved` sizes the data atom's payload to `aligned(reserved)`
    /// bytes of caller header content (zeroed here). If the aligned
    /// reservation consumes all remaining space the free atom is omitted
    /// and the chain is `data | end`.
    ///
    /// Fails with [`RegionError::InvalidArgument`] on an unusable buffer
    /// and [`RegionError::OutOfSpace`] when `reserved` does not fit.
    pub fn format(bytes: &'a mut [u8], reserved: u32) -> Result<Self, RegionError> {
        let mut region = Self::bind(bytes)?;
        let length = region.length();
        let available = length - 2 * HEADER_LEN;

        if reserved > available || aligned_size(reserved) > available {
            return Err(RegionError::OutOfSpace {
                requested: reserved as usize,
            });
        }
        let reserved = aligned_size(reserved);

        let data_len = HEADER_LEN + reserved;
        region.bytes[HEADER_LEN as usize..data_len as usize].fill(0);
        region.put_header(0, AtomHeader::new(AtomKind::Data, data_len, 0));

        let span = length - data_len - HEADER_LEN;
        if span == 0 {
            region.put_header(data_len, AtomHeader::new(AtomKind::End, HEADER_LEN, data_len));
        } else {
            region.put_header(data_len, AtomHeader::new(AtomKind::Free, span, data_len));
            region.put_header(data_len + span, AtomHeader::new(AtomKind::End, HEADER_LEN, span));
        }
        Ok(region)
    }

    /// Total region length in bytes.
    pub fn length(&self) -> u32 {
        self.bytes.len() as u32
    }

    /// A read-only view of the same bytes.
    pub fn view(&self) -> RegionView<'_> {
        RegionView::new(self.bytes).expect("buffer preconditions were checked at binding")
    }

    /// Payload bytes of the allocation atom at `atom`.
    ///
    /// Fails with [`RegionError::InvalidArgument`] unless `atom` is a live
    /// allocation.
    pub fn contents(&self, atom: u32) -> Result<&[u8], RegionError> {
        let header = self.allocation_at(atom)?;
        let start = (atom + HEADER_LEN) as usize;
        let end = (atom + header.length) as usize;
        Ok(&self.bytes[start..end])
    }

    /// Mutable payload bytes of the allocation atom at `atom`.
    pub fn contents_mut(&mut self, atom: u32) -> Result<&mut [u8], RegionError> {
        let header = self.allocation_at(atom)?;
        let start = (atom + HEADER_LEN) as usize;
        let end = (atom + header.length) as usize;
        Ok(&mut self.bytes[start..end])
    }

    /// Mutable payload of the data atom: the caller-reserved header content.
    ///
    /// # Panics
    ///
    /// Panics if the region chain is malformed (the data atom's length must
    /// stay within the region).
    pub fn data_contents_mut(&mut self) -> &mut [u8] {
        let header = self.header_at(0);
        &mut self.bytes[HEADER_LEN as usize..header.length as usize]
    }

    pub(crate) fn raw_bytes_mut(&mut self) -> &mut [u8] {
        self.bytes
    }

    /// Decode the header at a trusted atom offset.
    ///
    /// # Panics
    ///
    /// Panics when `offset` does not leave room for a header; that only
    /// happens if the bound chain is malformed.
    pub(crate) fn header_at(&self, offset: u32) -> AtomHeader {
        AtomHeader::decode(&self.bytes[offset as usize..])
            .expect("atom offset stays inside the bound region")
    }

    pub(crate) fn put_header(&mut self, offset: u32, header: AtomHeader) {
        header.encode(&mut self.bytes[offset as usize..]);
    }

    /// The header at `atom` if it is a live allocation, else
    /// [`RegionError::InvalidArgument`].
    pub(crate) fn allocation_at(&self, atom: u32) -> Result<AtomHeader, RegionError> {
        let header = self.view().header(atom).ok_or(RegionError::InvalidArgument {
            reason: "offset does not address an atom header".into(),
        })?;
        if header.kind() != Some(AtomKind::Allocation) {
            return Err(RegionError::InvalidArgument {
                reason: "atom is not a live allocation".into(),
            });
        }
        Ok(header)
    }
}

/// Free-function form of [`RegionMut::format`].
pub fn format(bytes: &mut [u8], reserved: u32) -> Result<RegionMut<'_>, RegionError> {
    RegionMut::format(bytes, reserved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regolith_layout::validate_layout;
    use regolith_test_utils::{layout_summary, AlignedRegion};

    #[test]
    fn default_format_is_data_free_end() {
        let mut region = AlignedRegion::new(1024);
        RegionMut::format(region.bytes_mut(), 0).unwrap();

        assert!(validate_layout(region.bytes()));
        assert_eq!(
            layout_summary(region.bytes()),
            vec![
                (0, AtomKind::Data, 16),
                (16, AtomKind::Free, 992),
                (1008, AtomKind::End, 16),
            ]
        );
    }

    #[test]
    fn reserved_payload_grows_the_data_atom() {
        let mut region = AlignedRegion::new(1024);
        RegionMut::format(region.bytes_mut(), 27).unwrap();

        assert!(validate_layout(region.bytes()));
        assert_eq!(
            layout_summary(region.bytes()),
            vec![
                (0, AtomKind::Data, 48),
                (48, AtomKind::Free, 960),
                (1008, AtomKind::End, 16),
            ]
        );
    }

    #[test]
    fn minimum_region_omits_the_free_atom() {
        let mut region = AlignedRegion::new(32);
        RegionMut::format(region.bytes_mut(), 0).unwrap();

        assert!(validate_layout(region.bytes()));
        assert_eq!(
            layout_summary(region.bytes()),
            vec![(0, AtomKind::Data, 16), (16, AtomKind::End, 16)]
        );
    }

    #[test]
    fn reserved_consuming_all_space_omits_the_free_atom() {
        let mut region = AlignedRegion::new(128);
        RegionMut::format(region.bytes_mut(), 96).unwrap();

        assert_eq!(
            layout_summary(region.bytes()),
            vec![(0, AtomKind::Data, 112), (112, AtomKind::End, 16)]
        );
    }

    #[test]
    fn oversized_reservation_is_rejected() {
        let mut region = AlignedRegion::new(128);
        // 97 aligns to 112, one word past the 96 bytes on offer.
        assert!(matches!(
            RegionMut::format(region.bytes_mut(), 97),
            Err(RegionError::OutOfSpace { requested: 97 })
        ));
        assert!(matches!(
            RegionMut::format(region.bytes_mut(), u32::MAX),
            Err(RegionError::OutOfSpace { .. })
        ));
    }

    #[test]
    fn undersized_buffer_is_rejected() {
        let mut region = AlignedRegion::new(16);
        assert!(matches!(
            RegionMut::format(region.bytes_mut(), 0),
            Err(RegionError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn data_contents_are_zeroed_and_writable() {
        let mut region = AlignedRegion::new(256);
        region.bytes_mut()[20] = 0xFF;
        let mut formatted = RegionMut::format(region.bytes_mut(), 27).unwrap();

        assert_eq!(formatted.data_contents_mut().len(), 32);
        assert!(formatted.data_contents_mut().iter().all(|&b| b == 0));

        formatted.data_contents_mut()[0] = 0x42;
        assert_eq!(formatted.view().data_contents().unwrap()[0], 0x42);
    }
}
