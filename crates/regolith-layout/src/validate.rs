//! Whole-region validation: the seven layout invariants.

use regolith_core::{is_aligned, AtomHeader, AtomKind, RegionError, HEADER_LEN};

use crate::region::RegionView;

impl RegionView<'_> {
    /// Walk the atom chain forward and check every layout invariant.
    ///
    /// Checked, in walk order:
    ///
    /// 1. the first atom is `data` with `previous == 0`;
    /// 2. every atom length is a positive multiple of sixteen;
    /// 3. every identifier is one of the four known tags;
    /// 4. every non-first atom's `previous` equals the preceding length;
    /// 5. no two adjacent atoms are both `free`;
    /// 6. the chain covers the region exactly and terminates in a
    ///    header-only `end` sentinel in the final slot;
    /// 7. no `end` atom occurs anywhere else.
    ///
    /// Stops at the first deviation and reports it with the offset of the
    /// offending atom.
    pub fn check(&self) -> Result<(), RegionError> {
        let invalid = |offset: u32, reason: &str| RegionError::InvalidLayout {
            offset,
            reason: reason.into(),
        };

        let length = self.length();
        let mut offset = 0u32;
        let mut preceding: Option<AtomHeader> = None;

        loop {
            let header = self
                .header(offset)
                .ok_or_else(|| invalid(offset, "unreadable atom header"))?;
            let kind = header
                .kind()
                .ok_or_else(|| invalid(offset, "unknown identifier"))?;

            if header.length < HEADER_LEN || !is_aligned(header.length) {
                return Err(invalid(
                    offset,
                    "atom length is not a positive multiple of sixteen",
                ));
            }

            match &preceding {
                None => {
                    if kind != AtomKind::Data {
                        return Err(invalid(offset, "first atom is not data"));
                    }
                    if header.previous != 0 {
                        return Err(invalid(offset, "first atom carries a previous length"));
                    }
                }
                Some(before) => {
                    if header.previous != before.length {
                        return Err(invalid(
                            offset,
                            "previous length does not match the preceding atom",
                        ));
                    }
                    if before.kind() == Some(AtomKind::Free) && kind == AtomKind::Free {
                        return Err(invalid(offset, "two adjacent free atoms"));
                    }
                }
            }

            if kind == AtomKind::End {
                if offset != length - HEADER_LEN {
                    return Err(invalid(offset, "end sentinel before the final atom slot"));
                }
                if !header.is_empty() {
                    return Err(invalid(offset, "end sentinel is not header-only"));
                }
                return Ok(());
            }

            let next = offset
                .checked_add(header.length)
                .ok_or_else(|| invalid(offset, "atom overruns the region"))?;
            if next > length {
                return Err(invalid(offset, "atom overruns the region"));
            }
            if next == length {
                return Err(invalid(offset, "last atom is not the end sentinel"));
            }

            preceding = Some(header);
            offset = next;
        }
    }

    /// Whether every layout invariant holds.
    pub fn validate(&self) -> bool {
        self.check().is_ok()
    }
}

/// Whether `bytes` is a bindable region whose layout invariants all hold.
///
/// Free-function form of [`RegionView::validate`] for callers holding a
/// bare byte slice.
pub fn validate_layout(bytes: &[u8]) -> bool {
    RegionView::new(bytes).is_ok_and(|view| view.validate())
}

/// The end sentinel's offset and header, if `bytes` binds as a region and
/// the final slot decodes.
pub fn end_atom(bytes: &[u8]) -> Option<(u32, AtomHeader)> {
    let view = RegionView::new(bytes).ok()?;
    let offset = view.end_offset();
    let header = view.header(offset)?;
    Some((offset, header))
}
