//! Shared test fixtures for the regolith crates.
//!
//! Provides [`AlignedRegion`], an owned zeroed byte buffer that satisfies
//! the sixteen-byte base-alignment precondition, and [`layout_summary`],
//! a compact rendering of a region's atom chain for assertions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use regolith_core::AtomKind;
use regolith_layout::RegionView;

/// An owned, zeroed, sixteen-byte-aligned byte buffer.
///
/// Backing storage is a `Vec<u128>`; the sixteen-byte element type pins the
/// base alignment that raw `Vec<u8>` allocations do not guarantee. Tests
/// borrow it as plain byte slices via [`AlignedRegion::bytes`] and
/// [`AlignedRegion::bytes_mut`].
pub struct AlignedRegion {
    words: Vec<u128>,
}

impl AlignedRegion {
    /// Allocate a zeroed region of `len` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `len` is not a multiple of sixteen.
    pub fn new(len: usize) -> Self {
        assert_eq!(len % 16, 0, "region length must be a multiple of sixteen");
        Self {
            words: vec![0u128; len / 16],
        }
    }

    /// The region as a byte slice.
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.words)
    }

    /// The region as a mutable byte slice.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.words)
    }

    /// Region length in bytes.
    pub fn len(&self) -> usize {
        self.words.len() * 16
    }

    /// Whether the region holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The atom chain of `bytes` as `(offset, kind, length)` triples, end
/// sentinel included.
///
/// # Panics
///
/// Panics if `bytes` does not bind as a region or an atom carries an
/// unknown identifier; summaries are for asserting over layouts the test
/// itself produced.
pub fn layout_summary(bytes: &[u8]) -> Vec<(u32, AtomKind, u32)> {
    let view = RegionView::new(bytes).expect("test region binds");
    let mut chain: Vec<(u32, AtomKind, u32)> = view
        .atoms()
        .map(|(offset, header)| {
            (
                offset,
                header.kind().expect("test region has known identifiers"),
                header.length,
            )
        })
        .collect();
    let end = view.end_offset();
    if let Some(header) = view.header(end) {
        if header.kind() == Some(AtomKind::End) {
            chain.push((end, AtomKind::End, header.length));
        }
    }
    chain
}
