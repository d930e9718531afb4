//! The atom record: fixed sixteen-byte headers that partition a region.
//!
//! A formatted region is a doubly-linked chain of atoms. Each atom starts
//! with an [`AtomHeader`]; `length` walks the chain forward, `previous`
//! walks it backward. Both are byte widths, not pointers, so the chain is
//! position-independent and relocatable without fix-ups.
//!
//! All header fields are stored little-endian. The identifier is a
//! four-character code compared as a single `u32` word; see [`AtomKind`]
//! for the exact byte spellings.

use std::fmt;

/// Byte length of every atom header. Also the length of the end sentinel
/// and the minimum legal atom size.
pub const HEADER_LEN: u32 = 16;

/// The four atom record kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AtomKind {
    /// First atom of every formatted region. Its payload is reserved for
    /// caller-defined header content; it lives as long as the region.
    Data,
    /// A live user allocation. The payload is user-visible storage.
    Allocation,
    /// An unallocated span. Two adjacent free atoms never coexist.
    Free,
    /// Final atom of every formatted region: a header-only sentinel.
    End,
}

impl AtomKind {
    /// The identifier word for this kind.
    ///
    /// Tags are the big-endian reading of the four-character mnemonic, so
    /// that the little-endian bytes in the region spell the mnemonic
    /// reversed: `"data"` is stored as `"atad"`, `"aloc"` as `"cola"`,
    /// `"free"` as `"eerf"`, `"end "` as `" dne"`.
    pub const fn tag(self) -> u32 {
        u32::from_be_bytes(match self {
            AtomKind::Data => *b"data",
            AtomKind::Allocation => *b"aloc",
            AtomKind::Free => *b"free",
            AtomKind::End => *b"end ",
        })
    }

    /// Decode an identifier word, or `None` if it is not one of the four
    /// known tags.
    pub const fn from_tag(tag: u32) -> Option<Self> {
        if tag == AtomKind::Data.tag() {
            Some(AtomKind::Data)
        } else if tag == AtomKind::Allocation.tag() {
            Some(AtomKind::Allocation)
        } else if tag == AtomKind::Free.tag() {
            Some(AtomKind::Free)
        } else if tag == AtomKind::End.tag() {
            Some(AtomKind::End)
        } else {
            None
        }
    }
}

impl fmt::Display for AtomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AtomKind::Data => "data",
            AtomKind::Allocation => "allocation",
            AtomKind::Free => "free",
            AtomKind::End => "end",
        };
        f.write_str(name)
    }
}

/// Decoded form of one atom header.
///
/// `identifier` is kept as the raw word rather than an [`AtomKind`] so that
/// validation can observe unknown tags; use [`AtomHeader::kind`] to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtomHeader {
    /// Total size of this atom including the header, in bytes. Always a
    /// positive multiple of sixteen in a valid region.
    pub length: u32,
    /// Identifier word; see [`AtomKind::tag`].
    pub identifier: u32,
    /// Length of the immediately preceding atom, or zero for the first.
    pub previous: u32,
    /// Kind-specific scratch; zero unless an atom kind defines it.
    pub user: u32,
}

impl AtomHeader {
    /// Build a header for `kind` with zeroed scratch.
    pub fn new(kind: AtomKind, length: u32, previous: u32) -> Self {
        Self {
            length,
            identifier: kind.tag(),
            previous,
            user: 0,
        }
    }

    /// Decode a header from the first sixteen bytes of `bytes`.
    ///
    /// Returns `None` if fewer than sixteen bytes are given.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < HEADER_LEN as usize {
            return None;
        }
        Some(Self {
            length: read_u32(bytes, 0),
            identifier: read_u32(bytes, 4),
            previous: read_u32(bytes, 8),
            user: read_u32(bytes, 12),
        })
    }

    /// Encode this header into the first sixteen bytes of `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than sixteen bytes.
    pub fn encode(&self, out: &mut [u8]) {
        write_u32(out, 0, self.length);
        write_u32(out, 4, self.identifier);
        write_u32(out, 8, self.previous);
        write_u32(out, 12, self.user);
    }

    /// The decoded kind, or `None` for an unknown identifier word.
    pub fn kind(&self) -> Option<AtomKind> {
        AtomKind::from_tag(self.identifier)
    }

    /// Payload size in bytes (`length` minus the header).
    ///
    /// Saturates to zero on a malformed under-length header.
    pub fn contents_size(&self) -> u32 {
        self.length.saturating_sub(HEADER_LEN)
    }

    /// Whether this atom is header-only.
    pub fn is_empty(&self) -> bool {
        self.length == HEADER_LEN
    }
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[at..at + 4]);
    u32::from_le_bytes(raw)
}

fn write_u32(bytes: &mut [u8], at: usize, value: u32) {
    bytes[at..at + 4].copy_from_slice(&value.to_le_bytes());
}
