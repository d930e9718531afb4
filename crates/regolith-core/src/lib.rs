//! Core byte-format definitions for regolith regions.
//!
//! This is the leaf crate with no dependencies. It defines the stable
//! on-region byte format — the atom header, its four-character identifier
//! tags, and the sixteen-byte alignment rules — plus the error taxonomy
//! shared by every other regolith crate.
//!
//! Everything here is pure data and codec: a device that sees a region as
//! raw bytes needs exactly these definitions and nothing from the host-only
//! mutation crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod align;
pub mod atom;
pub mod error;

// Re-export core types at crate root for convenience.
pub use align::{aligned_size, aligned_size_of, is_aligned, ALIGNMENT};
pub use atom::{AtomHeader, AtomKind, HEADER_LEN};
pub use error::RegionError;
