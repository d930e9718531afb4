//! Read-only traversal and validation of regolith region layouts.
//!
//! This crate is the read side of the format: it binds a borrowed byte
//! slice as a [`RegionView`], walks the atom chain forward and backward,
//! and checks the whole-region invariants. It performs no mutation — a
//! device that consumes a region read-only needs only this crate and
//! `regolith-core`. Formatting and allocation live in `regolith-alloc`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod iter;
mod region;
mod validate;

pub use iter::{Atoms, AtomsRev};
pub use region::RegionView;
pub use validate::{end_atom, validate_layout};
