//! Host-side formatting and in-place allocation for regolith regions.
//!
//! This crate is the write side of the format. [`RegionMut`] binds a
//! mutable byte slice and repartitions it: [`RegionMut::format`] lays down
//! the initial `data | free | end` chain, [`RegionMut::reserve`] carves
//! allocations out of free atoms first-fit, [`RegionMut::resize`] shrinks,
//! grows in place, or relocates, and [`RegionMut::free`] returns spans to
//! the free chain with bidirectional coalescing.
//!
//! Every public mutation preserves the whole-region invariants checked by
//! `regolith-layout`, and is atomic: on error the region bytes are exactly
//! as they were before the call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod ops;
mod region;

pub use region::{format, RegionMut};
