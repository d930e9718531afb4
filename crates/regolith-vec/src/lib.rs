//! Typed growable vectors backed by regolith region allocations.
//!
//! A [`Vector`] models `Vec`-like semantics over one allocation atom in a
//! formatted region. The vector value owns no storage: it borrows the
//! region bytes and an external [`VectorRef`] record holding
//! `{offset, count}`. Any operation that relocates the backing allocation
//! rewrites the reference in place, so long-lived handles to "the same
//! vector" stay valid across reallocations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod element;
mod reference;
mod vector;

pub use element::element_compatible;
pub use reference::VectorRef;
pub use vector::Vector;
