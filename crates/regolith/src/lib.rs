//! Regolith: a self-describing in-place allocator and typed vectors over
//! caller-supplied byte regions.
//!
//! A formatted region is a doubly-linked chain of sixteen-byte-header
//! records ("atoms") that partitions every byte of the buffer. All
//! bookkeeping lives inside the region itself, so a region is relocatable,
//! persistable, and shareable as-is with a device that reads the same
//! bytes — the reading side needs only the byte format, never the host
//! allocator.
//!
//! This is the facade crate re-exporting the public API of the regolith
//! sub-crates. For most users, adding `regolith` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use regolith::prelude::*;
//!
//! // A sixteen-byte-aligned kilobyte; `u128` words pin the base alignment.
//! let mut words = vec![0u128; 64];
//! let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
//!
//! // Partition it into the initial data | free | end chain.
//! regolith::alloc::format(bytes, 0).unwrap();
//! assert!(regolith::layout::validate_layout(bytes));
//!
//! // Grow a typed vector inside it through a stable external reference.
//! let mut vref = VectorRef::new();
//! let mut numbers: Vector<'_, u32> = Vector::bind(&mut vref, bytes).unwrap();
//! numbers.assign(&[1, 2, 3]).unwrap();
//! numbers.push_back(4).unwrap();
//! assert_eq!(numbers.as_slice(), &[1, 2, 3, 4]);
//!
//! // The reference records where the elements live, across relocations.
//! assert_eq!(vref.count, 4);
//! assert_ne!(vref.offset, 0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `regolith-core` | Atom headers, identifier tags, alignment rules, errors |
//! | [`layout`] | `regolith-layout` | Read-only region views, atom iterators, validation |
//! | [`alloc`] | `regolith-alloc` | Formatting, reserve/resize/free with coalescing |
//! | [`vec`] | `regolith-vec` | Typed vectors and their external reference records |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Atom headers, identifier tags, alignment rules, and errors
/// (`regolith-core`).
pub use regolith_core as types;

/// Read-only region views, atom iterators, and whole-region validation
/// (`regolith-layout`).
///
/// Everything here is mutation-free: this module plus [`types`] is the
/// entire surface a read-only consumer of the byte format needs.
pub use regolith_layout as layout;

/// Region formatting and the in-place allocator (`regolith-alloc`).
///
/// [`alloc::RegionMut`] is the host-side mutable binding: it formats fresh
/// regions and reserves, resizes, and frees allocation atoms.
pub use regolith_alloc as alloc;

/// Typed vectors over region allocations (`regolith-vec`).
///
/// [`vec::Vector`] provides `Vec`-like semantics over one allocation,
/// with identity held in an external [`vec::VectorRef`] record.
pub use regolith_vec as vec;

/// Common imports for typical regolith usage.
///
/// ```rust
/// use regolith::prelude::*;
/// ```
pub mod prelude {
    // Core format types
    pub use regolith_core::{aligned_size, AtomHeader, AtomKind, RegionError, ALIGNMENT, HEADER_LEN};

    // Read side
    pub use regolith_layout::{validate_layout, RegionView};

    // Write side
    pub use regolith_alloc::RegionMut;

    // Typed vectors
    pub use regolith_vec::{Vector, VectorRef};
}
