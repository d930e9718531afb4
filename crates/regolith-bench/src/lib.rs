//! Benchmark fixtures for the regolith crates.
//!
//! Provides pre-built regions for the criterion benches: a freshly
//! formatted region and a fragmented one whose free chain forces longer
//! first-fit scans.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use regolith::alloc::RegionMut;
use regolith_test_utils::AlignedRegion;

/// A freshly formatted region of `len` bytes.
pub fn formatted_region(len: usize) -> AlignedRegion {
    let mut region = AlignedRegion::new(len);
    RegionMut::format(region.bytes_mut(), 0).expect("bench region formats");
    region
}

/// A region peppered with allocation/hole pairs.
///
/// Fills the region with `payload`-sized allocations, then frees every
/// other one. The surviving allocations fence the holes apart, so the free
/// chain stays maximally fragmented and a first-fit scan for anything
/// larger than `payload` walks the whole chain.
pub fn fragmented_region(len: usize, payload: u32) -> AlignedRegion {
    let mut region = formatted_region(len);
    let mut heap = RegionMut::bind(region.bytes_mut()).expect("bench region binds");

    let mut atoms = Vec::new();
    while let Ok(atom) = heap.reserve(payload) {
        atoms.push(atom);
    }
    for atom in atoms.into_iter().step_by(2) {
        heap.free(atom).expect("bench atom frees");
    }
    drop(heap);
    region
}
