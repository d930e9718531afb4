//! End-to-end allocator scenarios over a 1 KiB region.

use regolith_alloc::RegionMut;
use regolith_core::{AtomHeader, AtomKind, HEADER_LEN};
use regolith_layout::{end_atom, validate_layout};
use regolith_test_utils::AlignedRegion;

fn header(heap: &RegionMut<'_>, atom: u32) -> AtomHeader {
    heap.view().header(atom).unwrap()
}

#[test]
fn reservation_and_release_walk_the_chain_consistently() {
    let mut region = AlignedRegion::new(1024);
    RegionMut::format(region.bytes_mut(), 0).unwrap();
    let mut heap = RegionMut::bind(region.bytes_mut()).unwrap();

    let first = heap.reserve(34).unwrap();
    assert!(heap.view().validate());
    assert_eq!(first, HEADER_LEN);
    assert_eq!(header(&heap, first).contents_size(), 48);
    assert_eq!(heap.view().next(0), Some(first));
    let after_first = heap.view().next(first).unwrap();
    assert_eq!(header(&heap, after_first).kind(), Some(AtomKind::Free));

    let second = heap.reserve(512).unwrap();
    assert!(heap.view().validate());
    assert_eq!(second, 80);
    assert_eq!(header(&heap, second).length, 528);
    assert_eq!(heap.view().next(first), Some(second));

    let hole = heap.free(first).unwrap();
    assert!(heap.view().validate());
    assert_eq!(heap.view().next(0), Some(hole));
    assert_eq!(header(&heap, hole).kind(), Some(AtomKind::Free));
    assert_eq!(header(&heap, hole).length, 64);
    assert_eq!(heap.view().previous(hole), Some(0));
    assert_eq!(heap.view().next(hole), Some(second));

    let merged = heap.free(second).unwrap();
    assert!(heap.view().validate());
    assert_eq!(heap.view().next(0), Some(merged));
    assert_eq!(header(&heap, merged).length, 1024 - 2 * HEADER_LEN);
    let after_merged = heap.view().next(merged).unwrap();
    assert_eq!(header(&heap, after_merged).kind(), Some(AtomKind::End));

    drop(heap);
    let (offset, sentinel) = end_atom(region.bytes()).unwrap();
    assert_eq!(offset, 1008);
    assert_eq!(sentinel.previous, 992);
}

#[test]
fn reallocation_paths_match_the_documented_chain() {
    let mut region = AlignedRegion::new(1024);
    RegionMut::format(region.bytes_mut(), 0).unwrap();
    let mut heap = RegionMut::bind(region.bytes_mut()).unwrap();

    let first = heap.reserve(34).unwrap();
    assert_eq!(header(&heap, first).length, 64);

    let second = heap.reserve(512).unwrap();
    assert_eq!(header(&heap, second).length, 528);

    // Same rounded capacity: a no-op returning the same atom.
    let same = heap.resize(first, 42).unwrap();
    assert_eq!(same, first);
    assert_eq!(header(&heap, same).contents_size(), 48);

    // Shrink the second in place.
    let shrunk = heap.resize(second, 480).unwrap();
    assert!(heap.view().validate());
    assert_eq!(shrunk, second);
    assert_eq!(header(&heap, second).length, HEADER_LEN + 480);

    // Grow back in place, absorbing part of the adjacent free span.
    let grown = heap.resize(second, 540).unwrap();
    assert!(heap.view().validate());
    assert_eq!(grown, second);
    assert_eq!(header(&heap, second).length, HEADER_LEN + 544);

    // The first is fenced in by the second: growth must relocate it.
    let moved = heap.resize(first, 120).unwrap();
    assert!(heap.view().validate());
    assert_ne!(moved, first);
    assert_eq!(moved, 640);
    assert_eq!(header(&heap, moved).contents_size(), 128);
    assert_eq!(header(&heap, first).kind(), Some(AtomKind::Free));

    drop(heap);
    assert!(validate_layout(region.bytes()));
}
