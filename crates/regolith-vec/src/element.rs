//! The element contract for typed vectors.

use regolith_core::ALIGNMENT;

/// Whether `T`'s layout fits a region-backed vector slot.
///
/// Elements are packed at `size_of::<T>()` stride inside an allocation
/// payload. Payloads are sixteen-byte aligned from the region base, so any
/// `T` whose alignment divides sixteen lands correctly; an over-aligned
/// type would not. Zero-sized types are rejected because capacity is
/// derived by dividing payload bytes by the element size.
///
/// This is the layout half of the contract; [`Vector`](crate::Vector)
/// additionally bounds elements by [`bytemuck::Pod`], making them plain
/// bytes — copyable with `memcpy` and meaningful on any device that reads
/// the region.
pub const fn element_compatible<T>() -> bool {
    std::mem::size_of::<T>() > 0 && std::mem::align_of::<T>() <= ALIGNMENT as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(C)]
    struct Cell {
        position: [f32; 3],
        weight: f32,
    }

    #[repr(C, align(32))]
    struct Overaligned {
        lanes: [f32; 8],
    }

    #[test]
    fn packed_scalars_and_sixteen_byte_records_fit() {
        assert!(element_compatible::<u8>());
        assert!(element_compatible::<i32>());
        assert!(element_compatible::<u64>());
        assert!(element_compatible::<Cell>());
    }

    #[test]
    fn overaligned_and_zero_sized_elements_do_not_fit() {
        assert!(!element_compatible::<Overaligned>());
        assert!(!element_compatible::<()>());
    }
}
