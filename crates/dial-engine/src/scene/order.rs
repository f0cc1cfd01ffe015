use core::cmp::Ordering;

/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Static clock body: disc, border, ticks, labels.
    pub const FACE: ZIndex = ZIndex(0);
    /// Animated overlay: hands and pivot. Always above every face item.
    pub const HANDS: ZIndex = ZIndex(1 << 16);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    /// Index `n` steps above `self`.
    #[inline]
    pub const fn offset(self, n: i32) -> Self {
        Self(self.0 + n)
    }
}

/// Stable sort key for draw items.
///
/// Ordering rules:
/// 1) `z`: ascending (back-to-front)
/// 2) `order`: ascending (insertion order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.z.cmp(&other.z) {
            Ordering::Equal => self.order.cmp(&other.order),
            o => o,
        }
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_dominates_insertion_order() {
        let low = SortKey::new(ZIndex::FACE, 9);
        let high = SortKey::new(ZIndex::HANDS, 0);
        assert!(low < high);
    }

    #[test]
    fn equal_z_falls_back_to_order() {
        assert!(SortKey::new(ZIndex(3), 1) < SortKey::new(ZIndex(3), 2));
    }
}
