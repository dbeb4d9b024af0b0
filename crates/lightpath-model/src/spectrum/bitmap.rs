// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::spectrum::range::SlotRange;
use fixedbitset::FixedBitSet;

/// Per-slot availability of one optical port or node: a set bit means the
/// slot is free. An allocation is valid only if its whole range is set in
/// every bitmap touched by the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpectrumBitmap {
    bits: FixedBitSet,
}

impl SpectrumBitmap {
    /// Bitmap with every slot free.
    pub fn all_available(total_slots: usize) -> Self {
        let mut bits = FixedBitSet::with_capacity(total_slots);
        bits.set_range(.., true);
        Self { bits }
    }

    /// Bitmap with every slot in use.
    pub fn none_available(total_slots: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(total_slots),
        }
    }

    #[inline]
    pub fn total_slots(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_available(&self, index: usize) -> bool {
        self.bits.contains(index)
    }

    /// Mark one slot. Panics if `index` is out of bounds.
    #[inline]
    pub fn set_available(&mut self, index: usize, available: bool) {
        self.bits.set(index, available);
    }

    /// Mark a whole range. Panics if the range end is out of bounds.
    #[inline]
    pub fn set_range_available(&mut self, range: std::ops::Range<usize>, available: bool) {
        self.bits.set_range(range, available);
    }

    /// Whether every slot of `range` is free.
    pub fn all_available_in(&self, range: &SlotRange) -> bool {
        range.fits(self.bits.len()) && self.bits.count_ones(range.lo()..range.hi() + 1) == range.width()
    }

    /// Keep only slots free in both bitmaps.
    #[inline]
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits.intersect_with(&other.bits);
    }

    /// Whether every slot free in `other` is also free in `self`.
    #[inline]
    pub fn covers(&self, other: &Self) -> bool {
        other.bits.is_subset(&self.bits)
    }

    #[inline]
    pub fn available_count(&self) -> usize {
        self.bits.count_ones(..)
    }

    #[inline]
    pub fn has_available(&self) -> bool {
        self.available_count() > 0
    }

    /// Iterate the free slot indices in ascending order.
    pub fn available_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(lo: usize, hi: usize) -> SlotRange {
        SlotRange::new(lo, hi).unwrap()
    }

    #[test]
    fn test_all_and_none() {
        let all = SpectrumBitmap::all_available(768);
        let none = SpectrumBitmap::none_available(768);
        assert_eq!(all.total_slots(), 768);
        assert_eq!(all.available_count(), 768);
        assert_eq!(none.available_count(), 0);
        assert!(all.has_available());
        assert!(!none.has_available());
    }

    #[test]
    fn test_all_available_in() {
        let mut b = SpectrumBitmap::none_available(768);
        b.set_range_available(760..768, true);
        assert!(b.all_available_in(&range(760, 767)));
        assert!(!b.all_available_in(&range(759, 766)));
        assert!(!b.all_available_in(&range(761, 768))); // out of bounds
        assert!(b.all_available_in(&range(764, 764)));
    }

    #[test]
    fn test_intersection() {
        let mut a = SpectrumBitmap::none_available(16);
        let mut b = SpectrumBitmap::none_available(16);
        a.set_range_available(0..8, true);
        b.set_range_available(4..12, true);
        a.intersect_with(&b);
        assert_eq!(a.available_slots().collect::<Vec<_>>(), vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_covers() {
        let mut wide = SpectrumBitmap::none_available(16);
        let mut narrow = SpectrumBitmap::none_available(16);
        wide.set_range_available(0..12, true);
        narrow.set_range_available(2..6, true);
        assert!(wide.covers(&narrow));
        assert!(!narrow.covers(&wide));
        assert!(wide.covers(&SpectrumBitmap::none_available(16)));
    }

    #[test]
    fn test_set_available_round_trip() {
        let mut b = SpectrumBitmap::all_available(96);
        assert!(b.is_available(40));
        b.set_available(40, false);
        assert!(!b.is_available(40));
        assert_eq!(b.available_count(), 95);
    }
}
