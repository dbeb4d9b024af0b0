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

use lightpath_model::spectrum::{bitmap::SpectrumBitmap, grid::FrequencyGrid};
use lightpath_core::prelude::FrequencyInterval;

/// A set of requested frequency ranges projected onto grid slots, used
/// for fixed "all or nothing" spectrum reservations. The degenerate
/// whole-spectrum collection narrows nothing and acts as the identity
/// under both [`intersection`] and [`subset`].
///
/// [`intersection`]: IntervalCollection::intersection
/// [`subset`]: IntervalCollection::subset
#[derive(Debug, Clone)]
pub struct IntervalCollection<'g> {
    grid: &'g FrequencyGrid,
    intervals: Vec<FrequencyInterval>,
    entire: bool,
}

impl<'g> IntervalCollection<'g> {
    /// Empty collection: nothing requested yet.
    pub fn new(grid: &'g FrequencyGrid) -> Self {
        Self {
            grid,
            intervals: Vec::new(),
            entire: false,
        }
    }

    /// The whole-spectrum identity collection.
    pub fn entire(grid: &'g FrequencyGrid) -> Self {
        Self {
            grid,
            intervals: Vec::new(),
            entire: true,
        }
    }

    /// Add one requested range. Structurally equal ranges are counted
    /// once, however often and in whatever order they are re-added.
    pub fn add(&mut self, interval: FrequencyInterval) -> &mut Self {
        self.entire = false;
        if !self.intervals.contains(&interval) {
            self.intervals.push(interval);
        }
        self
    }

    /// Number of conceptual members: the whole-spectrum collection has
    /// exactly one, whatever its internal representation.
    pub fn len(&self) -> usize {
        if self.entire {
            1
        } else {
            self.intervals.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.entire && self.intervals.is_empty()
    }

    /// Union of all requested ranges as a slot bitmap. Partially covered
    /// edge slots count as requested.
    pub fn to_bitmap(&self) -> SpectrumBitmap {
        let total = self.grid.total_slots();
        if self.entire {
            return SpectrumBitmap::all_available(total);
        }
        let mut bits = SpectrumBitmap::none_available(total);
        let slot = self.grid.slot_width().value();
        let lower = self.grid.lower_edge().value();
        let span = slot * total as i64;
        for interval in &self.intervals {
            let start = (interval.start().value() - lower).clamp(0, span);
            let end = (interval.end().value() - lower).clamp(0, span);
            if start >= end {
                continue;
            }
            let lo = (start / slot) as usize;
            let hi = ((end + slot - 1) / slot) as usize;
            bits.set_range_available(lo..hi, true);
        }
        bits
    }

    /// Bitwise AND of the requested slots with an availability bitmap.
    pub fn intersection(&self, availability: &SpectrumBitmap) -> SpectrumBitmap {
        if self.entire {
            return availability.clone();
        }
        let mut bits = self.to_bitmap();
        bits.intersect_with(availability);
        bits
    }

    /// All-or-nothing projection: the full requested bitmap when every
    /// requested slot is available, the empty bitmap otherwise.
    pub fn subset(&self, availability: &SpectrumBitmap) -> SpectrumBitmap {
        if self.entire {
            return availability.clone();
        }
        let bits = self.to_bitmap();
        if availability.covers(&bits) {
            bits
        } else {
            SpectrumBitmap::none_available(self.grid.total_slots())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightpath_core::prelude::{Frequency, Interval};

    fn grid() -> FrequencyGrid {
        FrequencyGrid::flex_c_band()
    }

    fn thz(start: f64, end: f64) -> FrequencyInterval {
        Interval::new(Frequency::from_thz(start), Frequency::from_thz(end))
    }

    #[test]
    fn test_add_projects_aligned_interval() {
        let g = grid();
        let mut c = IntervalCollection::new(&g);
        // 193.1 +/- 25 GHz: slots 280..=287.
        c.add(thz(193.075, 193.125));
        let bits = c.to_bitmap();
        assert_eq!(bits.available_count(), 8);
        assert!(bits.is_available(280));
        assert!(bits.is_available(287));
        assert!(!bits.is_available(279));
        assert!(!bits.is_available(288));
    }

    #[test]
    fn test_duplicate_intervals_count_once() {
        let g = grid();
        let mut c = IntervalCollection::new(&g);
        c.add(thz(193.075, 193.125));
        c.add(thz(193.125, 193.175));
        c.add(thz(193.075, 193.125));
        assert_eq!(c.len(), 2);
        assert_eq!(c.to_bitmap().available_count(), 16);
    }

    #[test]
    fn test_partial_slots_round_outward() {
        let g = grid();
        let mut c = IntervalCollection::new(&g);
        // 3 GHz straddling nothing: still claims its whole slot.
        c.add(thz(193.101, 193.104));
        let bits = c.to_bitmap();
        assert_eq!(bits.available_count(), 1);
        assert!(bits.is_available(284));
    }

    #[test]
    fn test_out_of_band_parts_are_clamped() {
        let g = grid();
        let mut c = IntervalCollection::new(&g);
        c.add(thz(190.0, 191.3375)); // reaches two slots into the band
        let bits = c.to_bitmap();
        assert_eq!(bits.available_count(), 2);
        assert!(bits.is_available(0));
        assert!(bits.is_available(1));
    }

    #[test]
    fn test_intersection_is_bitwise_and() {
        let g = grid();
        let mut c = IntervalCollection::new(&g);
        c.add(thz(193.075, 193.125)); // slots 280..=287
        let mut avail = SpectrumBitmap::none_available(768);
        avail.set_range_available(284..300, true);
        let result = c.intersection(&avail);
        assert_eq!(result.available_slots().collect::<Vec<_>>(), vec![284, 285, 286, 287]);
    }

    #[test]
    fn test_subset_is_all_or_nothing() {
        let g = grid();
        let mut c = IntervalCollection::new(&g);
        c.add(thz(193.075, 193.125));

        let mut enough = SpectrumBitmap::none_available(768);
        enough.set_range_available(270..290, true);
        assert_eq!(c.subset(&enough).available_count(), 8);

        let mut short = SpectrumBitmap::none_available(768);
        short.set_range_available(281..290, true);
        assert_eq!(c.subset(&short).available_count(), 0);
    }

    #[test]
    fn test_entire_collection_is_identity() {
        let g = grid();
        let c = IntervalCollection::entire(&g);
        assert_eq!(c.len(), 1);

        let mut avail = SpectrumBitmap::none_available(768);
        avail.set_range_available(100..200, true);
        assert_eq!(c.intersection(&avail), avail);
        assert_eq!(c.subset(&avail), avail);
    }
}
