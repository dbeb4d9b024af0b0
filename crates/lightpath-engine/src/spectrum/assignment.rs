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

//! Slot-range selection over an availability bitmap. Candidate centers
//! are anchored at the grid's anchor index and stepped by a fixed slot
//! granularity, so identical inputs always select the identical range.

use lightpath_model::spectrum::{bitmap::SpectrumBitmap, grid::FrequencyGrid, range::SlotRange};

/// Scan direction of the candidate-center walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionPolicy {
    /// Prefer the highest free range.
    #[default]
    HighToLow,
    /// Prefer the lowest free range.
    LowToHigh,
}

/// First fully free `width_slots` wide range in policy order, or `None`
/// when no candidate center has its whole range free. Never returns a
/// partial allocation.
pub fn select_spectrum(
    grid: &FrequencyGrid,
    availability: &SpectrumBitmap,
    step_slots: usize,
    width_slots: usize,
    policy: SelectionPolicy,
) -> Option<SlotRange> {
    match policy {
        SelectionPolicy::HighToLow => {
            let first = grid.first_center_index(step_slots, width_slots)?;
            let mut center = grid.last_center_index(step_slots, width_slots)?;
            loop {
                let range = SlotRange::from_center(center, width_slots)?;
                if availability.all_available_in(&range) {
                    return Some(range);
                }
                if center < first + step_slots {
                    return None;
                }
                center -= step_slots;
            }
        }
        SelectionPolicy::LowToHigh => {
            let last = grid.last_center_index(step_slots, width_slots)?;
            let mut center = grid.first_center_index(step_slots, width_slots)?;
            loop {
                let range = SlotRange::from_center(center, width_slots)?;
                if availability.all_available_in(&range) {
                    return Some(range);
                }
                center += step_slots;
                if center > last {
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> FrequencyGrid {
        FrequencyGrid::flex_c_band()
    }

    #[test]
    fn test_high_to_low_picks_top_range() {
        // Exactly the eight topmost slots are free.
        let mut avail = SpectrumBitmap::none_available(768);
        avail.set_range_available(760..768, true);
        let range = select_spectrum(&grid(), &avail, 8, 8, SelectionPolicy::HighToLow).unwrap();
        assert_eq!((range.lo(), range.hi()), (760, 767));
    }

    #[test]
    fn test_high_to_low_skips_used_top() {
        let mut avail = SpectrumBitmap::all_available(768);
        // Burn one slot inside the topmost candidate range.
        avail.set_available(763, false);
        let range = select_spectrum(&grid(), &avail, 8, 8, SelectionPolicy::HighToLow).unwrap();
        assert_eq!((range.lo(), range.hi()), (752, 759));
    }

    #[test]
    fn test_low_to_high_picks_bottom_range() {
        let avail = SpectrumBitmap::all_available(768);
        let range = select_spectrum(&grid(), &avail, 8, 8, SelectionPolicy::LowToHigh).unwrap();
        // First center reachable from anchor index 284 by steps of 8 is 4.
        assert_eq!((range.lo(), range.hi()), (0, 7));
    }

    #[test]
    fn test_empty_bitmap_finds_nothing() {
        let avail = SpectrumBitmap::none_available(768);
        assert_eq!(select_spectrum(&grid(), &avail, 8, 8, SelectionPolicy::HighToLow), None);
        assert_eq!(select_spectrum(&grid(), &avail, 8, 8, SelectionPolicy::LowToHigh), None);
    }

    #[test]
    fn test_policies_agree_on_single_free_range() {
        let mut avail = SpectrumBitmap::none_available(768);
        avail.set_range_available(392..406, true);
        // Width 14 centered at 398 or 400? Centers step by 2 from 284:
        // even centers only. [392, 405] has center 399 which is odd, so
        // the only even-center fit is 398 -> [391, 404] (391 not free)
        // or 400 -> [393, 406] (406 not free). Width 14 with step 2
        // therefore cannot fit; width 12 can.
        assert_eq!(select_spectrum(&grid(), &avail, 2, 14, SelectionPolicy::HighToLow), None);
        let high = select_spectrum(&grid(), &avail, 2, 12, SelectionPolicy::HighToLow).unwrap();
        let low = select_spectrum(&grid(), &avail, 2, 12, SelectionPolicy::LowToHigh).unwrap();
        assert_eq!((high.lo(), high.hi()), (394, 405));
        assert_eq!((low.lo(), low.hi()), (392, 403));
    }

    #[test]
    fn test_determinism() {
        let mut avail = SpectrumBitmap::all_available(768);
        for i in (0..768).step_by(3) {
            avail.set_available(i, false);
        }
        let a = select_spectrum(&grid(), &avail, 8, 8, SelectionPolicy::HighToLow);
        let b = select_spectrum(&grid(), &avail, 8, 8, SelectionPolicy::HighToLow);
        assert_eq!(a, b);
    }
}
