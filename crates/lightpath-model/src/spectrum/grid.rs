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

use crate::spectrum::err::{
    AnchorOutOfBandError, EmptySpectrumError, GridError, NonPositiveSlotWidthError,
};
use lightpath_core::prelude::{Frequency, FrequencyDelta};

/// How slot indices of a grid are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridKind {
    /// Flexible grid: an allocation spans a contiguous run of narrow slots.
    FlexSlots,
    /// Fixed grid: every slot is a whole channel, allocations are one slot.
    FixedChannels,
}

/// A fixed partition of the optical spectrum into equally wide, indexed
/// slots. Index 0 starts at the lower band edge; the anchor frequency pins
/// the index from which legal center frequencies are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrequencyGrid {
    kind: GridKind,
    lower_edge: Frequency,
    anchor: Frequency,
    slot_width: FrequencyDelta,
    total_slots: usize,
}

impl FrequencyGrid {
    pub fn new(
        kind: GridKind,
        lower_edge: Frequency,
        anchor: Frequency,
        slot_width: FrequencyDelta,
        total_slots: usize,
    ) -> Result<Self, GridError> {
        if !slot_width.is_positive() {
            return Err(NonPositiveSlotWidthError::new(slot_width))?;
        }
        if total_slots == 0 {
            return Err(EmptySpectrumError)?;
        }
        let upper_edge = lower_edge + slot_width * total_slots as i64;
        if anchor < lower_edge || anchor >= upper_edge {
            return Err(AnchorOutOfBandError::new(anchor, lower_edge, upper_edge))?;
        }
        Ok(Self {
            kind,
            lower_edge,
            anchor,
            slot_width,
            total_slots,
        })
    }

    /// Flexible C-band grid: 768 slots of 6.25 GHz from 191.325 THz,
    /// anchored at 193.1 THz (slot index 284).
    pub fn flex_c_band() -> Self {
        Self {
            kind: GridKind::FlexSlots,
            lower_edge: Frequency::from_thz(191.325),
            anchor: Frequency::from_thz(193.1),
            slot_width: FrequencyDelta::from_ghz(6.25),
            total_slots: 768,
        }
    }

    /// Fixed C-band grid: 96 channels of 50 GHz from 191.325 THz.
    pub fn fixed_c_band() -> Self {
        Self {
            kind: GridKind::FixedChannels,
            lower_edge: Frequency::from_thz(191.325),
            anchor: Frequency::from_thz(193.1),
            slot_width: FrequencyDelta::from_ghz(50.0),
            total_slots: 96,
        }
    }

    #[inline]
    pub fn kind(&self) -> GridKind {
        self.kind
    }

    #[inline]
    pub fn lower_edge(&self) -> Frequency {
        self.lower_edge
    }

    #[inline]
    pub fn upper_edge(&self) -> Frequency {
        self.lower_edge + self.slot_width * self.total_slots as i64
    }

    #[inline]
    pub fn anchor(&self) -> Frequency {
        self.anchor
    }

    #[inline]
    pub fn slot_width(&self) -> FrequencyDelta {
        self.slot_width
    }

    #[inline]
    pub fn total_slots(&self) -> usize {
        self.total_slots
    }

    /// Slot index containing the anchor frequency.
    #[inline]
    pub fn anchor_index(&self) -> usize {
        ((self.anchor - self.lower_edge) / self.slot_width) as usize
    }

    /// Slot index containing `frequency`, or `None` outside the band.
    pub fn index_for_frequency(&self, frequency: Frequency) -> Option<usize> {
        if frequency < self.lower_edge || frequency >= self.upper_edge() {
            return None;
        }
        Some(((frequency - self.lower_edge) / self.slot_width) as usize)
    }

    /// Lower boundary frequency of a slot. `index == total_slots` yields
    /// the upper band edge.
    #[inline]
    pub fn start_frequency(&self, index: usize) -> Frequency {
        self.lower_edge + self.slot_width * index as i64
    }

    /// Upper boundary frequency of a slot.
    #[inline]
    pub fn stop_frequency(&self, index: usize) -> Frequency {
        self.start_frequency(index + 1)
    }

    #[inline]
    pub fn center_frequency(&self, index: usize) -> Frequency {
        self.start_frequency(index) + self.slot_width / 2
    }

    /// Highest slot index usable as the center of a `width_slots` wide
    /// allocation, reachable from the anchor index by whole multiples of
    /// `step_slots`. `None` when no center leaves `width_slots / 2` guard
    /// slots on both sides.
    pub fn last_center_index(&self, step_slots: usize, width_slots: usize) -> Option<usize> {
        let (step, half) = Self::step_and_half(step_slots, width_slots)?;
        let total = self.total_slots as i64;
        let anchor = self.anchor_index() as i64;
        let k = (total - half - anchor).div_euclid(step);
        let center = anchor + k * step;
        if center < half {
            return None;
        }
        Some(center as usize)
    }

    /// Lowest usable center index, counterpart of [`last_center_index`].
    ///
    /// [`last_center_index`]: FrequencyGrid::last_center_index
    pub fn first_center_index(&self, step_slots: usize, width_slots: usize) -> Option<usize> {
        let (step, half) = Self::step_and_half(step_slots, width_slots)?;
        let total = self.total_slots as i64;
        let anchor = self.anchor_index() as i64;
        let k = -(anchor - half).div_euclid(step);
        let center = anchor + k * step;
        if center + half > total {
            return None;
        }
        Some(center as usize)
    }

    fn step_and_half(step_slots: usize, width_slots: usize) -> Option<(i64, i64)> {
        if step_slots == 0 || width_slots == 0 || width_slots % 2 != 0 {
            return None;
        }
        Some((step_slots as i64, (width_slots / 2) as i64))
    }
}
