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

use lightpath_core::prelude::{Frequency, FrequencyDelta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonPositiveSlotWidthError {
    slot_width: FrequencyDelta,
}

impl NonPositiveSlotWidthError {
    pub fn new(slot_width: FrequencyDelta) -> Self {
        Self { slot_width }
    }

    pub fn slot_width(&self) -> FrequencyDelta {
        self.slot_width
    }
}

impl std::fmt::Display for NonPositiveSlotWidthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot width {} is not positive", self.slot_width)
    }
}

impl std::error::Error for NonPositiveSlotWidthError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptySpectrumError;

impl std::fmt::Display for EmptySpectrumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A frequency grid needs at least one slot")
    }
}

impl std::error::Error for EmptySpectrumError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorOutOfBandError {
    anchor: Frequency,
    lower_edge: Frequency,
    upper_edge: Frequency,
}

impl AnchorOutOfBandError {
    pub fn new(anchor: Frequency, lower_edge: Frequency, upper_edge: Frequency) -> Self {
        Self {
            anchor,
            lower_edge,
            upper_edge,
        }
    }

    pub fn anchor(&self) -> Frequency {
        self.anchor
    }
}

impl std::fmt::Display for AnchorOutOfBandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Anchor {} lies outside the band [{}, {})",
            self.anchor, self.lower_edge, self.upper_edge
        )
    }
}

impl std::error::Error for AnchorOutOfBandError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridError {
    NonPositiveSlotWidth(NonPositiveSlotWidthError),
    EmptySpectrum(EmptySpectrumError),
    AnchorOutOfBand(AnchorOutOfBandError),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::NonPositiveSlotWidth(e) => write!(f, "{}", e),
            GridError::EmptySpectrum(e) => write!(f, "{}", e),
            GridError::AnchorOutOfBand(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GridError {}

impl From<NonPositiveSlotWidthError> for GridError {
    fn from(err: NonPositiveSlotWidthError) -> Self {
        GridError::NonPositiveSlotWidth(err)
    }
}

impl From<EmptySpectrumError> for GridError {
    fn from(err: EmptySpectrumError) -> Self {
        GridError::EmptySpectrum(err)
    }
}

impl From<AnchorOutOfBandError> for GridError {
    fn from(err: AnchorOutOfBandError) -> Self {
        GridError::AnchorOutOfBand(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvertedSlotRangeError {
    lo: usize,
    hi: usize,
}

impl InvertedSlotRangeError {
    pub fn new(lo: usize, hi: usize) -> Self {
        Self { lo, hi }
    }
}

impl std::fmt::Display for InvertedSlotRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot range [{}, {}] is inverted", self.lo, self.hi)
    }
}

impl std::error::Error for InvertedSlotRangeError {}
