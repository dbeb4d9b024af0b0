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

use lightpath_core::prelude::{Cost, Frequency};
use lightpath_model::{spectrum::range::SlotRange, topology::link::Link};

/// The spectrum chosen for one accepted path.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumAllocation {
    band: String,
    slots: SlotRange,
    channel: Option<u16>,
    min_frequency: Frequency,
    max_frequency: Frequency,
}

impl SpectrumAllocation {
    pub fn new(
        band: impl Into<String>,
        slots: SlotRange,
        channel: Option<u16>,
        min_frequency: Frequency,
        max_frequency: Frequency,
    ) -> Self {
        Self {
            band: band.into(),
            slots,
            channel,
            min_frequency,
            max_frequency,
        }
    }

    #[inline]
    pub fn band(&self) -> &str {
        &self.band
    }

    #[inline]
    pub fn slots(&self) -> SlotRange {
        self.slots
    }

    /// Fixed-grid channel number, absent on the flexible grid.
    #[inline]
    pub fn channel(&self) -> Option<u16> {
        self.channel
    }

    #[inline]
    pub fn min_frequency(&self) -> Frequency {
        self.min_frequency
    }

    #[inline]
    pub fn max_frequency(&self) -> Frequency {
        self.max_frequency
    }
}

/// The accepted result of one computation: the chosen route and spectrum,
/// assembled once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Lightpath {
    links: Vec<Link>,
    spectrum: SpectrumAllocation,
    total_cost: Cost,
    osnr_estimate_db: f64,
}

impl Lightpath {
    pub fn new(
        links: Vec<Link>,
        spectrum: SpectrumAllocation,
        total_cost: Cost,
        osnr_estimate_db: f64,
    ) -> Self {
        Self {
            links,
            spectrum,
            total_cost,
            osnr_estimate_db,
        }
    }

    /// The route as an ordered link list.
    #[inline]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    #[inline]
    pub fn spectrum(&self) -> &SpectrumAllocation {
        &self.spectrum
    }

    #[inline]
    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    /// Additive signal-quality estimate along the route, diagnostic only.
    #[inline]
    pub fn osnr_estimate_db(&self) -> f64 {
        self.osnr_estimate_db
    }

    #[inline]
    pub fn hops(&self) -> usize {
        self.links.len()
    }
}
