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

//! THz/GHz boundary conversions for the integer-megahertz spectral axis.
//!
//! External collaborators speak terahertz floats; everything internal is
//! exact integer megahertz. Conversion happens once, here, with half-even
//! rounding at 1 MHz precision, so repeated round trips cannot drift.

use crate::primitives::{Frequency, FrequencyDelta};

pub const MHZ_PER_THZ: f64 = 1e6;
pub const MHZ_PER_GHZ: f64 = 1e3;

/// Round to the nearest integer, ties to even.
fn round_half_even(value: f64) -> i64 {
    let floor = value.floor();
    let fract = value - floor;
    let base = floor as i64;
    if fract > 0.5 {
        base + 1
    } else if fract < 0.5 {
        base
    } else if base % 2 == 0 {
        base
    } else {
        base + 1
    }
}

impl Frequency {
    #[inline]
    pub fn from_thz(thz: f64) -> Self {
        Frequency::new(round_half_even(thz * MHZ_PER_THZ))
    }

    #[inline]
    pub fn to_thz(self) -> f64 {
        self.value() as f64 / MHZ_PER_THZ
    }
}

impl FrequencyDelta {
    #[inline]
    pub fn from_thz(thz: f64) -> Self {
        FrequencyDelta::new(round_half_even(thz * MHZ_PER_THZ))
    }

    #[inline]
    pub fn from_ghz(ghz: f64) -> Self {
        FrequencyDelta::new(round_half_even(ghz * MHZ_PER_GHZ))
    }

    #[inline]
    pub fn to_ghz(self) -> f64 {
        self.value() as f64 / MHZ_PER_GHZ
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thz_round_trip_on_grid_values() {
        // Every flexible-grid slot edge must survive a round trip exactly.
        for i in 0..=768 {
            let f = 191.325 + (i as f64) * 0.00625;
            let mhz = Frequency::from_thz(f);
            assert_eq!(Frequency::from_thz(mhz.to_thz()), mhz, "slot edge {}", i);
        }
    }

    #[test]
    fn test_known_anchors() {
        assert_eq!(Frequency::from_thz(193.1).value(), 193_100_000);
        assert_eq!(Frequency::from_thz(191.325).value(), 191_325_000);
        assert_eq!(FrequencyDelta::from_ghz(6.25).value(), 6_250);
        assert_eq!(FrequencyDelta::from_ghz(12.5).value(), 12_500);
        assert_eq!(FrequencyDelta::from_ghz(50.0).value(), 50_000);
    }

    #[test]
    fn test_half_even_ties() {
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(3.5), 4);
        assert_eq!(round_half_even(-2.5), -2);
        assert_eq!(round_half_even(-3.5), -4);
        assert_eq!(round_half_even(2.4), 2);
        assert_eq!(round_half_even(2.6), 3);
    }

    #[test]
    fn test_negative_delta_conversion() {
        assert_eq!(FrequencyDelta::from_ghz(-6.25).value(), -6_250);
    }
}
