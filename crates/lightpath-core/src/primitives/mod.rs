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

pub mod affine;
pub mod freq;
pub mod interval;

pub use affine::*;
pub use interval::Interval;

/// Scalar weight accumulated along a path (hop count or latency).
pub type Cost = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrequencyMarker;

impl MarkerName for FrequencyMarker {
    const NAME_POINT: &'static str = "Frequency";
    const NAME_DELTA: &'static str = "FrequencyDelta";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LatencyMarker;

impl MarkerName for LatencyMarker {
    const NAME_POINT: &'static str = "LatencyPoint";
    const NAME_DELTA: &'static str = "LatencyDelta";
}

/// Absolute position on the spectral axis, in megahertz.
pub type Frequency = Point<i64, FrequencyMarker>;
/// Width or offset on the spectral axis, in megahertz.
pub type FrequencyDelta = Delta<i64, FrequencyMarker>;
/// Propagation delay of a link, in microseconds.
pub type LatencyDelta = Delta<i64, LatencyMarker>;
/// Half-open `[start, end)` span on the spectral axis.
pub type FrequencyInterval = Interval<Frequency>;
