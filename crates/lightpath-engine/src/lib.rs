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

//! The path computation itself: build a weighted graph from one topology
//! snapshot, enumerate the k cheapest simple paths that respect the ROADM
//! turn rules, then pick the first candidate with an end-to-end usable
//! wavelength or frequency-slot range.
//!
//! One computation is synchronous, allocation-local and free of I/O.
//! Concurrent computations must not share [`graph::PathGraph`] or result
//! values, but may freely share the immutable model inputs.

pub mod compute;
pub mod err;
pub mod graph;
pub mod postcheck;
pub mod result;
pub mod spectrum;

pub use compute::PathComputer;
pub use err::ComputeError;
pub use graph::search::SearchLimits;
pub use result::{Lightpath, SpectrumAllocation};
pub use spectrum::assignment::SelectionPolicy;
