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

pub use crate::common::Identifier;
pub use crate::constraint::{
    Constraints, OperatorProfiles, PathMetric, PortPreference, ResourcePair, ResourceType,
};
pub use crate::request::{Endpoint, PathRequest, PathRequestBuilder, ServiceKind, SpectrumSelection};
pub use crate::spectrum::{
    bitmap::SpectrumBitmap,
    grid::{FrequencyGrid, GridKind},
    range::SlotRange,
    C_BAND,
};
pub use crate::topology::{
    link::{Link, LinkContainer, LinkIdentifier, LinkKind},
    node::{Node, NodeContainer, NodeIdentifier, OperationalState},
    topo::{Topology, TopologyBuilder},
};
pub use crate::validation::{FormatValidator, RequestValidator, SlotValidator};
