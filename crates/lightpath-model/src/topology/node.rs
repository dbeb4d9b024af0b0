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

use crate::{
    common::{Identifier, IdentifierMarkerName},
    spectrum::bitmap::SpectrumBitmap,
};
use std::{collections::HashMap, hash::Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdentifierMarker;

impl IdentifierMarkerName for NodeIdentifierMarker {
    const NAME: &'static str = "NodeId";
}

pub type NodeIdentifier = Identifier<String, NodeIdentifierMarker>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationalState {
    InService,
    OutOfService,
}

impl OperationalState {
    #[inline]
    pub fn is_in_service(&self) -> bool {
        matches!(self, OperationalState::InService)
    }
}

impl std::fmt::Display for OperationalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationalState::InService => write!(f, "inService"),
            OperationalState::OutOfService => write!(f, "outOfService"),
        }
    }
}

/// One node of the topology snapshot. Optical nodes carry per-band
/// spectrum bitmaps; transponders usually carry none and are treated as
/// imposing no spectrum restriction.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeIdentifier,
    state: OperationalState,
    clli: Option<String>,
    spectrum: HashMap<String, SpectrumBitmap>,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl Node {
    #[inline]
    pub fn new(id: NodeIdentifier, state: OperationalState) -> Self {
        Self {
            id,
            state,
            clli: None,
            spectrum: HashMap::new(),
        }
    }

    #[inline]
    pub fn with_clli(mut self, clli: impl Into<String>) -> Self {
        self.clli = Some(clli.into());
        self
    }

    #[inline]
    pub fn with_spectrum(mut self, band: impl Into<String>, bitmap: SpectrumBitmap) -> Self {
        self.spectrum.insert(band.into(), bitmap);
        self
    }

    #[inline]
    pub fn id(&self) -> &NodeIdentifier {
        &self.id
    }

    #[inline]
    pub fn state(&self) -> OperationalState {
        self.state
    }

    #[inline]
    pub fn is_in_service(&self) -> bool {
        self.state.is_in_service()
    }

    #[inline]
    pub fn clli(&self) -> Option<&str> {
        self.clli.as_deref()
    }

    #[inline]
    pub fn spectrum(&self, band: &str) -> Option<&SpectrumBitmap> {
        self.spectrum.get(band)
    }
}

#[repr(transparent)]
#[derive(Debug, Clone, Default)]
pub struct NodeContainer(HashMap<NodeIdentifier, Node>);

impl NodeContainer {
    #[inline]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self(HashMap::with_capacity(cap))
    }

    #[inline]
    pub fn insert(&mut self, node: Node) -> Option<Node> {
        self.0.insert(node.id().clone(), node)
    }

    #[inline]
    pub fn contains_id(&self, id: &NodeIdentifier) -> bool {
        self.0.contains_key(id)
    }

    #[inline]
    pub fn get(&self, id: &NodeIdentifier) -> Option<&Node> {
        self.0.get(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.0.values()
    }
}

impl FromIterator<Node> for NodeContainer {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        let mut c = Self::new();
        for n in iter {
            c.insert(n);
        }
        c
    }
}
