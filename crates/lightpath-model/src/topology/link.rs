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
    topology::node::{NodeIdentifier, OperationalState},
};
use lightpath_core::prelude::LatencyDelta;
use std::{collections::HashMap, hash::Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkIdentifierMarker;

impl IdentifierMarkerName for LinkIdentifierMarker {
    const NAME: &'static str = "LinkId";
}

pub type LinkIdentifier = Identifier<String, LinkIdentifierMarker>;

/// Role of a directed link in the ROADM add/drop/express structure. The
/// turn-validity rules of the path search key on pairs of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    RoadmToRoadm,
    Add,
    Drop,
    Express,
    XponderInput,
    XponderOutput,
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LinkKind::RoadmToRoadm => "ROADM-TO-ROADM",
            LinkKind::Add => "ADD",
            LinkKind::Drop => "DROP",
            LinkKind::Express => "EXPRESS",
            LinkKind::XponderInput => "XPONDER-INPUT",
            LinkKind::XponderOutput => "XPONDER-OUTPUT",
        };
        write!(f, "{}", name)
    }
}

/// One directed edge of the topology snapshot.
#[derive(Debug, Clone)]
pub struct Link {
    id: LinkIdentifier,
    source: NodeIdentifier,
    destination: NodeIdentifier,
    kind: LinkKind,
    state: OperationalState,
    latency: LatencyDelta,
    osnr_db: f64,
    srlg: Vec<u32>,
    source_port: Option<String>,
    destination_port: Option<String>,
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Link {}

impl std::hash::Hash for Link {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl Link {
    #[inline]
    pub fn new(
        id: LinkIdentifier,
        source: NodeIdentifier,
        destination: NodeIdentifier,
        kind: LinkKind,
        state: OperationalState,
    ) -> Self {
        Self {
            id,
            source,
            destination,
            kind,
            state,
            latency: LatencyDelta::zero(),
            osnr_db: 0.0,
            srlg: Vec::new(),
            source_port: None,
            destination_port: None,
        }
    }

    #[inline]
    pub fn with_latency(mut self, latency: LatencyDelta) -> Self {
        self.latency = latency;
        self
    }

    #[inline]
    pub fn with_osnr_db(mut self, osnr_db: f64) -> Self {
        self.osnr_db = osnr_db;
        self
    }

    #[inline]
    pub fn with_srlg<I: IntoIterator<Item = u32>>(mut self, srlg: I) -> Self {
        self.srlg = srlg.into_iter().collect();
        self
    }

    #[inline]
    pub fn with_ports(
        mut self,
        source_port: impl Into<String>,
        destination_port: impl Into<String>,
    ) -> Self {
        self.source_port = Some(source_port.into());
        self.destination_port = Some(destination_port.into());
        self
    }

    #[inline]
    pub fn id(&self) -> &LinkIdentifier {
        &self.id
    }

    #[inline]
    pub fn source(&self) -> &NodeIdentifier {
        &self.source
    }

    #[inline]
    pub fn destination(&self) -> &NodeIdentifier {
        &self.destination
    }

    #[inline]
    pub fn kind(&self) -> LinkKind {
        self.kind
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
    pub fn latency(&self) -> LatencyDelta {
        self.latency
    }

    #[inline]
    pub fn osnr_db(&self) -> f64 {
        self.osnr_db
    }

    #[inline]
    pub fn srlg(&self) -> &[u32] {
        &self.srlg
    }

    #[inline]
    pub fn source_port(&self) -> Option<&str> {
        self.source_port.as_deref()
    }

    #[inline]
    pub fn destination_port(&self) -> Option<&str> {
        self.destination_port.as_deref()
    }
}

#[repr(transparent)]
#[derive(Debug, Clone, Default)]
pub struct LinkContainer(HashMap<LinkIdentifier, Link>);

impl LinkContainer {
    #[inline]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self(HashMap::with_capacity(cap))
    }

    #[inline]
    pub fn insert(&mut self, link: Link) -> Option<Link> {
        self.0.insert(link.id().clone(), link)
    }

    #[inline]
    pub fn contains_id(&self, id: &LinkIdentifier) -> bool {
        self.0.contains_key(id)
    }

    #[inline]
    pub fn get(&self, id: &LinkIdentifier) -> Option<&Link> {
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
    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.0.values()
    }
}

impl FromIterator<Link> for LinkContainer {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        let mut c = Self::new();
        for l in iter {
            c.insert(l);
        }
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nid(name: &str) -> NodeIdentifier {
        NodeIdentifier::new(name.to_string())
    }
    fn lid(name: &str) -> LinkIdentifier {
        LinkIdentifier::new(name.to_string())
    }

    #[test]
    fn test_link_accessors() {
        let l = Link::new(
            lid("A-B"),
            nid("A"),
            nid("B"),
            LinkKind::RoadmToRoadm,
            OperationalState::InService,
        )
        .with_latency(LatencyDelta::new(250))
        .with_osnr_db(21.5)
        .with_srlg([7, 9])
        .with_ports("DEG1-TTP-TXRX", "DEG2-TTP-TXRX");

        assert_eq!(l.source(), &nid("A"));
        assert_eq!(l.destination(), &nid("B"));
        assert_eq!(l.kind(), LinkKind::RoadmToRoadm);
        assert!(l.is_in_service());
        assert_eq!(l.latency().value(), 250);
        assert_eq!(l.osnr_db(), 21.5);
        assert_eq!(l.srlg(), &[7, 9]);
        assert_eq!(l.source_port(), Some("DEG1-TTP-TXRX"));
        assert_eq!(l.destination_port(), Some("DEG2-TTP-TXRX"));
    }

    #[test]
    fn test_link_kind_display() {
        assert_eq!(format!("{}", LinkKind::RoadmToRoadm), "ROADM-TO-ROADM");
        assert_eq!(format!("{}", LinkKind::XponderOutput), "XPONDER-OUTPUT");
    }

    #[test]
    fn test_container() {
        let mut c = LinkContainer::new();
        c.insert(Link::new(
            lid("A-B"),
            nid("A"),
            nid("B"),
            LinkKind::Express,
            OperationalState::InService,
        ));
        assert_eq!(c.len(), 1);
        assert!(c.contains_id(&lid("A-B")));
        assert!(c.get(&lid("B-A")).is_none());
    }
}
