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

pub mod err;
pub mod operator;
pub mod preference;

pub use operator::OperatorProfiles;
pub use preference::PortPreference;

use crate::{
    constraint::err::InvalidSrlgNameError,
    topology::{
        link::{Link, LinkIdentifier},
        node::{Node, NodeIdentifier},
    },
};
use lightpath_core::prelude::LatencyDelta;
use std::collections::BTreeSet;

/// Weight put on a graph edge by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PathMetric {
    #[default]
    HopCount,
    PropagationDelay,
    /// Accepted on input, falls back to hop count.
    IgpMetric,
    /// Accepted on input, falls back to hop count.
    TeMetric,
}

impl std::fmt::Display for PathMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PathMetric::HopCount => "hop-count",
            PathMetric::PropagationDelay => "propagation-delay",
            PathMetric::IgpMetric => "igp-metric",
            PathMetric::TeMetric => "te-metric",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Node,
    Srlg,
    Clli,
    ClliNode,
    SrlgLink,
}

/// Uniform representation of one excluded or included resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePair {
    kind: ResourceType,
    name: String,
}

impl ResourcePair {
    #[inline]
    pub fn new(kind: ResourceType, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ResourceType {
        self.kind
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One set of computation constraints. A request carries two: a hard set
/// the result must satisfy and a soft set that only influences ranking.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    metric: PathMetric,
    max_latency: Option<LatencyDelta>,
    exclude_nodes: BTreeSet<NodeIdentifier>,
    include_nodes: Vec<NodeIdentifier>,
    exclude_srlg: BTreeSet<u32>,
    exclude_clli: BTreeSet<String>,
    exclude_clli_nodes: BTreeSet<NodeIdentifier>,
    exclude_srlg_links: BTreeSet<LinkIdentifier>,
}

impl Constraints {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn metric(&self) -> PathMetric {
        self.metric
    }

    #[inline]
    pub fn set_metric(&mut self, metric: PathMetric) -> &mut Self {
        self.metric = metric;
        self
    }

    #[inline]
    pub fn max_latency(&self) -> Option<LatencyDelta> {
        self.max_latency
    }

    #[inline]
    pub fn set_max_latency(&mut self, max_latency: LatencyDelta) -> &mut Self {
        self.max_latency = Some(max_latency);
        self
    }

    #[inline]
    pub fn exclude_node(&mut self, id: NodeIdentifier) -> &mut Self {
        self.exclude_nodes.insert(id);
        self
    }

    #[inline]
    pub fn include_node(&mut self, id: NodeIdentifier) -> &mut Self {
        self.include_nodes.push(id);
        self
    }

    #[inline]
    pub fn exclude_srlg(&mut self, srlg: u32) -> &mut Self {
        self.exclude_srlg.insert(srlg);
        self
    }

    #[inline]
    pub fn exclude_clli(&mut self, clli: impl Into<String>) -> &mut Self {
        self.exclude_clli.insert(clli.into());
        self
    }

    #[inline]
    pub fn exclude_clli_node(&mut self, id: NodeIdentifier) -> &mut Self {
        self.exclude_clli_nodes.insert(id);
        self
    }

    #[inline]
    pub fn exclude_srlg_link(&mut self, id: LinkIdentifier) -> &mut Self {
        self.exclude_srlg_links.insert(id);
        self
    }

    /// Register one exclusion given in the uniform pair form.
    pub fn exclude_resource(&mut self, pair: ResourcePair) -> Result<&mut Self, InvalidSrlgNameError> {
        match pair.kind() {
            ResourceType::Node => {
                self.exclude_node(NodeIdentifier::new(pair.name().to_string()));
            }
            ResourceType::Srlg => {
                let srlg = pair
                    .name()
                    .parse::<u32>()
                    .map_err(|_| InvalidSrlgNameError::new(pair.name().to_string()))?;
                self.exclude_srlg(srlg);
            }
            ResourceType::Clli => {
                self.exclude_clli(pair.name().to_string());
            }
            ResourceType::ClliNode => {
                self.exclude_clli_node(NodeIdentifier::new(pair.name().to_string()));
            }
            ResourceType::SrlgLink => {
                self.exclude_srlg_link(LinkIdentifier::new(pair.name().to_string()));
            }
        }
        Ok(self)
    }

    #[inline]
    pub fn include_nodes(&self) -> &[NodeIdentifier] {
        &self.include_nodes
    }

    /// Whether a node is ruled out by any node-level exclusion.
    pub fn is_node_excluded(&self, node: &Node) -> bool {
        if self.exclude_nodes.contains(node.id()) || self.exclude_clli_nodes.contains(node.id()) {
            return true;
        }
        match node.clli() {
            Some(clli) => self.exclude_clli.contains(clli),
            None => false,
        }
    }

    /// Whether a link is ruled out by an SRLG id or link-level exclusion.
    pub fn is_link_excluded(&self, link: &Link) -> bool {
        if self.exclude_srlg_links.contains(link.id()) {
            return true;
        }
        link.srlg().iter().any(|s| self.exclude_srlg.contains(s))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max_latency.is_none()
            && self.exclude_nodes.is_empty()
            && self.include_nodes.is_empty()
            && self.exclude_srlg.is_empty()
            && self.exclude_clli.is_empty()
            && self.exclude_clli_nodes.is_empty()
            && self.exclude_srlg_links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{link::LinkKind, node::OperationalState};

    fn nid(name: &str) -> NodeIdentifier {
        NodeIdentifier::new(name.to_string())
    }
    fn lid(name: &str) -> LinkIdentifier {
        LinkIdentifier::new(name.to_string())
    }

    #[test]
    fn test_default_is_hop_count_and_empty() {
        let c = Constraints::new();
        assert_eq!(c.metric(), PathMetric::HopCount);
        assert!(c.max_latency().is_none());
        assert!(c.is_empty());
    }

    #[test]
    fn test_node_exclusion_by_id_clli_and_clli_node() {
        let mut c = Constraints::new();
        c.exclude_node(nid("A"));
        c.exclude_clli("ATLNGA");
        c.exclude_clli_node(nid("C"));

        let a = Node::new(nid("A"), OperationalState::InService);
        let b = Node::new(nid("B"), OperationalState::InService).with_clli("ATLNGA");
        let c_node = Node::new(nid("C"), OperationalState::InService);
        let d = Node::new(nid("D"), OperationalState::InService).with_clli("DLLSTX");

        assert!(c.is_node_excluded(&a));
        assert!(c.is_node_excluded(&b));
        assert!(c.is_node_excluded(&c_node));
        assert!(!c.is_node_excluded(&d));
    }

    #[test]
    fn test_link_exclusion_by_srlg_and_id() {
        let mut c = Constraints::new();
        c.exclude_srlg(7);
        c.exclude_srlg_link(lid("X-Y"));

        let shared_risk = Link::new(
            lid("A-B"),
            nid("A"),
            nid("B"),
            LinkKind::RoadmToRoadm,
            OperationalState::InService,
        )
        .with_srlg([3, 7]);
        let named = Link::new(
            lid("X-Y"),
            nid("X"),
            nid("Y"),
            LinkKind::RoadmToRoadm,
            OperationalState::InService,
        );
        let clean = Link::new(
            lid("B-C"),
            nid("B"),
            nid("C"),
            LinkKind::RoadmToRoadm,
            OperationalState::InService,
        )
        .with_srlg([4]);

        assert!(c.is_link_excluded(&shared_risk));
        assert!(c.is_link_excluded(&named));
        assert!(!c.is_link_excluded(&clean));
    }

    #[test]
    fn test_exclude_resource_dispatch() {
        let mut c = Constraints::new();
        c.exclude_resource(ResourcePair::new(ResourceType::Node, "N1"))
            .unwrap();
        c.exclude_resource(ResourcePair::new(ResourceType::Srlg, "42"))
            .unwrap();
        c.exclude_resource(ResourcePair::new(ResourceType::Clli, "NYCMNY"))
            .unwrap();
        c.exclude_resource(ResourcePair::new(ResourceType::SrlgLink, "L1"))
            .unwrap();

        assert!(c.is_node_excluded(&Node::new(nid("N1"), OperationalState::InService)));
        let l = Link::new(
            lid("L2"),
            nid("A"),
            nid("B"),
            LinkKind::RoadmToRoadm,
            OperationalState::InService,
        )
        .with_srlg([42]);
        assert!(c.is_link_excluded(&l));
    }

    #[test]
    fn test_exclude_resource_bad_srlg_number() {
        let mut c = Constraints::new();
        let err = c.exclude_resource(ResourcePair::new(ResourceType::Srlg, "not-a-number"));
        assert!(err.is_err());
    }
}
