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

use crate::topology::{
    link::{Link, LinkContainer, LinkIdentifier},
    node::{Node, NodeContainer, NodeIdentifier},
};

/// Immutable topology snapshot backing one path computation. A link whose
/// endpoints are unknown is kept here on purpose; the graph builder drops
/// it with a logged error so a single bad record never fails the whole
/// computation.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    nodes: NodeContainer,
    links: LinkContainer,
}

impl Topology {
    #[inline]
    pub fn new(nodes: NodeContainer, links: LinkContainer) -> Self {
        Self { nodes, links }
    }

    #[inline]
    pub fn nodes(&self) -> &NodeContainer {
        &self.nodes
    }

    #[inline]
    pub fn links(&self) -> &LinkContainer {
        &self.links
    }

    #[inline]
    pub fn node(&self, id: &NodeIdentifier) -> Option<&Node> {
        self.nodes.get(id)
    }

    #[inline]
    pub fn link(&self, id: &LinkIdentifier) -> Option<&Link> {
        self.links.get(id)
    }

    #[inline]
    pub fn iter_in_service_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_in_service())
    }

    #[inline]
    pub fn iter_in_service_links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(|l| l.is_in_service())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TopologyBuilder {
    nodes: NodeContainer,
    links: LinkContainer,
}

impl TopologyBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_nodes<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.nodes = nodes.into_iter().collect();
        self
    }

    #[inline]
    pub fn with_links<I>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = Link>,
    {
        self.links = links.into_iter().collect();
        self
    }

    #[inline]
    pub fn add_node(&mut self, node: Node) -> &mut Self {
        self.nodes.insert(node);
        self
    }

    #[inline]
    pub fn add_link(&mut self, link: Link) -> &mut Self {
        self.links.insert(link);
        self
    }

    #[inline]
    pub fn build(self) -> Topology {
        Topology::new(self.nodes, self.links)
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
    fn test_builder_collects_nodes_and_links() {
        let mut b = TopologyBuilder::new();
        b.add_node(Node::new(nid("A"), OperationalState::InService));
        b.add_node(Node::new(nid("B"), OperationalState::OutOfService));
        b.add_link(Link::new(
            lid("A-B"),
            nid("A"),
            nid("B"),
            LinkKind::RoadmToRoadm,
            OperationalState::InService,
        ));
        let topo = b.build();

        assert_eq!(topo.nodes().len(), 2);
        assert_eq!(topo.links().len(), 1);
        assert_eq!(topo.iter_in_service_nodes().count(), 1);
        assert!(topo.node(&nid("A")).is_some());
        assert!(topo.link(&lid("A-B")).is_some());
    }

    #[test]
    fn test_dangling_link_is_kept() {
        // The snapshot keeps links to unknown nodes; dropping them is the
        // graph builder's job.
        let topo = TopologyBuilder::new()
            .with_nodes([Node::new(nid("A"), OperationalState::InService)])
            .with_links([Link::new(
                lid("A-GHOST"),
                nid("A"),
                nid("GHOST"),
                LinkKind::RoadmToRoadm,
                OperationalState::InService,
            )])
            .build();
        assert_eq!(topo.links().len(), 1);
        assert!(topo.node(&nid("GHOST")).is_none());
    }
}
