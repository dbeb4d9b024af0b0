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

use fxhash::FxHashMap;
use lightpath_core::prelude::Cost;
use lightpath_model::{
    constraint::PathMetric,
    request::PathRequest,
    topology::{
        link::{Link, LinkKind},
        node::{Node, NodeIdentifier},
        topo::Topology,
    },
};
use smallvec::SmallVec;
use tracing::{error, warn};

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexIndex(pub usize);

impl VertexIndex {
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeIndex(pub usize);

impl EdgeIndex {
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct GraphEdge<'t> {
    link: &'t Link,
    source: VertexIndex,
    target: VertexIndex,
    weight: Cost,
}

impl<'t> GraphEdge<'t> {
    #[inline]
    pub fn link(&self) -> &'t Link {
        self.link
    }

    #[inline]
    pub fn kind(&self) -> LinkKind {
        self.link.kind()
    }

    #[inline]
    pub fn source(&self) -> VertexIndex {
        self.source
    }

    #[inline]
    pub fn target(&self) -> VertexIndex {
        self.target
    }

    #[inline]
    pub fn weight(&self) -> Cost {
        self.weight
    }
}

/// Transient weighted multigraph over one topology snapshot, interned to
/// dense vertex and edge indices. Built once per computation and dropped
/// with it.
#[derive(Debug)]
pub struct PathGraph<'t> {
    vertices: Vec<&'t Node>,
    vertex_of: FxHashMap<&'t NodeIdentifier, VertexIndex>,
    edges: Vec<GraphEdge<'t>>,
    out_edges: Vec<SmallVec<[EdgeIndex; 8]>>,
}

impl<'t> PathGraph<'t> {
    /// One vertex per in-service node that survives the hard node
    /// exclusions, one edge per in-service link whose endpoints both
    /// resolve. A link referencing an unknown or dropped node is logged
    /// and skipped, never fatal. Nodes and links enter in id order so the
    /// same snapshot always yields the same indices.
    pub fn build(topology: &'t Topology, request: &PathRequest) -> Self {
        let metric = effective_metric(request.hard().metric());

        let mut nodes: Vec<&'t Node> = topology
            .iter_in_service_nodes()
            .filter(|n| !request.hard().is_node_excluded(n))
            .collect();
        nodes.sort_by(|a, b| a.id().cmp(b.id()));

        let mut vertex_of =
            FxHashMap::with_capacity_and_hasher(nodes.len(), Default::default());
        for (i, node) in nodes.iter().enumerate() {
            vertex_of.insert(node.id(), VertexIndex(i));
        }

        let mut links: Vec<&'t Link> = topology
            .iter_in_service_links()
            .filter(|l| !request.hard().is_link_excluded(l))
            .collect();
        links.sort_by(|a, b| a.id().cmp(b.id()));

        let mut edges = Vec::with_capacity(links.len());
        let mut out_edges: Vec<SmallVec<[EdgeIndex; 8]>> = vec![SmallVec::new(); nodes.len()];
        for link in links {
            let (Some(&source), Some(&target)) = (
                vertex_of.get(link.source()),
                vertex_of.get(link.destination()),
            ) else {
                error!(
                    link = %link.id(),
                    source = %link.source(),
                    destination = %link.destination(),
                    "link endpoint missing from the graph, dropping the edge"
                );
                continue;
            };
            let weight = edge_weight(link, metric, request);
            let index = EdgeIndex(edges.len());
            edges.push(GraphEdge {
                link,
                source,
                target,
                weight,
            });
            out_edges[source.get()].push(index);
        }

        Self {
            vertices: nodes,
            vertex_of,
            edges,
            out_edges,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// A graph with no vertices or no edges cannot hold any path.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.is_empty() || self.edges.is_empty()
    }

    #[inline]
    pub fn vertex_index(&self, id: &NodeIdentifier) -> Option<VertexIndex> {
        self.vertex_of.get(id).copied()
    }

    #[inline]
    pub fn node(&self, vertex: VertexIndex) -> &'t Node {
        self.vertices[vertex.get()]
    }

    #[inline]
    pub fn edge(&self, edge: EdgeIndex) -> &GraphEdge<'t> {
        &self.edges[edge.get()]
    }

    #[inline]
    pub fn out_edges(&self, vertex: VertexIndex) -> &[EdgeIndex] {
        &self.out_edges[vertex.get()]
    }
}

fn effective_metric(requested: PathMetric) -> PathMetric {
    match requested {
        PathMetric::HopCount | PathMetric::PropagationDelay => requested,
        PathMetric::IgpMetric | PathMetric::TeMetric => {
            warn!(metric = %requested, "metric not implemented, falling back to hop count");
            PathMetric::HopCount
        }
    }
}

fn edge_weight(link: &Link, metric: PathMetric, request: &PathRequest) -> Cost {
    match metric {
        PathMetric::PropagationDelay => {
            let latency = link.latency().value();
            if latency == 0 && request.service().is_electrical() {
                warn!(
                    link = %link.id(),
                    service = %request.service(),
                    "link carries no latency under the propagation-delay metric"
                );
            }
            latency
        }
        _ => 1,
    }
}
