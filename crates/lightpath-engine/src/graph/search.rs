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

//! Best-first enumeration of the k cheapest simple paths. The turn rules
//! see every edge the moment it is appended to a partial path, which a
//! plain Dijkstra-with-detours scheme cannot offer, and partial paths pop
//! off the frontier in ascending weight with a monotone sequence number
//! as the tie-break, so the output order is stable across runs.

use crate::graph::{
    builder::{EdgeIndex, PathGraph, VertexIndex},
    turns,
};
use fixedbitset::FixedBitSet;
use lightpath_core::prelude::Cost;
use lightpath_model::topology::link::LinkKind;
use std::collections::BinaryHeap;

/// Structural bounds on the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchLimits {
    /// Number of candidate paths to enumerate.
    pub k: usize,
    /// Hop bound on any single candidate.
    pub max_hops: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            k: 10,
            max_hops: 50,
        }
    }
}

/// One enumerated path: its edges in traversal order and total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePath {
    edges: Vec<EdgeIndex>,
    cost: Cost,
}

impl CandidatePath {
    #[inline]
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    #[inline]
    pub fn hops(&self) -> usize {
        self.edges.len()
    }
}

#[derive(Debug)]
struct Frontier {
    cost: Cost,
    seq: u64,
    vertex: VertexIndex,
    last_kind: Option<LinkKind>,
    edges: Vec<EdgeIndex>,
    visited: FixedBitSet,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // BinaryHeap is a max-heap; invert so the cheapest, oldest entry
        // pops first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Enumerate up to `limits.k` cheapest simple paths from `source` to
/// `target` honoring the turn rules, in ascending weight order. An empty
/// result means no valid path exists, which is a normal outcome.
pub fn k_shortest_paths(
    graph: &PathGraph<'_>,
    source: VertexIndex,
    target: VertexIndex,
    limits: &SearchLimits,
) -> Vec<CandidatePath> {
    let mut found = Vec::new();
    if graph.is_degenerate() || source == target || limits.k == 0 || limits.max_hops == 0 {
        return found;
    }

    let mut heap = BinaryHeap::new();
    let mut seq: u64 = 0;
    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    visited.set(source.get(), true);
    heap.push(Frontier {
        cost: 0,
        seq,
        vertex: source,
        last_kind: None,
        edges: Vec::new(),
        visited,
    });

    while let Some(partial) = heap.pop() {
        if partial.vertex == target {
            let terminates = partial
                .last_kind
                .map(turns::may_terminate)
                .unwrap_or(false);
            if terminates {
                found.push(CandidatePath {
                    edges: partial.edges,
                    cost: partial.cost,
                });
                if found.len() == limits.k {
                    break;
                }
            }
            // A simple path cannot leave the target and come back.
            continue;
        }
        if partial.edges.len() == limits.max_hops {
            continue;
        }
        for &edge_index in graph.out_edges(partial.vertex) {
            let edge = graph.edge(edge_index);
            if partial.visited.contains(edge.target().get()) {
                continue;
            }
            if !turns::is_turn_allowed(partial.last_kind, edge.kind()) {
                continue;
            }
            let mut edges = partial.edges.clone();
            edges.push(edge_index);
            let mut visited = partial.visited.clone();
            visited.set(edge.target().get(), true);
            seq += 1;
            heap.push(Frontier {
                cost: partial.cost + edge.weight(),
                seq,
                vertex: edge.target(),
                last_kind: Some(edge.kind()),
                edges,
                visited,
            });
        }
    }

    found
}
