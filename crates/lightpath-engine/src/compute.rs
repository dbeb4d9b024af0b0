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

//! One computation, front to back: validate the request, build the graph,
//! enumerate candidates, pick the first with usable spectrum. Each stage
//! hands an immutable value to the next; failure at any stage is data,
//! not a fault.

use crate::{
    err::{ComputeError, NoPathError},
    graph::{
        builder::PathGraph,
        search::{k_shortest_paths, CandidatePath, SearchLimits},
    },
    postcheck,
    result::Lightpath,
    spectrum::assignment::SelectionPolicy,
};
use lightpath_model::{
    constraint::{Constraints, OperatorProfiles},
    request::PathRequest,
    spectrum::grid::FrequencyGrid,
    topology::topo::Topology,
    validation::RequestValidator,
};

/// The path computation engine for one frequency grid. Holds only
/// configuration; every call to [`compute`] is an independent,
/// synchronous computation over the snapshot it is given.
///
/// [`compute`]: PathComputer::compute
#[derive(Debug, Clone)]
pub struct PathComputer {
    grid: FrequencyGrid,
    limits: SearchLimits,
    policy: SelectionPolicy,
}

impl PathComputer {
    pub fn new(grid: FrequencyGrid) -> Self {
        Self {
            grid,
            limits: SearchLimits::default(),
            policy: SelectionPolicy::default(),
        }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    pub fn grid(&self) -> &FrequencyGrid {
        &self.grid
    }

    pub fn compute(
        &self,
        topology: &Topology,
        request: &PathRequest,
        profiles: &OperatorProfiles,
    ) -> Result<Lightpath, ComputeError> {
        RequestValidator::new(&self.grid).validate(request)?;

        let graph = PathGraph::build(topology, request);
        let no_path =
            || NoPathError::new(request.source().clone(), request.destination().clone());
        let Some(source) = graph.vertex_index(request.source()) else {
            return Err(no_path().into());
        };
        let Some(target) = graph.vertex_index(request.destination()) else {
            return Err(no_path().into());
        };

        let mut candidates = k_shortest_paths(&graph, source, target, &self.limits);
        if candidates.is_empty() {
            return Err(no_path().into());
        }
        rank_by_soft_constraints(&graph, &mut candidates, request.soft());

        postcheck::accept_first(&self.grid, &graph, &candidates, request, profiles, self.policy)
            .map_err(Into::into)
    }
}

/// Soft constraints never reject a candidate; between candidates of equal
/// weight they prefer the one violating fewer of them.
fn rank_by_soft_constraints(
    graph: &PathGraph<'_>,
    candidates: &mut [CandidatePath],
    soft: &Constraints,
) {
    if soft.is_empty() {
        return;
    }
    let violations = |candidate: &CandidatePath| -> usize {
        let mut count = 0;
        for &edge_index in candidate.edges() {
            let edge = graph.edge(edge_index);
            if soft.is_link_excluded(edge.link()) {
                count += 1;
            }
            if soft.is_node_excluded(graph.node(edge.source())) {
                count += 1;
            }
        }
        if let Some(&last) = candidate.edges().last() {
            if soft.is_node_excluded(graph.node(graph.edge(last).target())) {
                count += 1;
            }
        }
        for wanted in soft.include_nodes() {
            let present = candidate.edges().iter().any(|&e| {
                let edge = graph.edge(e);
                graph.node(edge.source()).id() == wanted
                    || graph.node(edge.target()).id() == wanted
            });
            if !present {
                count += 1;
            }
        }
        count
    };
    candidates.sort_by_key(|c| (c.cost(), violations(c)));
}
