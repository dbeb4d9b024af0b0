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

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lightpath_engine::{
    graph::{builder::PathGraph, search::k_shortest_paths},
    SearchLimits,
};
use lightpath_model::{
    request::{Endpoint, PathRequest, ServiceKind},
    spectrum::{bitmap::SpectrumBitmap, C_BAND},
    topology::{
        link::{Link, LinkIdentifier, LinkKind},
        node::{Node, NodeIdentifier, OperationalState},
        topo::{Topology, TopologyBuilder},
    },
};

fn nid(name: &str) -> NodeIdentifier {
    NodeIdentifier::new(name.to_string())
}

/// Ladder of `rungs` ROADM pairs: many equal-weight alternatives, which
/// is the worst case for the simple-path frontier.
fn ladder(rungs: usize) -> Topology {
    let mut b = TopologyBuilder::new();
    for i in 0..rungs {
        for side in ["L", "R"] {
            b.add_node(
                Node::new(nid(&format!("{side}{i}")), OperationalState::InService)
                    .with_spectrum(C_BAND, SpectrumBitmap::all_available(768)),
            );
        }
    }
    let mut add = |name: String, from: String, to: String| {
        b.add_link(Link::new(
            LinkIdentifier::new(name),
            nid(&from),
            nid(&to),
            LinkKind::RoadmToRoadm,
            OperationalState::InService,
        ));
    };
    for i in 0..rungs - 1 {
        add(format!("L{i}-L{}", i + 1), format!("L{i}"), format!("L{}", i + 1));
        add(format!("R{i}-R{}", i + 1), format!("R{i}"), format!("R{}", i + 1));
    }
    for i in 0..rungs {
        add(format!("L{i}-R{i}"), format!("L{i}"), format!("R{i}"));
        add(format!("R{i}-L{i}"), format!("R{i}"), format!("L{i}"));
    }
    b.build()
}

fn bench_k_shortest(c: &mut Criterion) {
    let mut group = c.benchmark_group("k_shortest_paths");
    for rungs in [8usize, 16, 24] {
        let topo = ladder(rungs);
        let request = PathRequest::builder(
            Endpoint::new(nid("L0")),
            Endpoint::new(nid(&format!("R{}", rungs - 1))),
            ServiceKind::HundredGigE,
        )
        .build();
        let graph = PathGraph::build(&topo, &request);
        let source = graph.vertex_index(&nid("L0")).unwrap();
        let target = graph.vertex_index(&nid(&format!("R{}", rungs - 1))).unwrap();
        let limits = SearchLimits::default();

        group.bench_with_input(BenchmarkId::from_parameter(rungs), &rungs, |b, _| {
            b.iter(|| k_shortest_paths(&graph, source, target, &limits));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_k_shortest);
criterion_main!(benches);
