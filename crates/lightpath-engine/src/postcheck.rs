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

//! Post-search validation: walk the ranked candidates and accept the
//! first one with a wavelength or slot range free on every node it
//! touches, after the remaining hard checks (include-nodes, latency cap,
//! port preference) have passed.

use crate::{
    err::SpectrumExhaustedError,
    graph::{builder::PathGraph, search::CandidatePath},
    result::{Lightpath, SpectrumAllocation},
    spectrum::{
        assignment::{select_spectrum, SelectionPolicy},
        intervals::IntervalCollection,
    },
};
use lightpath_core::prelude::{Interval, LatencyDelta};
use lightpath_model::{
    constraint::{OperatorProfiles, PortPreference},
    request::{PathRequest, SpectrumSelection},
    spectrum::{bitmap::SpectrumBitmap, grid::{FrequencyGrid, GridKind}, range::SlotRange},
    topology::node::Node,
};
use tracing::debug;

/// Try the candidates in rank order; the first satisfiable one becomes
/// the result and the rest are never evaluated.
pub fn accept_first(
    grid: &FrequencyGrid,
    graph: &PathGraph<'_>,
    candidates: &[CandidatePath],
    request: &PathRequest,
    profiles: &OperatorProfiles,
    policy: SelectionPolicy,
) -> Result<Lightpath, SpectrumExhaustedError> {
    let preference = request.port_preference();
    for candidate in candidates {
        if let Some(path) = try_candidate(grid, graph, candidate, request, profiles, policy, &preference)
        {
            return Ok(path);
        }
    }
    Err(SpectrumExhaustedError::new(candidates.len()))
}

fn try_candidate(
    grid: &FrequencyGrid,
    graph: &PathGraph<'_>,
    candidate: &CandidatePath,
    request: &PathRequest,
    profiles: &OperatorProfiles,
    policy: SelectionPolicy,
    preference: &PortPreference,
) -> Option<Lightpath> {
    if candidate.edges().is_empty() {
        return None;
    }

    let path_nodes = collect_path_nodes(graph, candidate);

    for required in request.hard().include_nodes() {
        if !path_nodes.iter().any(|n| n.id() == required) {
            debug!(node = %required, "candidate misses a required include node");
            return None;
        }
    }

    if let Some(cap) = request.hard().max_latency() {
        let total: LatencyDelta = candidate
            .edges()
            .iter()
            .map(|&e| graph.edge(e).link().latency())
            .sum();
        if total > cap {
            debug!(%total, %cap, "candidate exceeds the latency cap");
            return None;
        }
    }

    for &edge_index in candidate.edges() {
        let link = graph.edge(edge_index).link();
        let source_ok = match link.source_port() {
            Some(port) => preference.is_preferred_port(link.source(), port),
            None => !preference.has_preference_for(link.source()),
        };
        let destination_ok = match link.destination_port() {
            Some(port) => preference.is_preferred_port(link.destination(), port),
            None => !preference.has_preference_for(link.destination()),
        };
        if !source_ok || !destination_ok {
            debug!(link = %link.id(), "candidate uses a non-preferred port");
            return None;
        }
    }

    let availability = common_availability(grid, request, profiles, &path_nodes);
    let band = request.band();
    let allocation = match request.spectrum_selection() {
        Some(selection) => fixed_allocation(band, grid, selection, &availability)?,
        None => match grid.kind() {
            GridKind::FixedChannels => channel_allocation(band, grid, &availability)?,
            GridKind::FlexSlots => {
                let width = request.service().slot_width_slots();
                let slots = select_spectrum(grid, &availability, width, width, policy)?;
                spectrum_of(band, grid, slots, None)
            }
        },
    };

    // TODO: replace the additive OSNR figure with a per-span impairment
    // model once link engineering data carries one. It is diagnostic
    // only and never gates acceptance.
    let osnr_estimate_db: f64 = candidate
        .edges()
        .iter()
        .map(|&e| graph.edge(e).link().osnr_db())
        .sum();
    debug!(osnr_estimate_db, hops = candidate.hops(), "accepted candidate");

    let links = candidate
        .edges()
        .iter()
        .map(|&e| graph.edge(e).link().clone())
        .collect();
    Some(Lightpath::new(
        links,
        allocation,
        candidate.cost(),
        osnr_estimate_db,
    ))
}

/// Source node of every edge plus the final destination.
fn collect_path_nodes<'t>(graph: &PathGraph<'t>, candidate: &CandidatePath) -> Vec<&'t Node> {
    let mut nodes = Vec::with_capacity(candidate.hops() + 1);
    for &edge_index in candidate.edges() {
        nodes.push(graph.node(graph.edge(edge_index).source()));
    }
    if let Some(&last) = candidate.edges().last() {
        nodes.push(graph.node(graph.edge(last).target()));
    }
    nodes
}

/// Intersection of the per-band bitmaps of every path node with the
/// operator spectrum-filling rule, if any. A node without a map for the
/// band restricts nothing.
fn common_availability(
    grid: &FrequencyGrid,
    request: &PathRequest,
    profiles: &OperatorProfiles,
    path_nodes: &[&Node],
) -> SpectrumBitmap {
    let mut availability = SpectrumBitmap::all_available(grid.total_slots());
    for node in path_nodes {
        match node.spectrum(request.band()) {
            Some(bitmap) => availability.intersect_with(bitmap),
            None => {
                debug!(node = %node.id(), band = request.band(), "node has no availability map for the band");
            }
        }
    }
    if let Some(profile) = request.customer_profile() {
        if let Some(rule) = profiles.bitmap_constraint(profile) {
            availability.intersect_with(rule);
        }
    }
    availability
}

/// All-or-nothing allocation of a manually requested slot, reserved
/// through an interval collection so the whole requested range is either
/// granted or refused.
fn fixed_allocation(
    band: &str,
    grid: &FrequencyGrid,
    selection: &SpectrumSelection,
    availability: &SpectrumBitmap,
) -> Option<SpectrumAllocation> {
    let half = selection.width() / 2;
    let mut reservation = IntervalCollection::new(grid);
    reservation.add(Interval::new(
        selection.center() - half,
        selection.center() + half,
    ));
    let granted = reservation.subset(availability);
    let lo = granted.available_slots().next()?;
    let slots = SlotRange::new(lo, lo + granted.available_count() - 1).ok()?;
    Some(spectrum_of(band, grid, slots, None))
}

/// Fixed-grid scan: channel numbers ascend from the top of the band, so
/// channel 1 is the highest slot index.
fn channel_allocation(
    band: &str,
    grid: &FrequencyGrid,
    availability: &SpectrumBitmap,
) -> Option<SpectrumAllocation> {
    let total = grid.total_slots();
    for channel in 1..=total {
        let index = total - channel;
        if availability.is_available(index) {
            let slots = SlotRange::new(index, index).ok()?;
            return Some(spectrum_of(band, grid, slots, Some(channel as u16)));
        }
    }
    None
}

fn spectrum_of(
    band: &str,
    grid: &FrequencyGrid,
    slots: SlotRange,
    channel: Option<u16>,
) -> SpectrumAllocation {
    SpectrumAllocation::new(
        band,
        slots,
        channel,
        slots.min_frequency(grid),
        slots.max_frequency(grid),
    )
}
