//! Recursive path tracing over the placed flow graph.

use pf_geom::Coordinate;
use pf_parts::{FlowRoute, Transitions};
use tracing::trace as trace_event;

use crate::flow_part::FlowPart;
use crate::segment::Segment;

/// Trace every route out of one inbound edge of one part, producing the
/// segment tree of everywhere the liquid can go. Returns `None` when no
/// route leads anywhere (the edge is a dead end).
///
/// Tracing works on a throwaway copy of the connectivity: at each visited
/// part the just-crossed coordinate key is removed from every candidate's
/// view, so the edge cannot immediately be re-entered from the other side.
/// Only that one key is removed; a part stays a candidate for later
/// visits through its other edges, which is what allows closed loops. A
/// route whose target equals the trace origin closes such a loop and is a
/// valid terminal.
pub fn trace(parts: &[FlowPart], start: usize, in_coord: Coordinate) -> Option<Segment> {
    let candidates: Vec<Transitions> = parts.iter().map(|p| p.transitions.clone()).collect();
    // the root has no inbound route; a synthetic one supplies the default
    // entry friction
    let entry = FlowRoute::to(in_coord);
    trace_inner(&candidates, start, in_coord, in_coord, entry)
}

fn trace_inner(
    candidates: &[Transitions],
    start: usize,
    in_coord: Coordinate,
    start_coord: Coordinate,
    in_route: FlowRoute,
) -> Option<Segment> {
    let out_routes = candidates[start].get(&in_coord).cloned().unwrap_or_default();

    let stripped: Vec<Transitions> = candidates
        .iter()
        .map(|transitions| {
            let mut stripped = transitions.clone();
            stripped.shift_remove(&in_coord);
            stripped
        })
        .collect();

    let mut node = Segment::new(start, in_coord, in_route);
    let mut recorded: Vec<FlowRoute> = Vec::new();

    for route in out_routes {
        if route.out == start_coord {
            // the route closes the loop back to where the whole trace
            // began: a valid terminal, not a dead end
            recorded.push(route);
            continue;
        }
        // try colliding candidates in turn until one resolves; candidates
        // whose recursion fails are rejected for this route only
        let mut rejected: Vec<usize> = Vec::new();
        loop {
            let Some(next_idx) = adjacent_part(&stripped, route.out, start, &rejected) else {
                trace_event!(out = %route.out, "route leads nowhere");
                break;
            };
            match trace_inner(&stripped, next_idx, route.out, start_coord, route.clone()) {
                Some(child) => {
                    node.add_child(child);
                    recorded.push(route);
                    break;
                }
                None => rejected.push(next_idx),
            }
        }
    }

    if recorded.is_empty() {
        return None;
    }
    dedup_routes(&mut recorded);
    node.set_routes(recorded);
    node.collapse_reconvergence();
    Some(node)
}

/// First candidate exposing a transition keyed at `coord`, excluding the
/// part being left and candidates already rejected for this route.
fn adjacent_part(
    candidates: &[Transitions],
    coord: Coordinate,
    exclude: usize,
    rejected: &[usize],
) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .find(|(idx, transitions)| {
            *idx != exclude && !rejected.contains(idx) && transitions.contains_key(&coord)
        })
        .map(|(idx, _)| idx)
}

fn dedup_routes(routes: &mut Vec<FlowRoute>) {
    let mut seen: Vec<FlowRoute> = Vec::with_capacity(routes.len());
    routes.retain(|route| {
        if seen.contains(route) {
            false
        } else {
            seen.push(route.clone());
            true
        }
    });
}
