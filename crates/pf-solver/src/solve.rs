//! Superposition driver and pipeline entry points.

use pf_parts::{LiquidFlows, PartCatalog, StatePart};
use tracing::debug;

use crate::distribute::distribute;
use crate::error::SolveResult;
use crate::flow_part::{FlowPart, build_flow_parts, normalize_flows};
use crate::merge::reconcile;
use crate::trace::trace;

/// Add every source's contribution to the part set.
///
/// A source edge is any route carrying an explicit pressure and at least
/// one liquid. Each source is traced and its flow (pressure over the
/// tree's total friction) distributed; contributions are purely additive,
/// so source order cannot affect the sums. A source whose trace resolves
/// nowhere is skipped.
pub fn superpose(parts: Vec<FlowPart>) -> Vec<FlowPart> {
    let mut acc = parts;
    for idx in 0..acc.len() {
        let transitions = acc[idx].transitions.clone();
        for (in_coord, routes) in &transitions {
            for route in routes {
                if !route.is_source() {
                    continue;
                }
                let Some(segment) = trace(&acc, idx, *in_coord) else {
                    debug!(part = %acc[idx].part.id(), edge = %in_coord, "source has no path");
                    continue;
                };
                let friction = segment.friction();
                let magnitude = route.pressure_value() / friction;
                debug!(
                    part = %acc[idx].part.id(),
                    edge = %in_coord,
                    friction,
                    magnitude,
                    "distributing source"
                );
                let start_flow: LiquidFlows = route
                    .liquids
                    .iter()
                    .map(|liquid| (liquid.clone(), magnitude))
                    .collect();
                acc = distribute(acc, &segment, &start_flow);
            }
        }
    }
    acc
}

/// Superpose all sources, then reconcile each part's accumulator into net
/// physical flow.
pub fn calculate_flows(parts: Vec<FlowPart>) -> Vec<FlowPart> {
    superpose(parts)
        .into_iter()
        .map(|mut part| {
            part.flows = reconcile(&part.flows);
            part
        })
        .collect()
}

/// The full pipeline: place parts into grid space, superpose every
/// pressure source, reconcile. Pure; recomputed from scratch per call.
pub fn solve(parts: &[StatePart], registry: &PartCatalog) -> SolveResult<Vec<FlowPart>> {
    Ok(calculate_flows(build_flow_parts(parts, registry)?))
}

/// [`solve`], with each part's flow keys rewritten back to part-local
/// coordinates for rendering.
pub fn solve_normalized(parts: &[StatePart], registry: &PartCatalog) -> SolveResult<Vec<FlowPart>> {
    let mut solved = solve(parts, registry)?;
    for part in &mut solved {
        let size = registry.size(&part.part)?;
        part.flows = normalize_flows(part, size);
    }
    Ok(solved)
}
