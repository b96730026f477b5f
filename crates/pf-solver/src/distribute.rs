//! Writing a traced flow through the part set.

use pf_parts::{FlowMap, LiquidFlows};

use crate::flow_part::FlowPart;
use crate::segment::{Continuation, Segment};

/// Distribute `flows` through the tree rooted at `segment`, returning the
/// updated part collection (functional update; nothing is mutated in
/// place from the caller's point of view).
///
/// For a single flow of magnitude m entering a part at edge `a` and
/// leaving at edge `b`, the part's accumulator receives `flows[a] -= m`
/// and `flows[b] += m`; summed over a fully traced loop the contributions
/// net to zero. At a fork the flow divides by the current-divider rule:
/// lower-resistance branches carry proportionally more.
pub fn distribute(mut parts: Vec<FlowPart>, segment: &Segment, flows: &LiquidFlows) -> Vec<FlowPart> {
    let mut delta = FlowMap::default();

    let entry = delta.entry(segment.in_coord()).or_default();
    for (liquid, flow) in flows {
        *entry.entry(liquid.clone()).or_insert(0.0) -= flow;
    }

    match segment.continuation() {
        Continuation::Fork { splits, .. } => {
            let inverse_total: f64 = splits.iter().map(|split| 1.0 / split.friction()).sum();
            for split in splits {
                let share = (1.0 / split.friction()) / inverse_total;
                let split_flows: LiquidFlows = flows
                    .iter()
                    .map(|(liquid, flow)| (liquid.clone(), flow * share))
                    .collect();
                let entry = delta.entry(split.in_coord()).or_default();
                for (liquid, flow) in &split_flows {
                    *entry.entry(liquid.clone()).or_insert(0.0) += flow;
                }
                parts = distribute(parts, split, &split_flows);
            }
        }
        _ => {
            // plain continuation (or terminal): full flow out of every
            // recorded route
            for route in segment.routes() {
                let entry = delta.entry(route.out).or_default();
                for (liquid, flow) in flows {
                    *entry.entry(liquid.clone()).or_insert(0.0) += flow;
                }
            }
        }
    }

    accumulate(&mut parts[segment.part_idx()].flows, &delta);

    if let Some(next) = segment.next() {
        parts = distribute(parts, next, flows);
    }
    parts
}

/// Additive merge of one part's flow contribution into its accumulator.
pub(crate) fn accumulate(into: &mut FlowMap, delta: &FlowMap) {
    for (coord, liquid_flows) in delta {
        let entry = into.entry(*coord).or_default();
        for (liquid, flow) in liquid_flows {
            *entry.entry(liquid.clone()).or_insert(0.0) += flow;
        }
    }
}
