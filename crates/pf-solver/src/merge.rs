//! Reconciliation of superposed flow contributions.

use pf_core::{LiquidId, is_zero};
use pf_parts::{FlowMap, LiquidFlows};

/// Net the superposed contributions of all sources into physical flow.
///
/// Per edge coordinate: opposing-direction contributions collapse onto the
/// dominant side, and pump-injected pressure (the acceleration
/// pseudo-liquid) is folded into the real liquids. The acceleration key
/// never appears in the result.
pub fn reconcile(flows: &FlowMap) -> FlowMap {
    let mut merged = FlowMap::default();
    for (coord, liquid_flows) in flows {
        if let Some(reconciled) = reconcile_edge(liquid_flows) {
            merged.insert(*coord, reconciled);
        }
    }
    merged
}

fn reconcile_edge(flows: &LiquidFlows) -> Option<LiquidFlows> {
    let accelerate = LiquidId::accelerate();
    let mut work = flows.clone();

    let (mut pos, mut neg) = split_totals(&work);

    // a pump pushing hard enough against the net liquid flow reverses it
    if let Some(acceleration) = work.get(&accelerate).copied() {
        let liquids_total = pos + neg - acceleration;
        if !is_zero(liquids_total) && acceleration / liquids_total < -1.0 {
            let reversed_total = acceleration + liquids_total;
            scale(&mut work, reversed_total / liquids_total);
            work.shift_remove(&accelerate);
            (pos, neg) = split_totals(&work);
        }
    }

    let total = pos + neg;

    // flow in both directions cannot both be physical: keep the dominant
    // side, rescaled to the net volume
    if !is_zero(pos) && !is_zero(neg) {
        if pos >= -neg {
            work.retain(|_, flow| *flow >= 0.0);
            scale(&mut work, total / pos);
        } else {
            work.retain(|_, flow| *flow < 0.0);
            scale(&mut work, total / neg);
        }
    }

    // fold surviving acceleration into the liquids it pushes along
    if let Some(acceleration) = work.shift_remove(&accelerate) {
        let carried = total - acceleration;
        if !is_zero(carried) {
            scale(&mut work, total / carried);
        } else if !work.is_empty() {
            // the carriers are present but idle: the pump's volume is
            // theirs, in equal shares
            let share = total / work.len() as f64;
            for flow in work.values_mut() {
                *flow = share;
            }
        } else {
            // acceleration with no liquid to carry it
            return None;
        }
    }

    if work.is_empty() { None } else { Some(work) }
}

fn split_totals(flows: &LiquidFlows) -> (f64, f64) {
    let mut pos = 0.0;
    let mut neg = 0.0;
    for flow in flows.values() {
        if *flow >= 0.0 {
            pos += flow;
        } else {
            neg += flow;
        }
    }
    (pos, neg)
}

fn scale(flows: &mut LiquidFlows, factor: f64) {
    for flow in flows.values_mut() {
        *flow *= factor;
    }
}
