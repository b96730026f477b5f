//! The segment tree produced by tracing a path through the flow graph.

use pf_geom::Coordinate;
use pf_parts::FlowRoute;

/// One visited part along a traced path.
///
/// A segment records the part it sits on (by index into the traced part
/// list), the edge the trace entered through, the route it was entered by
/// (whose friction is this node's entry cost), and the routes out of it
/// that lead anywhere. What follows is a [`Continuation`].
#[derive(Clone, Debug)]
pub struct Segment {
    part_idx: usize,
    in_coord: Coordinate,
    in_route: FlowRoute,
    routes: Vec<FlowRoute>,
    cont: Continuation,
}

/// What comes after a segment.
///
/// Only a `Fork` may carry both splits and a follow-up: the optional
/// `next` is the shared continuation grafted in when sibling branches
/// reconverge. A plain node is either a dead end (`End`, which includes
/// routes closing the loop back to the trace origin) or a simple chain.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Continuation {
    #[default]
    End,
    Chain(Box<Segment>),
    Fork {
        splits: Vec<Segment>,
        next: Option<Box<Segment>>,
    },
}

impl Segment {
    pub(crate) fn new(part_idx: usize, in_coord: Coordinate, in_route: FlowRoute) -> Self {
        Self {
            part_idx,
            in_coord,
            in_route,
            routes: Vec::new(),
            cont: Continuation::End,
        }
    }

    pub fn part_idx(&self) -> usize {
        self.part_idx
    }

    /// The edge this segment was entered through.
    pub fn in_coord(&self) -> Coordinate {
        self.in_coord
    }

    pub fn in_route(&self) -> &FlowRoute {
        &self.in_route
    }

    /// Routes out of this segment that resolved to a continuation or
    /// closed the loop back to the trace origin.
    pub fn routes(&self) -> &[FlowRoute] {
        &self.routes
    }

    pub fn continuation(&self) -> &Continuation {
        &self.cont
    }

    /// The follow-up segment carried at the same flow magnitude: a chain's
    /// tail, or the shared continuation after a fork reconverges.
    pub fn next(&self) -> Option<&Segment> {
        match &self.cont {
            Continuation::End => None,
            Continuation::Chain(next) => Some(next),
            Continuation::Fork { next, .. } => next.as_deref(),
        }
    }

    pub fn splits(&self) -> &[Segment] {
        match &self.cont {
            Continuation::Fork { splits, .. } => splits,
            _ => &[],
        }
    }

    pub(crate) fn set_routes(&mut self, routes: Vec<FlowRoute>) {
        self.routes = routes;
    }

    /// Attach a traced child. The first child becomes the chain tail; a
    /// second turns the node into a fork (moving the tail into the
    /// splits); further children join the splits.
    pub(crate) fn add_child(&mut self, child: Segment) {
        self.cont = match std::mem::take(&mut self.cont) {
            Continuation::End => Continuation::Chain(Box::new(child)),
            Continuation::Chain(first) => Continuation::Fork {
                splits: vec![*first, child],
                next: None,
            },
            Continuation::Fork { mut splits, next } => {
                splits.push(child);
                Continuation::Fork { splits, next }
            }
        };
    }

    /// Total flow resistance of the tree rooted here.
    ///
    /// The entry cost is the friction of the route this segment was
    /// entered by. Chained segments add in series; a fork combines its
    /// splits by the parallel-resistor rule and adds its shared
    /// continuation (if any) in series after them.
    pub fn friction(&self) -> f64 {
        let mut total = self.in_route.friction_value();
        match &self.cont {
            Continuation::End => {}
            Continuation::Chain(next) => total += next.friction(),
            Continuation::Fork { splits, next } => {
                let mut parallel = 0.0;
                for split in splits {
                    let f = split.friction();
                    parallel = if parallel == 0.0 {
                        f
                    } else {
                        parallel * f / (parallel + f)
                    };
                }
                total += parallel;
                if let Some(next) = next {
                    total += next.friction();
                }
            }
        }
        total
    }

    /// Leaf segments below this node. Splits take precedence over a
    /// fork's grafted continuation, matching the collapse pass which only
    /// inspects branch tails.
    fn leaves(&self) -> Vec<&Segment> {
        match &self.cont {
            Continuation::End => vec![self],
            Continuation::Chain(next) => next.leaves(),
            Continuation::Fork { splits, .. } => splits.iter().flat_map(Self::leaves).collect(),
        }
    }

    /// Detach every leaf equal to `target`. Leaves hang off `Chain` tails
    /// and fork `next` pointers; fork splits themselves are never removed.
    fn remove_leaf(&mut self, target: &Segment) {
        match &mut self.cont {
            Continuation::End => {}
            Continuation::Chain(next) => {
                if next.as_ref() == target {
                    self.cont = Continuation::End;
                } else {
                    next.remove_leaf(target);
                }
            }
            Continuation::Fork { splits, next } => {
                for split in splits {
                    split.remove_leaf(target);
                }
                if let Some(tail) = next {
                    if tail.as_ref() == target {
                        *next = None;
                    } else {
                        tail.remove_leaf(target);
                    }
                }
            }
        }
    }

    /// Collapse sibling branches that reconverge on an identical tail.
    ///
    /// While every leaf below this fork is structurally the same segment,
    /// pop one copy, detach the rest, and graft it as the fork's shared
    /// continuation so friction and flow count it once. A prior shared
    /// continuation becomes the collapsed node's own child.
    pub(crate) fn collapse_reconvergence(&mut self) {
        while matches!(self.cont, Continuation::Fork { .. }) {
            let Some((mut merged, count)) = self.duplicated_leaf() else {
                return;
            };
            self.remove_leaf(&merged);
            if self.leaves().len() == count {
                // the duplicated leaves are direct splits and cannot be
                // detached; bail out instead of spinning
                return;
            }
            if let Continuation::Fork { next, .. } = &mut self.cont {
                if let Some(prior) = next.take() {
                    merged.add_child(*prior);
                }
                *next = Some(Box::new(merged));
            }
        }
    }

    /// A clone of the leaf every branch tail agrees on, with the current
    /// leaf count, when all leaves are structurally identical.
    fn duplicated_leaf(&self) -> Option<(Segment, usize)> {
        let leaves = self.leaves();
        let (first, rest) = leaves.split_first()?;
        if rest.is_empty() || !rest.iter().all(|leaf| leaf == first) {
            return None;
        }
        Some(((*first).clone(), leaves.len()))
    }
}

/// Structural equality, used to detect reconverging branches: same part,
/// same inbound edge, same recorded routes, same downstream shape. The
/// inbound route is deliberately ignored: two branches may approach a
/// shared tail over different routes.
impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.part_idx == other.part_idx
            && self.in_coord == other.in_coord
            && self.routes == other.routes
            && self.cont == other.cont
    }
}
