use crate::{algorithm::BreadthFirstSearch, graph::*, instance::Instance};

/// Whether some `s`-`t` walk passes through at least one red vertex.
///
/// A red vertex lies on such a walk iff it is reachable from `s` and `t` is
/// reachable from it, so two searches replace any path enumeration: one
/// forward from `s`, one backward from `t`.
pub fn solve_some(instance: &Instance) -> bool {
    let graph = instance.graph();
    let from_source = graph.reachable(instance.source(), Direction::Forward);
    let to_target = graph.reachable(instance.target(), Direction::Backward);
    instance
        .red_vertices()
        .any(|v| from_source.contains(&v) && to_target.contains(&v))
}
