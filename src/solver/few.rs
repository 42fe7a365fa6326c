use crate::{algorithm::VertexWeightedShortestPath, graph::*, instance::Instance};

/// Fewest red vertices on any `s`-`t` walk, `s` and `t` included.
///
/// Returns `None` if `t` is not reachable from `s`.
pub fn solve_few(instance: &Instance) -> Option<usize> {
    let weight = |v: VertexId| usize::from(instance.is_red(v));
    instance
        .graph()
        .vertex_weighted_distance(instance.source(), instance.target(), weight)
}
