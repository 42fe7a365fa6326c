use crate::{algorithm::BreadthFirstSearch, graph::*, instance::Instance};

/// Whether some `s`-`t` walk alternates between red and non-red vertices.
///
/// Color is fixed per vertex, so one visited flag per vertex is enough:
/// a vertex reached along an alternating walk always has the same color.
/// The empty walk from `s` to itself alternates trivially.
pub fn solve_alternate(instance: &Instance) -> bool {
    let target = instance.target();
    instance
        .graph()
        .bfs(instance.source(), Direction::Forward, |e| {
            instance.is_red(e.source) != instance.is_red(e.sink)
        })
        .any(|(v, _)| v == target)
}
