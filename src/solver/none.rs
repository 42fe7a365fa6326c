use crate::{algorithm::BreadthFirstSearch, graph::*, instance::Instance};

/// Length of a shortest `s`-`t` path whose internal vertices are all non-red.
///
/// `s` and `t` themselves may be red. Returns `None` if there is no such path.
pub fn solve_none(instance: &Instance) -> Option<usize> {
    let source = instance.source();
    let target = instance.target();
    let blocked = |v: VertexId| v != source && v != target && instance.is_red(v);
    instance
        .graph()
        .bfs(source, Direction::Forward, |e| !blocked(e.sink))
        .find(|(v, _)| *v == target)
        .map(|(_, depth)| depth)
}
