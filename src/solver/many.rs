use crate::{
    algorithm::{CycleDetection, TopologicalSort},
    graph::*,
    instance::Instance,
};
use ahash::RandomState;
use log::debug;
use std::collections::HashMap;

/// Outcome of [solve_many].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Many {
    /// Most red vertices on an `s`-`t` path.
    Value(usize),
    /// `t` is not reachable from `s`.
    Unreachable,
    /// The instance is outside the class this solver handles.
    Inapplicable(Inapplicable),
}

/// Why [solve_many] declined an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inapplicable {
    /// At least one `--` edge was declared.
    Undirected,
    /// The directed graph has a cycle.
    Cyclic,
}

impl Many {
    pub fn value(&self) -> Option<usize> {
        match self {
            Many::Value(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        !matches!(self, Many::Inapplicable(_))
    }
}

impl std::fmt::Display for Many {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Many::Value(v) => write!(f, "{}", v),
            Many::Unreachable => write!(f, "-1"),
            Many::Inapplicable(_) => write!(f, "?!"),
        }
    }
}

impl std::fmt::Display for Inapplicable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Inapplicable::Undirected => write!(f, "instance has undirected edges"),
            Inapplicable::Cyclic => write!(f, "instance has a directed cycle"),
        }
    }
}

/// Most red vertices on any `s`-`t` path, `s` and `t` included.
///
/// The problem is NP-hard in general. It is solved only for purely directed
/// acyclic instances, by dynamic programming over a topological order;
/// everything else is declined with [Many::Inapplicable].
pub fn solve_many(instance: &Instance) -> Many {
    match longest_red_path(instance) {
        Ok(Some(v)) => Many::Value(v),
        Ok(None) => Many::Unreachable,
        Err(why) => {
            debug!("many: declined, {}", why);
            Many::Inapplicable(why)
        }
    }
}

fn longest_red_path(instance: &Instance) -> Result<Option<usize>, Inapplicable> {
    if instance.has_undirected() {
        return Err(Inapplicable::Undirected);
    }
    let graph = instance.graph();
    if graph.is_cyclic() {
        return Err(Inapplicable::Cyclic);
    }
    let order: Vec<_> = graph.toposort().collect();
    if order.len() != graph.vertex_size() {
        return Err(Inapplicable::Cyclic);
    }

    let weight = |v: VertexId| usize::from(instance.is_red(v));
    // vertices missing from `best` are not reachable from the source
    let mut best: HashMap<VertexId, usize, RandomState> =
        HashMap::with_capacity_and_hasher(graph.vertex_size(), RandomState::new());
    best.insert(instance.source(), weight(instance.source()));
    for v in order {
        let base = match best.get(&v) {
            Some(base) => *base,
            None => continue,
        };
        for e in graph.out_edges(&v) {
            let candidate = base + weight(e.sink);
            best.entry(e.sink)
                .and_modify(|known| *known = (*known).max(candidate))
                .or_insert(candidate);
        }
    }
    Ok(best.get(&instance.target()).copied())
}
