use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;

pub trait TopologicalSort
where
    Self: QueryableGraph + Sized,
{
    /// Kahn's algorithm.
    ///
    /// Vertices are peeled off while their in-degree, counting only edges
    /// from vertices not yet peeled, is zero.
    /// On a cyclic graph the iterator stops early, so fewer than
    /// `vertex_size()` vertices are yielded.
    fn toposort(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(ToposortIter::new(self))
    }
}

impl<G: QueryableGraph> TopologicalSort for G {}

struct ToposortIter<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    degree_queue: KeyedPriorityQueue<VertexId, Reverse<usize>, RandomState>,
}

impl<'a, G> Iterator for ToposortIter<'a, G>
where
    G: QueryableGraph,
{
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let (vert, in_degree) = self.degree_queue.pop()?;
        if in_degree.0 > 0 {
            return None;
        }
        for e in self.graph.out_edges(&vert) {
            // the sink is still queued: it cannot have been peeled before `vert`
            if let Some(Reverse(d)) = self.degree_queue.get_priority(&e.sink).copied() {
                self.degree_queue.push(e.sink, Reverse(d.saturating_sub(1)));
            }
        }
        Some(vert)
    }
}

impl<'a, G> ToposortIter<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G) -> Self {
        let mut res = Self {
            graph,
            degree_queue: KeyedPriorityQueue::with_capacity_and_hasher(
                graph.vertex_size(),
                RandomState::new(),
            ),
        };
        for v in graph.iter_vertices() {
            let in_degree = graph.in_edges(&v).count();
            res.degree_queue.push(v, Reverse(in_degree));
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::CycleDetection;
    use crate::graph::directed::*;
    use quickcheck_macros::quickcheck;
    use std::collections::HashMap;

    #[quickcheck]
    fn toposort(ops: Ops) {
        let graph: AdjacencyListGraph = (&ops.acyclic()).into();
        let order: Vec<_> = graph.toposort().collect();
        assert_eq!(order.len(), graph.vertex_size());
        let position: HashMap<_, _> = order.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        for e in graph.iter_edges() {
            assert!(position[&e.source] < position[&e.sink]);
        }
    }

    #[quickcheck]
    fn stops_early_exactly_on_cycles(ops: Ops) {
        let graph: AdjacencyListGraph = (&ops).into();
        let peeled = graph.toposort().count();
        assert_eq!(peeled < graph.vertex_size(), graph.is_cyclic());
    }

    #[test]
    fn parallel_edges_count_twice() {
        let mut g = AdjacencyListGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        g.add_edge(a, b);
        g.add_edge(a, b);
        assert_eq!(g.toposort().collect::<Vec<_>>(), vec![a, b]);
    }
}
