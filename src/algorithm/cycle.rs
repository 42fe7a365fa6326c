use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;

pub trait CycleDetection
where
    Self: QueryableGraph + Sized,
{
    /// Finds an edge closing a directed cycle, if there is any.
    ///
    /// A three-color depth-first search over all vertices: an edge into a
    /// vertex that is still on the search stack is a back edge.
    /// The search stack is kept on the heap, as frames of a vertex and the
    /// out-edges of it not yet scanned, so deep graphs cannot overflow the
    /// call stack.
    fn find_back_edge(&self) -> Option<Edge> {
        let mut marks: HashMap<VertexId, Mark, RandomState> =
            HashMap::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        for root in self.iter_vertices() {
            if marks.contains_key(&root) {
                continue;
            }
            marks.insert(root, Mark::InProgress);
            let mut stack = vec![(root, self.out_edges(&root))];
            while let Some((vert, edges)) = stack.last_mut() {
                let vert = *vert;
                let next_edge = edges.next();
                match next_edge {
                    Some(e) => match marks.get(&e.sink) {
                        Some(Mark::InProgress) => return Some(e),
                        Some(Mark::Finished) => {}
                        None => {
                            marks.insert(e.sink, Mark::InProgress);
                            stack.push((e.sink, self.out_edges(&e.sink)));
                        }
                    },
                    None => {
                        marks.insert(vert, Mark::Finished);
                        stack.pop();
                    }
                }
            }
        }
        None
    }

    fn is_cyclic(&self) -> bool {
        self.find_back_edge().is_some()
    }
}

impl<G: QueryableGraph> CycleDetection for G {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn self_loop() {
        let mut g = AdjacencyListGraph::new();
        let v = g.add_vertex();
        let e = g.add_edge(v, v);
        assert_eq!(g.find_back_edge().map(|e| e.id), Some(e));
    }

    #[test]
    fn back_and_forth_cycle() {
        let mut g = AdjacencyListGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        g.add_edge(v0, v1);
        let back = g.add_edge(v1, v0);
        assert_eq!(g.find_back_edge().map(|e| e.id), Some(back));
    }

    #[test]
    fn diamond_is_acyclic() {
        let mut g = AdjacencyListGraph::new();
        let vs: Vec<_> = (0..4).map(|_| g.add_vertex()).collect();
        g.add_edge(vs[0], vs[1]);
        g.add_edge(vs[0], vs[2]);
        g.add_edge(vs[1], vs[3]);
        g.add_edge(vs[2], vs[3]);
        g.add_edge(vs[0], vs[3]);
        assert!(!g.is_cyclic());
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let mut g = AdjacencyListGraph::new();
        let vs: Vec<_> = (0..200_000).map(|_| g.add_vertex()).collect();
        for w in vs.windows(2) {
            g.add_edge(w[0], w[1]);
        }
        assert!(!g.is_cyclic());
        g.add_edge(vs[vs.len() - 1], vs[0]);
        assert!(g.is_cyclic());
    }

    #[quickcheck]
    fn agrees_with_petgraph(ops: Ops) {
        let g: AdjacencyListGraph = (&ops).into();
        let pg = ops.to_petgraph();
        assert_eq!(g.is_cyclic(), petgraph::algo::is_cyclic_directed(&pg));
    }

    #[quickcheck]
    fn forward_edges_only_are_acyclic(ops: Ops) {
        let g: AdjacencyListGraph = (&ops.acyclic()).into();
        assert!(!g.is_cyclic());
    }
}
