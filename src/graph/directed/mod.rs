mod adjacency_list;
pub use self::adjacency_list::*;

#[cfg(test)]
pub use self::tests::*;

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use petgraph::graph::{DiGraph, NodeIndex};
    use quickcheck::Arbitrary;
    use rs_quickcheck_util::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Op {
        AddVertex,
        AddEdge((VertexId, VertexId)),
    }

    /// Random sequences of graph growth, for property tests of graph algorithms.
    #[derive(Clone)]
    pub struct Ops {
        pub ops: Vec<Op>,
    }

    impl std::fmt::Debug for Ops {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.ops)
        }
    }

    impl Ops {
        pub fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
            self.ops.iter()
        }

        /// The same growth as a petgraph graph, whose node indices line up
        /// with our vertex ids.
        pub fn to_petgraph(&self) -> DiGraph<(), ()> {
            let mut res = DiGraph::new();
            for op in self.iter() {
                match op {
                    Op::AddVertex => {
                        res.add_node(());
                    }
                    Op::AddEdge((src, snk)) => {
                        res.add_edge(NodeIndex::new(src.to_raw()), NodeIndex::new(snk.to_raw()), ());
                    }
                }
            }
            res
        }

        /// Drops every edge that does not go from a lower to a higher vertex id.
        pub fn acyclic(&self) -> Self {
            let ops = self
                .iter()
                .filter(|op| match op {
                    Op::AddVertex => true,
                    Op::AddEdge((src, snk)) => src < snk,
                })
                .copied()
                .collect();
            Self { ops }
        }
    }

    impl From<&Ops> for directed::AdjacencyListGraph {
        fn from(ops: &Ops) -> Self {
            let mut res = Self::new();
            for op in ops.iter() {
                match op {
                    Op::AddVertex => {
                        res.add_vertex();
                    }
                    Op::AddEdge((src, snk)) => {
                        res.add_edge(*src, *snk);
                    }
                }
            }
            res
        }
    }

    impl quickcheck::Arbitrary for Ops {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let mut vertex_size = 0usize;
            let ops = gen_bytes(g, b"abcd.", b'.', 0..)
                .iter()
                .filter_map(|_| match u8::arbitrary(g) % 3 {
                    0 => {
                        vertex_size += 1;
                        Some(Op::AddVertex)
                    }
                    1 | 2 => {
                        if vertex_size == 0 {
                            None
                        } else {
                            let src = VertexId::new(usize::arbitrary(g) % vertex_size);
                            let snk = VertexId::new(usize::arbitrary(g) % vertex_size);
                            Some(Op::AddEdge((src, snk)))
                        }
                    }
                    _ => unreachable!(),
                })
                .collect();
            Self { ops }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let l = self.ops.len();
            let me = self.clone();
            let it = std::iter::successors(Some(l / 2), move |n| {
                let nxt = (n + l) / 2 + 1;
                if nxt >= l {
                    None
                } else {
                    Some(nxt)
                }
            })
            .map(move |n| Self {
                ops: me.ops[0..n].to_vec(),
            });
            Box::new(it)
        }
    }
}
