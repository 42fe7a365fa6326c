use crate::graph::*;

/// A directed multigraph addressed by dense indices.
///
/// Vertices are numbered in the order they are added, and out-edges and
/// in-edges are reported in the order the edges were added.
/// Parallel edges and self-loops are kept as they are.
///
/// |                    | Complexity       |
/// | ------------------ | ---------------- |
/// | `add_vertex`       | amortized $O(1)$ |
/// | `add_edge`         | amortized $O(1)$ |
/// | `vertex_size`      | $O(1)$           |
/// | `iter_vertices`    | $O(1)$ per item  |
/// | `contains_vertex`  | $O(1)$           |
/// | `edge_size`        | $O(1)$           |
/// | `iter_edges`       | $O(1)$ per item  |
/// | `find_edge`        | $O(1)$           |
/// | `in_edges`         | $O(1)$ per item  |
/// | `out_edges`        | $O(1)$ per item  |
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AdjacencyListGraph {
    edges: Vec<(VertexId, VertexId)>,
    out_edges: Vec<Vec<EdgeId>>,
    in_edges: Vec<Vec<EdgeId>>,
}

impl AdjacencyListGraph {
    fn edge_at(&self, e: EdgeId) -> Edge {
        let (source, sink) = self.edges[e.to_raw()];
        Edge {
            id: e,
            source,
            sink,
        }
    }

    fn incident<'a>(&'a self, ids: Option<&'a Vec<EdgeId>>) -> Box<dyn Iterator<Item = Edge> + 'a> {
        match ids {
            Some(ids) => Box::new(ids.iter().map(move |e| self.edge_at(*e))),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl std::fmt::Debug for AdjacencyListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacencyListGraph {{")?;
        for v in self.iter_vertices() {
            writeln!(f, "{:?}:", v)?;
            for e in self.out_edges(&v) {
                writeln!(f, "  -> {:?} by {:?}", e.sink, e.id)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl GrowableGraph for AdjacencyListGraph {
    fn new() -> Self {
        Self::default()
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = VertexId::new(self.out_edges.len());
        self.out_edges.push(vec![]);
        self.in_edges.push(vec![]);
        vid
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId {
        debug_assert!(self.contains_vertex(&source));
        debug_assert!(self.contains_vertex(&sink));
        let eid = EdgeId::new(self.edges.len());
        self.edges.push((source, sink));
        self.out_edges[source.to_raw()].push(eid);
        self.in_edges[sink.to_raw()].push(eid);
        eid
    }
}

impl QueryableGraph for AdjacencyListGraph {
    fn vertex_size(&self) -> usize {
        self.out_edges.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertex_size()).map(VertexId::new))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.vertex_size()
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new((0..self.edge_size()).map(|e| self.edge_at(EdgeId::new(e))))
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        if e.to_raw() < self.edge_size() {
            Some(self.edge_at(*e))
        } else {
            None
        }
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.incident(self.in_edges.get(v.to_raw()))
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.incident(self.out_edges.get(v.to_raw()))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{directed::*, *};
    use quickcheck_macros::*;

    #[test]
    fn keeps_insertion_order() {
        let mut g = AdjacencyListGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        g.add_edge(a, c);
        g.add_edge(a, b);
        g.add_edge(a, c);
        let sinks: Vec<_> = g.out_edges(&a).map(|e| e.sink).collect();
        assert_eq!(sinks, vec![c, b, c]);
        let sources: Vec<_> = g.in_edges(&c).map(|e| e.source).collect();
        assert_eq!(sources, vec![a, a]);
    }

    #[test]
    fn self_loop_is_both_in_and_out() {
        let mut g = AdjacencyListGraph::new();
        let v = g.add_vertex();
        let e = g.add_edge(v, v);
        assert_eq!(g.out_edges(&v).map(|e| e.id).collect::<Vec<_>>(), vec![e]);
        assert_eq!(g.in_edges(&v).map(|e| e.id).collect::<Vec<_>>(), vec![e]);
    }

    #[test]
    fn unknown_ids() {
        let mut g = AdjacencyListGraph::new();
        let v = g.add_vertex();
        let ghost = VertexId::new(7);
        assert!(g.contains_vertex(&v));
        assert!(!g.contains_vertex(&ghost));
        assert_eq!(g.out_edges(&ghost).count(), 0);
        assert_eq!(g.in_edges(&ghost).count(), 0);
        assert_eq!(g.find_edge(&EdgeId::new(0)), None);
    }

    #[quickcheck]
    fn incidence_agrees_with_edge_list(ops: Ops) {
        let g: AdjacencyListGraph = (&ops).into();
        let mut by_out: Vec<_> = g.iter_vertices().flat_map(|v| g.out_edges(&v)).collect();
        let mut by_in: Vec<_> = g.iter_vertices().flat_map(|v| g.in_edges(&v)).collect();
        let all: Vec<_> = g.iter_edges().collect();
        by_out.sort();
        by_in.sort();
        assert_eq!(by_out, all);
        assert_eq!(by_in, all);
        for e in all {
            assert_eq!(g.find_edge(&e.id), Some(e));
        }
    }
}
