use crate::graph::*;

pub trait GrowableGraph {
    fn new() -> Self;
    fn add_vertex(&mut self) -> VertexId;
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId;
}

pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn find_edge(&self, e: &EdgeId) -> Option<Edge>;
    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// Out-edges for [Direction::Forward], in-edges for [Direction::Backward].
    fn edges_towards(
        &self,
        v: &VertexId,
        direction: Direction,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        match direction {
            Direction::Forward => self.out_edges(v),
            Direction::Backward => self.in_edges(v),
        }
    }
}
