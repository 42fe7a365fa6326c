use super::VertexId;

/// ID for edges, which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// Information about a low-level edge.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub sink: VertexId,
}

impl EdgeId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

impl Edge {
    /// The endpoint reached when walking this edge in `direction`.
    pub fn head(&self, direction: Direction) -> VertexId {
        match direction {
            Direction::Forward => self.sink,
            Direction::Backward => self.source,
        }
    }
}

/// Which way edges are walked by a traversal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    /// From source to sink, along out-edges.
    Forward,
    /// From sink to source, along in-edges.
    Backward,
}
