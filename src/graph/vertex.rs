/// ID for vertices, which are essentially `usize`.
///
/// Instances intern vertex names into dense ids at parse time,
/// so the `n`-th declared vertex is `VertexId(n)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}
