//! Red Scare instances: a directed graph whose vertices are either red or not,
//! plus a designated source and target.
//!
//! # File format
//!
//! ```plain
//! n m r
//! s t
//! <n lines: "name" or "name *">
//! <edge lines: "u -- v" or "u -> v">
//! ```
//!
//! A `*` after a vertex name makes the vertex red.
//! `u -> v` is a directed edge; `u -- v` is undirected and is stored as the
//! two arcs `u -> v` and `v -> u`.
//!
//! Names are interned into dense [VertexId]s while parsing; solvers only ever
//! see ids, and names come back at the report boundary.
//!
//! ```rust
//! use redscare::instance::Instance;
//!
//! let text = "3 2 1\nA C\nA\nB *\nC\nA -> B\nB -> C\n";
//! let instance: Instance = text.parse().unwrap();
//! assert_eq!(instance.vertex_size(), 3);
//! assert_eq!(instance.red_count(), 1);
//! assert!(!instance.has_undirected());
//! ```
mod error;
pub use self::error::*;
mod parse;

use crate::graph::{directed::AdjacencyListGraph, *};
use ahash::RandomState;
use bimap::BiHashMap;
use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

/// The header line `n m r`, as declared.
///
/// Only `vertices` is checked against the file; `edges` and `red` are
/// advisory and may disagree with what the file actually contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub vertices: usize,
    pub edges: usize,
    pub red: usize,
}

pub struct Instance {
    header: Header,
    source: VertexId,
    target: VertexId,
    graph: AdjacencyListGraph,
    names: BiHashMap<VertexId, String, RandomState, RandomState>,
    red: HashSet<VertexId, RandomState>,
    edge_lines: usize,
    has_undirected: bool,
}

impl Instance {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        parse::parse(reader)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn header(&self) -> Header {
        self.header
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    pub fn source_name(&self) -> &str {
        self.vertex_name(&self.source).unwrap_or_default()
    }

    pub fn target_name(&self) -> &str {
        self.vertex_name(&self.target).unwrap_or_default()
    }

    /// The underlying directed graph. Undirected edges appear as two arcs.
    pub fn graph(&self) -> &AdjacencyListGraph {
        &self.graph
    }

    pub fn vertex_size(&self) -> usize {
        self.graph.vertex_size()
    }

    /// Vertex names in declaration order.
    pub fn vertex_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph
            .iter_vertices()
            .filter_map(|v| self.vertex_name(&v))
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.names.get_by_right(name).copied()
    }

    pub fn vertex_name(&self, vid: &VertexId) -> Option<&str> {
        self.names.get_by_left(vid).map(String::as_str)
    }

    pub fn is_red(&self, vid: VertexId) -> bool {
        self.red.contains(&vid)
    }

    pub fn red_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.red.iter().copied()
    }

    /// Number of vertices marked red, as opposed to the declared `r`.
    pub fn red_count(&self) -> usize {
        self.red.len()
    }

    /// Number of edge lines, as opposed to the declared `m`.
    pub fn edge_count(&self) -> usize {
        self.edge_lines
    }

    pub fn has_undirected(&self) -> bool {
        self.has_undirected
    }
}

impl FromStr for Instance {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Instance {:?} {} -> {} {{",
            self.header,
            self.source_name(),
            self.target_name()
        )?;
        for v in self.graph.iter_vertices() {
            let name = self.vertex_name(&v).unwrap_or_default();
            let mark = if self.is_red(v) { " *" } else { "" };
            writeln!(f, "  {}{}:", name, mark)?;
            for e in self.graph.out_edges(&v) {
                let sink = self.vertex_name(&e.sink).unwrap_or_default();
                writeln!(f, "    -> {}", sink)?;
            }
        }
        writeln!(f, "}}")
    }
}

#[cfg(test)]
pub use self::tests::*;
