use super::{Header, Instance, ParseError};
use crate::graph::{directed::AdjacencyListGraph, *};
use ahash::RandomState;
use bimap::BiHashMap;
use log::{debug, warn};
use std::collections::HashSet;
use std::io::{BufRead, Lines};

/// Numbered lines of the input, 1-based.
struct NumberedLines<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>, ParseError> {
        match self.lines.next() {
            Some(line) => {
                self.line_no += 1;
                Ok(Some((self.line_no, line?)))
            }
            None => Ok(None),
        }
    }
}

pub(super) fn parse<R: BufRead>(reader: R) -> Result<Instance, ParseError> {
    let mut lines = NumberedLines::new(reader);

    let header = {
        let (line, text) = lines.next_line()?.unwrap_or((1, String::new()));
        parse_header(&text).ok_or(ParseError::BadHeader { line, found: text })?
    };

    let (source_name, target_name) = {
        let (line, text) = lines.next_line()?.unwrap_or((2, String::new()));
        let tokens: Vec<_> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [s, t] => (s.to_string(), t.to_string()),
            _ => {
                return Err(ParseError::BadTerminals {
                    line,
                    found: text.trim().to_string(),
                })
            }
        }
    };

    let mut graph = AdjacencyListGraph::new();
    let mut names: BiHashMap<VertexId, String, RandomState, RandomState> =
        BiHashMap::with_hashers(RandomState::new(), RandomState::new());
    let mut red = HashSet::with_hasher(RandomState::new());

    // Exactly `n` lines form the vertex block. A blank one is skipped but
    // still takes a slot, so it shows up as a vertex count mismatch below.
    for _ in 0..header.vertices {
        let (line, text) = lines.next_line()?.ok_or(ParseError::UnexpectedEof {
            expected: header.vertices,
            found: names.len(),
        })?;
        let mut tokens = text.split_whitespace();
        let name = match tokens.next() {
            Some(name) => name,
            None => continue,
        };
        if names.contains_right(name) {
            return Err(ParseError::DuplicateVertex {
                line,
                name: name.to_string(),
            });
        }
        let vid = graph.add_vertex();
        names.insert(vid, name.to_string());
        if tokens.next() == Some("*") {
            red.insert(vid);
        }
    }

    let mut edge_lines = 0;
    let mut has_undirected = false;
    while let Some((line, text)) = lines.next_line()? {
        let tokens: Vec<_> = text.split_whitespace().collect();
        let (u, op, v) = match tokens.as_slice() {
            [] => continue,
            [u, op, v] => (*u, *op, *v),
            _ => {
                return Err(ParseError::BadEdgeLine {
                    line,
                    found: text.trim().to_string(),
                })
            }
        };
        let lookup = |name: &str| {
            names
                .get_by_right(name)
                .copied()
                .ok_or_else(|| ParseError::UnknownVertex {
                    line,
                    name: name.to_string(),
                })
        };
        let src = lookup(u)?;
        let snk = lookup(v)?;
        match op {
            "--" => {
                has_undirected = true;
                graph.add_edge(src, snk);
                graph.add_edge(snk, src);
            }
            "->" => {
                graph.add_edge(src, snk);
            }
            _ => {
                return Err(ParseError::UnknownEdgeOperator {
                    line,
                    operator: op.to_string(),
                })
            }
        }
        edge_lines += 1;
    }

    if names.len() != header.vertices {
        return Err(ParseError::VertexCountMismatch {
            expected: header.vertices,
            found: names.len(),
        });
    }

    let terminal = |name: &str| {
        names
            .get_by_right(name)
            .copied()
            .ok_or_else(|| ParseError::UndeclaredTerminal {
                name: name.to_string(),
            })
    };
    let source = terminal(&source_name)?;
    let target = terminal(&target_name)?;

    if header.edges != edge_lines {
        warn!(
            "header declares {} edges, found {} edge lines",
            header.edges, edge_lines
        );
    }
    if header.red != red.len() {
        warn!(
            "header declares {} red vertices, found {}",
            header.red,
            red.len()
        );
    }
    debug!(
        "parsed instance: {} vertices ({} red), {} edge lines, {} arcs, undirected: {}",
        graph.vertex_size(),
        red.len(),
        edge_lines,
        graph.edge_size(),
        has_undirected
    );

    Ok(Instance {
        header,
        source,
        target,
        graph,
        names,
        red,
        edge_lines,
        has_undirected,
    })
}

fn parse_header(text: &str) -> Option<Header> {
    let numbers = text
        .split_whitespace()
        .map(|x| x.parse::<usize>().ok())
        .collect::<Option<Vec<_>>>()?;
    match numbers.as_slice() {
        [vertices, edges, red] => Some(Header {
            vertices: *vertices,
            edges: *edges,
            red: *red,
        }),
        _ => None,
    }
}
