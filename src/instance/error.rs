use thiserror::Error;

/// Ways an instance file can be malformed.
///
/// Every variant is fatal to the parse of its instance. Line numbers are
/// 1-based and count blank lines too.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The first line is not exactly three non-negative integers `n m r`.
    #[error("line {line}: expected header `n m r`, found {found:?}")]
    BadHeader { line: usize, found: String },

    /// The second line is not exactly two tokens `s t`.
    #[error("line {line}: expected terminals `s t`, found {found:?}")]
    BadTerminals { line: usize, found: String },

    /// The input ended before all `n` vertex lines were read.
    #[error("unexpected end of file in vertex list: expected {expected} vertex lines, found {found}")]
    UnexpectedEof { expected: usize, found: usize },

    /// The same vertex name was declared twice.
    #[error("line {line}: vertex {name:?} declared twice")]
    DuplicateVertex { line: usize, name: String },

    /// An edge line is not exactly three tokens `u op v`.
    #[error("line {line}: bad edge line {found:?}")]
    BadEdgeLine { line: usize, found: String },

    /// An edge mentions a vertex that was never declared.
    #[error("line {line}: unknown vertex name {name:?}")]
    UnknownVertex { line: usize, name: String },

    /// An edge operator other than `--` or `->`.
    #[error("line {line}: unknown edge type {operator:?}")]
    UnknownEdgeOperator { line: usize, operator: String },

    /// The vertex block declared a different number of vertices than the header.
    #[error("expected {expected} vertices, got {found}")]
    VertexCountMismatch { expected: usize, found: usize },

    /// `s` or `t` is not a declared vertex.
    #[error("terminal {name:?} is not a declared vertex")]
    UndeclaredTerminal { name: String },

    /// The underlying reader failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
