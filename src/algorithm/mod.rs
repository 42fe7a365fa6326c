//! Graph algorithms
mod bfs;
pub use self::bfs::*;
mod cycle;
pub use self::cycle::*;
mod shortest_path;
pub use self::shortest_path::*;
mod toposort;
pub use self::toposort::*;
