//! Low-level directed graphs.
//!
//! Vertices and edges in low-level graphs are lightweight ID's.
//! They are essentially `usize`.
//! Algorithm authors may feel free to copy and store these ID's.
//!
//! Names, colors and the rest of what an instance file says about a vertex
//! live one level up, in [crate::instance::Instance].

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;

pub mod directed;
