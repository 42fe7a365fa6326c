//! The five Red Scare problems.
//!
//! Each solver is a pure function of an [Instance]; none of them mutates it,
//! so they can run in any order, be skipped, or run on different threads
//! against the same instance.
//!
//! | Problem   | Question                                            | Method                       |
//! | --------- | --------------------------------------------------- | ---------------------------- |
//! | None      | shortest `s`-`t` path with no red internal vertex   | breadth-first search         |
//! | Some      | is there an `s`-`t` path through a red vertex       | forward and backward search  |
//! | Few       | fewest red vertices on an `s`-`t` path              | vertex-weighted Dijkstra     |
//! | Alternate | is there an `s`-`t` path alternating in color       | filtered breadth-first search |
//! | Many      | most red vertices on an `s`-`t` path (DAGs only)    | dynamic programming in topological order |
mod alternate;
pub use self::alternate::*;
mod few;
pub use self::few::*;
mod many;
pub use self::many::*;
mod none;
pub use self::none::*;
mod some;
pub use self::some::*;

use crate::instance::Instance;

/// Answers to all five problems for one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solutions {
    pub none: Option<usize>,
    pub some: bool,
    pub many: Many,
    pub few: Option<usize>,
    pub alternate: bool,
}

pub fn solve_all(instance: &Instance) -> Solutions {
    Solutions {
        none: solve_none(instance),
        some: solve_some(instance),
        many: solve_many(instance),
        few: solve_few(instance),
        alternate: solve_alternate(instance),
    }
}
