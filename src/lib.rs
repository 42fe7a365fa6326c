//! Path queries on graphs whose vertices are either red or not.
//!
//! Given an instance (see [instance] for the file format) with a source `s`
//! and a target `t`, [solver] answers five questions about `s`-`t` paths:
//!
//! * **None**: the length of a shortest path with no red internal vertex,
//! * **Some**: whether some path goes through a red vertex,
//! * **Few**: the fewest red vertices on a path,
//! * **Alternate**: whether some path alternates between red and non-red,
//! * **Many**: the most red vertices on a path, only for directed acyclic
//!   instances, since the problem is NP-hard in general.
//!
//! ```rust
//! use redscare::{instance::Instance, solver::*};
//!
//! let instance: Instance = "3 2 1\nA C\nA\nB *\nC\nA -> B\nB -> C\n".parse().unwrap();
//! let solutions = solve_all(&instance);
//! assert_eq!(solutions.none, None);
//! assert!(solutions.some);
//! assert_eq!(solutions.few, Some(1));
//! assert!(solutions.alternate);
//! assert_eq!(solutions.many, Many::Value(1));
//! ```
pub mod algorithm;
pub mod batch;
pub mod graph;
pub mod instance;
pub mod report;
pub mod solver;
