use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};

pub trait BreadthFirstSearch
where
    Self: QueryableGraph + Sized,
{
    /// Visits vertices reachable from `start` in breadth-first order, each
    /// paired with its depth, i.e. the number of edges walked to reach it.
    ///
    /// Only edges accepted by `follow` are walked.
    /// Every vertex is yielded at most once.
    fn bfs<F>(&self, start: VertexId, direction: Direction, follow: F) -> Bfs<'_, Self, F>
    where
        F: FnMut(&Edge) -> bool,
    {
        Bfs::new(self, start, direction, follow)
    }

    /// All vertices reachable from `start`, `start` itself included.
    fn reachable(&self, start: VertexId, direction: Direction) -> HashSet<VertexId, RandomState> {
        self.bfs(start, direction, |_| true).map(|(v, _)| v).collect()
    }
}

impl<G: QueryableGraph> BreadthFirstSearch for G {}

pub struct Bfs<'a, G, F> {
    graph: &'a G,
    direction: Direction,
    follow: F,
    queue: VecDeque<(VertexId, usize)>,
    visited: HashSet<VertexId, RandomState>,
}

impl<'a, G, F> Bfs<'a, G, F>
where
    G: QueryableGraph,
    F: FnMut(&Edge) -> bool,
{
    fn new(graph: &'a G, start: VertexId, direction: Direction, follow: F) -> Self {
        let mut res = Self {
            graph,
            direction,
            follow,
            queue: VecDeque::new(),
            visited: HashSet::with_hasher(RandomState::new()),
        };
        if graph.contains_vertex(&start) {
            res.visited.insert(start);
            res.queue.push_back((start, 0));
        }
        res
    }
}

impl<'a, G, F> Iterator for Bfs<'a, G, F>
where
    G: QueryableGraph,
    F: FnMut(&Edge) -> bool,
{
    type Item = (VertexId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (vert, depth) = self.queue.pop_front()?;
        let graph = self.graph;
        for e in graph.edges_towards(&vert, self.direction) {
            if !(self.follow)(&e) {
                continue;
            }
            let head = e.head(self.direction);
            if self.visited.insert(head) {
                self.queue.push_back((head, depth + 1));
            }
        }
        Some((vert, depth))
    }
}
