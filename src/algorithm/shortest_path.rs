use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;
use std::collections::HashSet;

pub trait VertexWeightedShortestPath
where
    Self: QueryableGraph + Sized,
{
    /// Dijkstra's algorithm where walking into a vertex costs `weight` of it.
    ///
    /// The weight of `source` is paid up front, so the distance from a vertex
    /// to itself is its own weight.
    /// Returns `None` if `target` is not reachable from `source`.
    fn vertex_weighted_distance<W>(
        &self,
        source: VertexId,
        target: VertexId,
        weight: W,
    ) -> Option<usize>
    where
        W: Fn(VertexId) -> usize,
    {
        if !self.contains_vertex(&source) || !self.contains_vertex(&target) {
            return None;
        }
        let mut settled: HashSet<VertexId, RandomState> = HashSet::with_hasher(RandomState::new());
        let mut queue: KeyedPriorityQueue<VertexId, Reverse<usize>, RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        queue.push(source, Reverse(weight(source)));
        while let Some((vert, Reverse(dist))) = queue.pop() {
            if vert == target {
                return Some(dist);
            }
            settled.insert(vert);
            for e in self.out_edges(&vert) {
                if settled.contains(&e.sink) {
                    continue;
                }
                let candidate = dist + weight(e.sink);
                let improves = match queue.get_priority(&e.sink) {
                    Some(Reverse(known)) => candidate < *known,
                    None => true,
                };
                if improves {
                    // updates the priority in place if the sink is already queued
                    queue.push(e.sink, Reverse(candidate));
                }
            }
        }
        None
    }
}

impl<G: QueryableGraph> VertexWeightedShortestPath for G {}
