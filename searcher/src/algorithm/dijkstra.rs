//! Uniform cost search, in the style of Dijkstra's Algorithm

use std::collections::VecDeque;
use std::default::Default;
use std::ops::Add;

use super::{ActionCost, SearchAlgorithm};
use crate::algorithm::SearchQueue;
use crate::errors::Result;
use crate::path::Path;
use crate::traits::{SearchAction, SearchCost, SearchState, Successors};

/// A frontier kept sorted by ascending path cost, holding at most
/// one path to any given state.
///
/// Paths are kept in a simple sorted list rather than a heap, so that
/// paths of equal cost are popped in the order they were added.
#[derive(Debug)]
pub struct CostQueue<S, A, C> {
    queue: VecDeque<Path<S, A, C>>,
}

impl<S, A, C> Default for CostQueue<S, A, C> {
    fn default() -> Self {
        CostQueue {
            queue: VecDeque::new(),
        }
    }
}

impl<S, A, C> CostQueue<S, A, C>
where
    S: PartialEq,
    C: SearchCost,
{
    /// Add a path to the frontier.
    ///
    /// If the frontier already holds a path to the same state, only the
    /// cheaper of the two is kept; on a tie the existing path stays.
    /// Returns whether the new path was kept.
    pub fn add_to_frontier(&mut self, path: Path<S, A, C>) -> bool {
        let existing = self
            .queue
            .iter()
            .position(|p| p.destination() == path.destination());

        let cost = path.cost();
        if let Some(index) = existing {
            if self.queue[index].cost() <= cost {
                return false;
            }
            self.queue.remove(index);
        }

        let index = self.queue.partition_point(|p| p.cost() <= cost);
        self.queue.insert(index, path);
        true
    }

    /// Paths currently in the frontier, cheapest first.
    pub fn iter(&self) -> impl Iterator<Item = &Path<S, A, C>> {
        self.queue.iter()
    }
}

impl<S, A, C> SearchQueue for CostQueue<S, A, C>
where
    S: PartialEq,
    C: SearchCost,
{
    type Candidate = Path<S, A, C>;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop_front()
    }

    fn push(&mut self, item: Self::Candidate) {
        self.add_to_frontier(item);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Search algorithm which always expands the cheapest known path.
pub type DijkstraSearch<S, A, C, F, G, K> =
    SearchAlgorithm<S, A, C, CostQueue<S, A, C>, F, G, ActionCost<K>>;

/// Build a lowest cost searcher, which can be configured
/// with [SearchOptions](crate::SearchOptions) before it is run.
pub fn build<S, A, C, F, G, K>(
    start: S,
    successors: F,
    is_goal: G,
    action_cost: K,
) -> DijkstraSearch<S, A, C, F, G, K>
where
    S: SearchState,
    A: SearchAction,
    C: SearchCost + Add<Output = C>,
    F: Fn(&S) -> Successors<S, A>,
    G: Fn(&S) -> bool,
    K: Fn(&A) -> C,
{
    SearchAlgorithm::new(start, successors, is_goal, ActionCost(action_cost))
}

/// Find the path with the lowest total cost from `start` to any state
/// satisfying `is_goal`.
///
/// The cost of a path is the sum of `action_cost` over its actions,
/// which must never be negative. Every step of the returned path
/// records the cumulative cost up to that step.
pub fn lowest_cost_search<S, A, C, F, G, K>(
    start: S,
    successors: F,
    is_goal: G,
    action_cost: K,
) -> Result<Path<S, A, C>>
where
    S: SearchState,
    A: SearchAction,
    C: SearchCost + Add<Output = C>,
    F: Fn(&S) -> Successors<S, A>,
    G: Fn(&S) -> bool,
    K: Fn(&A) -> C,
{
    build(start, successors, is_goal, action_cost).run()
}
