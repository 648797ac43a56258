pub use bfs::{build, shortest_path_search, BreadthFirstSearch, BreadthQueue};

mod bfs {
    use std::collections::VecDeque;
    use std::default::Default;

    use crate::algorithm::{SearchAlgorithm, SearchQueue, UnitCost};
    use crate::errors::Result;
    use crate::path::Path;
    use crate::traits::{SearchAction, SearchState, Successors};

    #[derive(Debug)]
    pub struct BreadthQueue<P> {
        queue: VecDeque<P>,
    }

    impl<P> SearchQueue for BreadthQueue<P> {
        type Candidate = P;

        fn pop(&mut self) -> Option<Self::Candidate> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Self::Candidate) {
            self.queue.push_back(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl<P> Default for BreadthQueue<P> {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    pub type BreadthFirstSearch<S, A, F, G> =
        SearchAlgorithm<S, A, (), BreadthQueue<Path<S, A>>, F, G, UnitCost>;

    /// Build a breadth-first searcher, which can be configured
    /// with [SearchOptions](crate::SearchOptions) before it is run.
    pub fn build<S, A, F, G>(start: S, successors: F, is_goal: G) -> BreadthFirstSearch<S, A, F, G>
    where
        S: SearchState,
        A: SearchAction,
        F: Fn(&S) -> Successors<S, A>,
        G: Fn(&S) -> bool,
    {
        SearchAlgorithm::new(start, successors, is_goal, UnitCost)
    }

    /// Breadth-first search for the path with the fewest actions from
    /// `start` to any state satisfying `is_goal`.
    ///
    /// Successors are queued in the order returned by `successors`,
    /// so among equally short paths the first one discovered wins.
    pub fn shortest_path_search<S, A, F, G>(start: S, successors: F, is_goal: G) -> Result<Path<S, A>>
    where
        S: SearchState,
        A: SearchAction,
        F: Fn(&S) -> Successors<S, A>,
        G: Fn(&S) -> bool,
    {
        build(start, successors, is_goal).run()
    }
}
