//! Provides the building blocks for search algorithms

use std::collections::HashSet;
use std::marker::PhantomData;
use std::ops::Add;
use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::errors::{Result, SearchError};
use crate::path::Path;
use crate::traits::{SearchAction, SearchCost, SearchState, Successors};

pub mod basic;
pub mod dijkstra;

/// Trait used to implement queues of search candidates
/// which should be checked for completion.
pub trait SearchQueue {
    type Candidate;

    fn pop(&mut self) -> Option<Self::Candidate>;

    fn push(&mut self, item: Self::Candidate);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Computes the cost annotation for a path extended by one action.
pub trait StepCost<S, A, C> {
    fn accumulate(&self, path: &Path<S, A, C>, action: &A) -> C;
}

/// Every step costs the same, so no cost is recorded.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnitCost;

impl<S, A> StepCost<S, A, ()> for UnitCost {
    fn accumulate(&self, _path: &Path<S, A, ()>, _action: &A) {}
}

/// Adds the cost of each action to the cost of the path so far.
#[derive(Debug, Clone, Copy)]
pub struct ActionCost<K>(pub K);

impl<S, A, C, K> StepCost<S, A, C> for ActionCost<K>
where
    C: SearchCost + Add<Output = C>,
    K: Fn(&A) -> C,
{
    fn accumulate(&self, path: &Path<S, A, C>, action: &A) -> C {
        path.cost() + (self.0)(action)
    }
}

/// Options which bound or report on a search.
#[derive(Debug, Default, Clone)]
pub struct SearchOptions {
    /// Maximum number of paths to pop from the frontier.
    pub limit: Option<usize>,

    /// Maximum wall-clock time to spend searching.
    pub timeout: Option<Duration>,

    /// Report progress every this many steps.
    pub verbose: Option<usize>,
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current > self.maximum {
            Err(SearchError::StepLimitExhausted(self.maximum))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug)]
struct TimeLimit {
    started: Instant,
    maximum: Duration,
}

impl TimeLimit {
    fn new(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            maximum: limit,
        }
    }

    fn check(&self) -> Result<()> {
        let elapsed = self.started.elapsed();
        if elapsed > self.maximum {
            Err(SearchError::TimeLimitExhausted(elapsed))
        } else {
            Ok(())
        }
    }
}

/// Implementation of search, using generic components.
///
/// Uses a generic queue (Q) and a generic step cost (K) to provide
/// a single foundation for both the unit-cost and cost-aware searches.
/// The goal test happens when a path is popped from the queue, never
/// when it is pushed.
pub struct SearchAlgorithm<S, A, C, Q, F, G, K> {
    queue: Q,
    explored: HashSet<S>,
    successors: F,
    is_goal: G,
    cost: K,
    options: SearchOptions,
    steps: PhantomData<fn() -> (A, C)>,
}

impl<S, A, C, Q, F, G, K> SearchAlgorithm<S, A, C, Q, F, G, K>
where
    S: SearchState,
    A: SearchAction,
    C: Clone,
    Q: SearchQueue<Candidate = Path<S, A, C>> + Default,
    F: Fn(&S) -> Successors<S, A>,
    G: Fn(&S) -> bool,
    K: StepCost<S, A, C>,
{
    pub(crate) fn new(origin: S, successors: F, is_goal: G, cost: K) -> Self {
        let mut sr = SearchAlgorithm {
            queue: Q::default(),
            explored: HashSet::new(),
            successors,
            is_goal,
            cost,
            options: SearchOptions::default(),
            steps: PhantomData,
        };
        sr.queue.push(Path::new(origin));
        sr
    }

    /// Replace the options for this search.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a step limit for this search algorithm.
    ///
    /// When this many candidates have been explored,
    /// the search algorithm will retun an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.options.limit = Some(limit);
    }

    fn expand(&mut self, path: &Path<S, A, C>) {
        let tip = path.destination();
        for (state, action) in (self.successors)(tip) {
            if self.explored.contains(&state) {
                continue;
            }
            let cost = self.cost.accumulate(path, &action);
            trace!(?state, ?action, "extending path");
            self.queue.push(path.step(action, state, cost));
        }
    }

    /// Run the search to completion.
    pub fn run(mut self) -> Result<Path<S, A, C>> {
        let mut counter = self.options.limit.map(StepLimit::new);
        let timer = self.options.timeout.map(TimeLimit::new);
        let verbose = self.options.verbose.filter(|v| *v > 0);

        let mut n = 0;
        while let Some(path) = self.queue.pop() {
            n += 1;

            if let Some(c) = counter.as_mut() {
                c.increment()?;
            }
            if let Some(t) = timer.as_ref() {
                t.check()?;
            }

            if let Some(v) = verbose {
                if n % v == 0 {
                    info!(
                        queue = self.queue.len(),
                        explored = self.explored.len(),
                        length = path.len(),
                        steps = n,
                        "searching"
                    );
                }
            }

            if (self.is_goal)(path.destination()) {
                debug!(steps = n, length = path.len(), "found goal");
                return Ok(path);
            }

            // Paths to the same state may be queued more than once,
            // only the first one popped is expanded.
            if !self.explored.insert(path.destination().clone()) {
                continue;
            }

            self.expand(&path);
        }

        debug!(steps = n, explored = self.explored.len(), "search exhausted");
        Err(SearchError::NoResultFound)
    }
}
