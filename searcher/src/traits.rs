use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use num::Zero;

/// A configuration in some problem's state space.
///
/// States are compared by value only, and are used as keys
/// in the explored set and when deduplicating the frontier.
pub trait SearchState: Debug + Clone + Eq + Hash {}

impl<T> SearchState for T where T: Debug + Clone + Eq + Hash {}

/// A label for the transition between two states.
pub trait SearchAction: Debug + Clone {}

impl<T> SearchAction for T where T: Debug + Clone {}

/// Weight assigned to an action, summed along a path.
///
/// Costs must be non-negative for the cost-aware search
/// to return an optimal path.
pub trait SearchCost: Debug + Clone + PartialOrd + Zero {}

impl<T> SearchCost for T where T: Debug + Clone + PartialOrd + Zero {}

/// Reachable states from a single source state, along with
/// the action which reaches each one.
///
/// Iteration follows insertion order. When two actions reach the
/// same state, the later one replaces the earlier one in place.
pub type Successors<S, A> = IndexMap<S, A>;
