//! Generalized search algorithms over implicit state spaces.
//!
//! A state space is described by a start state, a successor function
//! which maps a state to the states reachable from it (and the action
//! which reaches each one), and a goal predicate. Two searches are
//! provided:
//!
//! - [shortest_path_search] finds the path with the fewest actions.
//! - [lowest_cost_search] finds the path with the lowest total cost,
//!   given a cost for each action.
//!
//! Both return a [Path], or [SearchError::NoResultFound] when no goal
//! state can be reached.

pub mod algorithm;
mod errors;
pub mod path;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::SearchAction;
pub use traits::SearchCost;
pub use traits::SearchState;
pub use traits::Successors;

pub use path::{final_state, path_actions, path_cost, path_states, Path, Step};

pub use algorithm::basic;
pub use algorithm::basic::shortest_path_search;
pub use algorithm::dijkstra;
pub use algorithm::dijkstra::lowest_cost_search;
pub use algorithm::SearchOptions;
