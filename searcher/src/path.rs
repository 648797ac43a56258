//! Paths through a state space.
//!
//! A path starts at an origin state and records each action taken
//! along with the state it leads to. Paths produced by the cost-aware
//! search also carry the cumulative cost at every step.

use crate::traits::SearchCost;

/// One transition along a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<S, A, C = ()> {
    pub action: A,
    pub state: S,

    /// Cumulative cost of the path up to and including this step.
    pub cost: C,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<S, A, C = ()> {
    origin: S,
    steps: Vec<Step<S, A, C>>,
}

impl<S, A, C> Path<S, A, C> {
    /// A path with no transitions, sitting at the origin.
    pub fn new(origin: S) -> Self {
        Self {
            origin,
            steps: Vec::new(),
        }
    }

    /// Number of transitions in this path.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn origin(&self) -> &S {
        &self.origin
    }

    /// The tip of the path, where the search would continue.
    pub fn destination(&self) -> &S {
        self.steps
            .last()
            .map(|step| &step.state)
            .unwrap_or(&self.origin)
    }

    pub fn steps(&self) -> &[Step<S, A, C>] {
        &self.steps
    }

    /// All states visited in order, starting with the origin.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        std::iter::once(&self.origin).chain(self.steps.iter().map(|step| &step.state))
    }

    /// All actions taken in order.
    pub fn actions(&self) -> impl Iterator<Item = &A> {
        self.steps.iter().map(|step| &step.action)
    }
}

impl<S, A, C> Path<S, A, C>
where
    S: Clone,
    A: Clone,
    C: Clone,
{
    /// Extend this path by one step, leaving the original untouched.
    pub fn step(&self, action: A, state: S, cost: C) -> Self {
        let mut nextpath = self.clone();
        nextpath.steps.push(Step {
            action,
            state,
            cost,
        });
        nextpath
    }
}

impl<S, A, C> Path<S, A, C>
where
    C: SearchCost,
{
    /// Total cost of the path, zero when no transitions have been made.
    pub fn cost(&self) -> C {
        self.steps
            .last()
            .map(|step| step.cost.clone())
            .unwrap_or_else(C::zero)
    }
}

/// Last state in the path.
pub fn final_state<S, A, C>(path: &Path<S, A, C>) -> &S {
    path.destination()
}

/// States visited along the path, in order.
pub fn path_states<S, A, C>(path: &Path<S, A, C>) -> Vec<&S> {
    path.states().collect()
}

/// Actions taken along the path, in order.
pub fn path_actions<S, A, C>(path: &Path<S, A, C>) -> Vec<&A> {
    path.actions().collect()
}

/// Cumulative cost stored with the last action of the path.
pub fn path_cost<S, A, C>(path: &Path<S, A, C>) -> C
where
    C: SearchCost,
{
    path.cost()
}

#[cfg(test)]
mod test {
    use super::*;

    fn example() -> Path<char, &'static str, u32> {
        Path::new('a').step("ab", 'b', 2).step("bc", 'c', 5)
    }

    #[test]
    fn singleton_path() {
        let path: Path<char, &str, u32> = Path::new('a');
        assert!(path.is_empty());
        assert_eq!(final_state(&path), &'a');
        assert_eq!(path_states(&path), vec![&'a']);
        assert!(path_actions(&path).is_empty());
        assert_eq!(path_cost(&path), 0);
    }

    #[test]
    fn views() {
        let path = example();
        assert_eq!(path.len(), 2);
        assert_eq!(path.origin(), &'a');
        assert_eq!(final_state(&path), &'c');
        assert_eq!(path_states(&path), vec![&'a', &'b', &'c']);
        assert_eq!(path_actions(&path), vec![&"ab", &"bc"]);
        assert_eq!(path_cost(&path), 5);
    }

    #[test]
    fn step_does_not_modify_parent() {
        let parent = example();
        let child = parent.step("cd", 'd', 6);
        assert_eq!(parent.len(), 2);
        assert_eq!(child.len(), 3);
        assert_eq!(child.destination(), &'d');
    }
}
