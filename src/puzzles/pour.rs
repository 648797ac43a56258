//! Water pouring: measure out a goal level using two glasses.
//!
//! Glasses can be filled to capacity, emptied, or poured into
//! each other until one is full or the other is empty.

use std::fmt;

use anyhow::Error;
use clap::{value_t, values_t, App, Arg, ArgMatches, SubCommand};
use searcher::{basic, Path, SearchError, SearchOptions, SearchResult, Successors};

use super::{describe, PuzzleError};

pub type Level = u32;

/// Current fill levels of the two glasses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glasses {
    pub x: Level,
    pub y: Level,
}

impl Glasses {
    pub fn new(x: Level, y: Level) -> Self {
        Glasses { x, y }
    }

    fn contains(&self, level: Level) -> bool {
        self.x == level || self.y == level
    }
}

impl fmt::Display for Glasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pour {
    XToY,
    YToX,
    FillX,
    FillY,
    EmptyX,
    EmptyY,
}

impl fmt::Display for Pour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Pour::XToY => "X->Y",
            Pour::YToX => "X<-Y",
            Pour::FillX => "fill X",
            Pour::FillY => "fill Y",
            Pour::EmptyX => "empty X",
            Pour::EmptyY => "empty Y",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone)]
pub struct PourProblem {
    capacity: Glasses,
    goal: Level,
    start: Glasses,
}

impl PourProblem {
    /// Two empty glasses with capacities `x` and `y`.
    pub fn new(x: Level, y: Level, goal: Level) -> Self {
        PourProblem {
            capacity: Glasses::new(x, y),
            goal,
            start: Glasses::new(0, 0),
        }
    }

    /// Start from partially filled glasses instead of empty ones.
    pub fn with_start(mut self, start: Glasses) -> Result<Self, PuzzleError> {
        self.check(&start)?;
        self.start = start;
        Ok(self)
    }

    fn check(&self, state: &Glasses) -> Result<(), PuzzleError> {
        if state.x > self.capacity.x {
            return Err(PuzzleError::Overfull {
                level: state.x,
                capacity: self.capacity.x,
            });
        }
        if state.y > self.capacity.y {
            return Err(PuzzleError::Overfull {
                level: state.y,
                capacity: self.capacity.y,
            });
        }
        Ok(())
    }

    pub fn start(&self) -> Glasses {
        self.start
    }

    /// States reachable from `state` with a single action.
    pub fn successors(&self, state: &Glasses) -> Successors<Glasses, Pour> {
        let Glasses { x, y } = *state;
        let Glasses { x: cx, y: cy } = self.capacity;
        debug_assert!(x <= cx && y <= cy, "{} overflows {}", state, self.capacity);

        let total = x.checked_add(y);
        let x_to_y = match total {
            Some(t) if t <= cy => Glasses::new(0, t),
            _ => Glasses::new(x - (cy - y), cy),
        };
        let y_to_x = match total {
            Some(t) if t <= cx => Glasses::new(t, 0),
            _ => Glasses::new(cx, y - (cx - x)),
        };

        vec![
            (x_to_y, Pour::XToY),
            (y_to_x, Pour::YToX),
            (Glasses::new(cx, y), Pour::FillX),
            (Glasses::new(x, cy), Pour::FillY),
            (Glasses::new(0, y), Pour::EmptyX),
            (Glasses::new(x, 0), Pour::EmptyY),
        ]
        .into_iter()
        .collect()
    }

    pub fn is_goal(&self, state: &Glasses) -> bool {
        state.contains(self.goal)
    }

    pub fn solve(&self, options: SearchOptions) -> SearchResult<Path<Glasses, Pour>> {
        basic::build(self.start, |s| self.successors(s), |s| self.is_goal(s))
            .with_options(options)
            .run()
    }
}

/// Find the fewest actions which leave `goal` in either glass.
pub fn pour_problem(
    x: Level,
    y: Level,
    goal: Level,
    start: Glasses,
) -> Result<Path<Glasses, Pour>, PuzzleError> {
    let problem = PourProblem::new(x, y, goal).with_start(start)?;
    Ok(problem.solve(SearchOptions::default())?)
}

/// Number of actions needed to solve a problem, or zero when it can't be solved.
fn num_actions(x: Level, y: Level, goal: Level, options: &SearchOptions) -> SearchResult<usize> {
    match PourProblem::new(x, y, goal).solve(options.clone()) {
        Ok(path) => Ok(path.len()),
        Err(SearchError::NoResultFound) => Ok(0),
        Err(e) => Err(e),
    }
}

/// The problem with both capacities below `limit` which needs the most
/// actions, along with that number of actions.
///
/// Goals range from 1 up to (but not including) the larger capacity.
/// When several problems tie, the first one found wins. Each search
/// is bounded by `options`, and running out of budget is an error.
pub fn hardest(
    limit: Level,
    options: &SearchOptions,
) -> Result<Option<((Level, Level, Level), usize)>, PuzzleError> {
    let mut best: Option<((Level, Level, Level), usize)> = None;
    for x in 1..limit {
        for y in 1..limit {
            for goal in 1..x.max(y) {
                let n = num_actions(x, y, goal, options)?;
                if best.map(|(_, b)| n > b).unwrap_or(true) {
                    best = Some(((x, y, goal), n));
                }
            }
        }
    }
    Ok(best)
}

pub(crate) fn command() -> App<'static, 'static> {
    SubCommand::with_name("pour")
        .about("Measure a goal level using two glasses")
        .arg(Arg::with_name("x").value_name("X").required(true))
        .arg(Arg::with_name("y").value_name("Y").required(true))
        .arg(Arg::with_name("goal").value_name("GOAL").required(true))
        .arg(
            Arg::with_name("start")
                .long("start")
                .value_names(&["x", "y"])
                .number_of_values(2)
                .help("Initial levels of the two glasses"),
        )
}

pub(crate) fn main(matches: &ArgMatches, options: SearchOptions) -> Result<(), Error> {
    let x = value_t!(matches, "x", Level)?;
    let y = value_t!(matches, "y", Level)?;
    let goal = value_t!(matches, "goal", Level)?;

    let mut problem = PourProblem::new(x, y, goal);
    if matches.is_present("start") {
        let levels = values_t!(matches, "start", Level)?;
        problem = problem.with_start(Glasses::new(levels[0], levels[1]))?;
    }

    let path = problem.solve(options).map_err(PuzzleError::from)?;
    println!("Solved in {} actions", path.len());
    println!("{}", describe(&path));

    Ok(())
}

pub(crate) fn hardest_command() -> App<'static, 'static> {
    SubCommand::with_name("hardest")
        .about("Find the pouring problem which needs the most actions")
        .arg(
            Arg::with_name("max")
                .value_name("MAX")
                .default_value("10")
                .help("Exclusive upper bound on glass capacities"),
        )
}

pub(crate) fn hardest_main(matches: &ArgMatches, options: SearchOptions) -> Result<(), Error> {
    let limit = value_t!(matches, "max", Level)?;
    match hardest(limit, &options)? {
        Some(((x, y, goal), n)) => println!("pour {} {} {} needs {} actions", x, y, goal, n),
        None => println!("No problems with capacities below {}", limit),
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use searcher::{final_state, path_actions, path_states};

    fn g(x: Level, y: Level) -> Glasses {
        Glasses::new(x, y)
    }

    #[test]
    fn successors_collapse_duplicates() {
        let problem = PourProblem::new(4, 9, 6);
        let succ = problem.successors(&g(0, 0));
        assert_eq!(succ.len(), 3);
        assert_eq!(succ[&g(0, 0)], Pour::EmptyY);
        assert_eq!(succ[&g(4, 0)], Pour::FillX);
        assert_eq!(succ[&g(0, 9)], Pour::FillY);
    }

    #[test]
    fn successors_pour_between() {
        let problem = PourProblem::new(4, 9, 6);

        let succ = problem.successors(&g(3, 5));
        assert_eq!(succ.len(), 6);
        assert_eq!(succ[&g(0, 8)], Pour::XToY);
        assert_eq!(succ[&g(4, 4)], Pour::YToX);

        let succ = problem.successors(&g(3, 7));
        assert_eq!(succ[&g(1, 9)], Pour::XToY);
        assert_eq!(succ[&g(4, 6)], Pour::YToX);
    }

    #[test]
    fn successors_are_pure() {
        let problem = PourProblem::new(4, 9, 6);
        assert_eq!(problem.successors(&g(3, 5)), problem.successors(&g(3, 5)));
    }

    #[test]
    fn four_and_nine() {
        let path = pour_problem(4, 9, 6, g(0, 0)).unwrap();
        assert_eq!(
            path_actions(&path),
            vec![
                &Pour::FillY,
                &Pour::YToX,
                &Pour::EmptyX,
                &Pour::YToX,
                &Pour::EmptyX,
                &Pour::YToX,
                &Pour::FillY,
                &Pour::YToX,
            ]
        );
        assert_eq!(
            path_states(&path),
            vec![
                &g(0, 0),
                &g(0, 9),
                &g(4, 5),
                &g(0, 5),
                &g(4, 1),
                &g(0, 1),
                &g(1, 0),
                &g(1, 9),
                &g(4, 6),
            ]
        );
    }

    #[test]
    fn goal_at_start() {
        let path = pour_problem(4, 9, 3, g(3, 0)).unwrap();
        assert!(path.is_empty());
        assert_eq!(final_state(&path), &g(3, 0));
    }

    #[test]
    fn unreachable_goal() {
        // Both capacities are even, so odd levels are never reachable.
        let result = pour_problem(4, 6, 3, g(0, 0));
        assert!(matches!(
            result,
            Err(PuzzleError::Search(SearchError::NoResultFound))
        ));
    }

    #[test]
    fn overfull_start() {
        let result = PourProblem::new(4, 9, 6).with_start(g(5, 0));
        assert!(matches!(
            result,
            Err(PuzzleError::Overfull {
                level: 5,
                capacity: 4
            })
        ));
    }

    #[test]
    fn seven_and_nine() {
        let path = pour_problem(7, 9, 8, g(0, 0)).unwrap();
        assert_eq!(path.len(), 14);
        assert_eq!(final_state(&path), &g(7, 8));
    }

    #[test]
    fn hardest_below_ten() {
        let best = hardest(10, &SearchOptions::default()).unwrap();
        assert_eq!(best, Some(((7, 9, 8), 14)));
    }

    #[test]
    fn hardest_respects_step_limit() {
        let options = SearchOptions {
            limit: Some(1),
            ..SearchOptions::default()
        };
        assert!(matches!(
            hardest(10, &options),
            Err(PuzzleError::Search(SearchError::StepLimitExhausted(1)))
        ));
    }

    #[test]
    fn unsolvable_counts_as_zero() {
        let n = num_actions(4, 6, 3, &SearchOptions::default()).unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn huge_glasses() {
        let max = Level::MAX;
        let problem = PourProblem::new(max, max, 1);
        let succ = problem.successors(&g(max - 1, max - 1));
        assert_eq!(succ[&g(max - 2, max)], Pour::XToY);
        assert_eq!(succ[&g(max, max - 2)], Pour::YToX);
    }
}
