//! Missionaries and cannibals: ferry everyone across a river.
//!
//! If cannibals ever outnumber the missionaries on either bank
//! (while there are missionaries there to eat), the missionaries
//! are eaten and that branch of the search goes nowhere.

use std::fmt;

use anyhow::Error;
use clap::{value_t, App, Arg, ArgMatches, SubCommand};
use searcher::{basic, Path, SearchOptions, SearchResult, Successors};

use super::{describe, Direction, PuzzleError};

/// Missionaries, cannibals and boats on each bank of the river.
///
/// Bank 1 is where everyone starts, bank 2 is where they want to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RiverState {
    pub m1: u32,
    pub c1: u32,
    pub b1: u32,
    pub m2: u32,
    pub c2: u32,
    pub b2: u32,
}

impl RiverState {
    /// Everyone, and the boat, on the starting bank.
    pub fn start(missionaries: u32, cannibals: u32) -> Self {
        RiverState {
            m1: missionaries,
            c1: cannibals,
            b1: 1,
            m2: 0,
            c2: 0,
            b2: 0,
        }
    }

    /// The same people and boats, all moved to the far bank.
    pub fn across(&self) -> Self {
        RiverState {
            m1: 0,
            c1: 0,
            b1: 0,
            m2: self.m1 + self.m2,
            c2: self.c1 + self.c2,
            b2: self.b1 + self.b2,
        }
    }

    /// Cannibals outnumber missionaries on one of the banks.
    pub fn is_dinner(&self) -> bool {
        (self.c1 > self.m1 && self.m1 > 0) || (self.c2 > self.m2 && self.m2 > 0)
    }

    fn ferry(&self, load: &Ferry) -> Option<Self> {
        let (m, c) = (load.missionaries, load.cannibals);
        match load.direction {
            Direction::Across => Some(RiverState {
                m1: self.m1.checked_sub(m)?,
                c1: self.c1.checked_sub(c)?,
                b1: self.b1.checked_sub(1)?,
                m2: self.m2 + m,
                c2: self.c2 + c,
                b2: self.b2 + 1,
            }),
            Direction::Back => Some(RiverState {
                m1: self.m1 + m,
                c1: self.c1 + c,
                b1: self.b1 + 1,
                m2: self.m2.checked_sub(m)?,
                c2: self.c2.checked_sub(c)?,
                b2: self.b2.checked_sub(1)?,
            }),
        }
    }
}

impl fmt::Display for RiverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {}, {})",
            self.m1, self.c1, self.b1, self.m2, self.c2, self.b2
        )
    }
}

/// A boat load of missionaries and cannibals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ferry {
    pub missionaries: u32,
    pub cannibals: u32,
    pub direction: Direction,
}

impl fmt::Display for Ferry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let load = format!(
            "{}{}",
            "M".repeat(self.missionaries as usize),
            "C".repeat(self.cannibals as usize)
        );
        match self.direction {
            Direction::Across => write!(f, "{}{}", load, self.direction),
            Direction::Back => write!(f, "{}{}", self.direction, load),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Missionaries {
    start: RiverState,
    goal: RiverState,
    loads: Vec<(u32, u32)>,
}

impl Missionaries {
    /// Move everyone from `start` to the far bank, using a boat
    /// which holds up to `capacity` people.
    pub fn new(start: RiverState, capacity: u32) -> Self {
        // Fullest loads first, and more missionaries before more cannibals.
        let mut loads = Vec::new();
        for total in (1..=capacity).rev() {
            for m in (0..=total).rev() {
                loads.push((m, total - m));
            }
        }

        Missionaries {
            start,
            goal: start.across(),
            loads,
        }
    }

    pub fn with_goal(mut self, goal: RiverState) -> Self {
        self.goal = goal;
        self
    }

    /// States reachable with one trip of the boat.
    ///
    /// Nobody moves on once the missionaries have been eaten.
    pub fn successors(&self, state: &RiverState) -> Successors<RiverState, Ferry> {
        let mut succ = Successors::new();
        if state.is_dinner() {
            return succ;
        }

        let mut directions = Vec::with_capacity(2);
        if state.b1 > 0 {
            directions.push(Direction::Across);
        }
        if state.b2 > 0 {
            directions.push(Direction::Back);
        }

        for direction in directions {
            for &(missionaries, cannibals) in &self.loads {
                let load = Ferry {
                    missionaries,
                    cannibals,
                    direction,
                };
                if let Some(next) = state.ferry(&load) {
                    succ.insert(next, load);
                }
            }
        }
        succ
    }

    pub fn is_goal(&self, state: &RiverState) -> bool {
        *state == self.goal
    }

    pub fn solve(&self, options: SearchOptions) -> SearchResult<Path<RiverState, Ferry>> {
        basic::build(self.start, |s| self.successors(s), |s| self.is_goal(s))
            .with_options(options)
            .run()
    }
}

/// Find the fewest boat trips which take everyone in `start` to the far bank.
pub fn mc_problem(start: RiverState) -> Result<Path<RiverState, Ferry>, PuzzleError> {
    Ok(Missionaries::new(start, 2).solve(SearchOptions::default())?)
}

pub(crate) fn command() -> App<'static, 'static> {
    SubCommand::with_name("missionaries")
        .about("Ferry missionaries and cannibals across a river")
        .arg(
            Arg::with_name("missionaries")
                .value_name("M")
                .default_value("3"),
        )
        .arg(Arg::with_name("cannibals").value_name("C").default_value("3"))
        .arg(
            Arg::with_name("boat")
                .long("boat")
                .takes_value(true)
                .default_value("2")
                .help("Number of people the boat can carry"),
        )
}

pub(crate) fn main(matches: &ArgMatches, options: SearchOptions) -> Result<(), Error> {
    let missionaries = value_t!(matches, "missionaries", u32)?;
    let cannibals = value_t!(matches, "cannibals", u32)?;
    let boat = value_t!(matches, "boat", u32)?;

    let problem = Missionaries::new(RiverState::start(missionaries, cannibals), boat);
    let path = problem.solve(options).map_err(PuzzleError::from)?;

    println!("Solved in {} trips", path.len());
    println!("{}", describe(&path));
    Ok(())
}
