//! Bridge crossing: get everyone across a bridge at night.
//!
//! At most two people cross at a time and they must carry the single
//! light, so someone has to bring it back after each trip. A pair
//! crosses at the pace of the slower person. People are identified
//! by their crossing time, so two people with the same time count
//! as one.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use clap::{value_t, values_t, App, Arg, ArgMatches, SubCommand};
use searcher::{dijkstra, path_cost, Path, SearchOptions, SearchResult, Successors};

use super::{describe, Direction, PuzzleError};

/// A person, known by the time they take to cross.
pub type Person = u32;

/// Which side of the bridge something is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Here,
    There,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Side::Here => Side::There,
            Side::There => Side::Here,
        }
    }
}

/// People on each side of the bridge, and where the light is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Banks {
    pub here: BTreeSet<Person>,
    pub there: BTreeSet<Person>,
    pub light: Side,
}

impl Banks {
    /// Everyone starts on this side, along with the light.
    pub fn new<I>(people: I) -> Self
    where
        I: IntoIterator<Item = Person>,
    {
        Banks {
            here: people.into_iter().collect(),
            there: BTreeSet::new(),
            light: Side::Here,
        }
    }

    /// Nobody is left on the starting side.
    pub fn is_done(&self) -> bool {
        self.here.is_empty()
    }

    fn direction(&self) -> Direction {
        match self.light {
            Side::Here => Direction::Across,
            Side::There => Direction::Back,
        }
    }

    /// People standing with the light, who are the only ones able to cross.
    fn with_light(&self) -> &BTreeSet<Person> {
        match self.light {
            Side::Here => &self.here,
            Side::There => &self.there,
        }
    }

    /// Move a group, along with the light, to the other side.
    fn cross(&self, group: &[Person]) -> Banks {
        let mut next = self.clone();
        let (from, to) = match self.light {
            Side::Here => (&mut next.here, &mut next.there),
            Side::There => (&mut next.there, &mut next.here),
        };
        for person in group {
            from.remove(person);
            to.insert(*person);
        }
        next.light = self.light.other();
        next
    }
}

fn write_side(f: &mut fmt::Formatter<'_>, people: &BTreeSet<Person>, light: bool) -> fmt::Result {
    let mut names: Vec<String> = people.iter().map(|p| p.to_string()).collect();
    if light {
        names.push("*".to_owned());
    }
    write!(f, "[{}]", names.join(" "))
}

impl fmt::Display for Banks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_side(f, &self.here, self.light == Side::Here)?;
        write!(f, " | ")?;
        write_side(f, &self.there, self.light == Side::There)
    }
}

/// A pair of people crossing together. Both halves of the pair
/// are the same person when someone crosses alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crossing {
    pub pair: (Person, Person),
    pub direction: Direction,
}

impl Crossing {
    fn new(a: Person, b: Person, direction: Direction) -> Self {
        Crossing {
            pair: (a, b),
            direction,
        }
    }

    /// Time taken to cross, set by the slower person.
    pub fn time(&self) -> u32 {
        self.pair.0.max(self.pair.1)
    }
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.pair.0, self.pair.1, self.direction)
    }
}

/// States reachable by sending one or two people across with the light.
///
/// Every ordered pair is tried, and a pair replaces its mirror image,
/// so pairs of different people read slower first.
pub fn bridge_successors(state: &Banks) -> Successors<Banks, Crossing> {
    let direction = state.direction();
    let side = state.with_light();

    let mut succ = Successors::new();
    for &a in side {
        for &b in side {
            succ.insert(state.cross(&[a, b]), Crossing::new(a, b, direction));
        }
    }
    succ
}

/// Banks along with the total time spent so far.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timed {
    pub banks: Banks,
    pub elapsed: u32,
}

impl fmt::Display for Timed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.banks, self.elapsed)
    }
}

/// As [bridge_successors], but each state also records the elapsed time.
pub fn timed_successors(state: &Timed) -> Successors<Timed, Crossing> {
    bridge_successors(&state.banks)
        .into_iter()
        .map(|(banks, crossing)| {
            let elapsed = state.elapsed + crossing.time();
            (Timed { banks, elapsed }, crossing)
        })
        .collect()
}

/// A group of one or two people crossing together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Group {
    pub people: BTreeSet<Person>,
    pub direction: Direction,
}

impl Group {
    pub fn time(&self) -> u32 {
        self.people.iter().copied().max().unwrap_or(0)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.people.iter().map(|p| p.to_string()).collect();
        write!(f, "{{{}}} {}", names.join(", "), self.direction)
    }
}

/// States reachable by sending a group across, where each distinct group
/// is only considered once.
pub fn group_successors(state: &Banks) -> Successors<Banks, Group> {
    let direction = state.direction();
    let side = state.with_light();

    let mut succ = Successors::new();
    for &a in side {
        for &b in side.range(a..) {
            let group = Group {
                people: [a, b].iter().copied().collect(),
                direction,
            };
            succ.insert(state.cross(&[a, b]), group);
        }
    }
    succ
}

/// Find the fastest way to get everyone across.
pub fn bridge_problem(
    people: &[Person],
    options: SearchOptions,
) -> SearchResult<Path<Banks, Crossing, u32>> {
    dijkstra::build(
        Banks::new(people.iter().copied()),
        bridge_successors,
        Banks::is_done,
        Crossing::time,
    )
    .with_options(options)
    .run()
}

/// As [bridge_problem], but the elapsed time is part of each state.
pub fn timed_bridge_problem(
    people: &[Person],
    options: SearchOptions,
) -> SearchResult<Path<Timed, Crossing, u32>> {
    let start = Timed {
        banks: Banks::new(people.iter().copied()),
        elapsed: 0,
    };
    dijkstra::build(start, timed_successors, |s: &Timed| s.banks.is_done(), Crossing::time)
        .with_options(options)
        .run()
}

/// As [bridge_problem], but crossings are unordered groups of people.
pub fn group_bridge_problem(
    people: &[Person],
    options: SearchOptions,
) -> SearchResult<Path<Banks, Group, u32>> {
    dijkstra::build(
        Banks::new(people.iter().copied()),
        group_successors,
        Banks::is_done,
        Group::time,
    )
    .with_options(options)
    .run()
}

/// Total time spent crossing along a path.
pub fn elapsed_time<S, A>(path: &Path<S, A, u32>) -> u32 {
    path_cost(path)
}

/// Which state representation to search with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Timed,
    Banks,
    Groups,
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "timed" => Ok(Variant::Timed),
            "banks" => Ok(Variant::Banks),
            "groups" => Ok(Variant::Groups),
            _ => Err(anyhow!("Unknown bridge variant {}", s)),
        }
    }
}

pub(crate) fn command() -> App<'static, 'static> {
    SubCommand::with_name("bridge")
        .about("Get everyone across the bridge as quickly as possible")
        .arg(
            Arg::with_name("times")
                .value_name("TIMES")
                .multiple(true)
                .help("Crossing time of each person"),
        )
        .arg(
            Arg::with_name("variant")
                .long("variant")
                .takes_value(true)
                .possible_values(&["timed", "banks", "groups"])
                .default_value("banks"),
        )
}

pub(crate) fn main(matches: &ArgMatches, options: SearchOptions) -> Result<(), Error> {
    let people = if matches.is_present("times") {
        values_t!(matches, "times", Person)?
    } else {
        Vec::new()
    };

    let (elapsed, crossing) = match value_t!(matches, "variant", Variant)? {
        Variant::Banks => {
            let path = bridge_problem(&people, options).map_err(PuzzleError::from)?;
            (elapsed_time(&path), describe(&path))
        }
        Variant::Timed => {
            let path = timed_bridge_problem(&people, options).map_err(PuzzleError::from)?;
            (elapsed_time(&path), describe(&path))
        }
        Variant::Groups => {
            let path = group_bridge_problem(&people, options).map_err(PuzzleError::from)?;
            (elapsed_time(&path), describe(&path))
        }
    };

    println!("Everyone crosses in {}", elapsed);
    println!("{}", crossing);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use searcher::{final_state, path_actions, path_states};

    fn set(people: &[Person]) -> BTreeSet<Person> {
        people.iter().copied().collect()
    }

    fn banks(here: &[Person], there: &[Person], light: Side) -> Banks {
        Banks {
            here: set(here),
            there: set(there),
            light,
        }
    }

    fn across(a: Person, b: Person) -> Crossing {
        Crossing::new(a, b, Direction::Across)
    }

    fn back(a: Person, b: Person) -> Crossing {
        Crossing::new(a, b, Direction::Back)
    }

    fn fastest(people: &[Person]) -> u32 {
        elapsed_time(&bridge_problem(people, SearchOptions::default()).unwrap())
    }

    #[test]
    fn successors_alone() {
        let succ = bridge_successors(&banks(&[1], &[], Side::Here));
        assert_eq!(succ.len(), 1);
        assert_eq!(succ[&banks(&[], &[1], Side::There)], across(1, 1));

        let succ = bridge_successors(&banks(&[], &[2], Side::There));
        assert_eq!(succ.len(), 1);
        assert_eq!(succ[&banks(&[2], &[], Side::Here)], back(2, 2));
    }

    #[test]
    fn successors_pairs() {
        let succ = bridge_successors(&banks(&[1, 2], &[3], Side::Here));
        assert_eq!(succ.len(), 3);
        assert_eq!(succ[&banks(&[1], &[2, 3], Side::There)], across(2, 2));
        assert_eq!(succ[&banks(&[2], &[1, 3], Side::There)], across(1, 1));
        assert_eq!(succ[&banks(&[], &[1, 2, 3], Side::There)], across(2, 1));

        let succ = bridge_successors(&banks(&[2], &[1, 3], Side::There));
        assert_eq!(succ.len(), 3);
        assert_eq!(succ[&banks(&[1, 2, 3], &[], Side::Here)], back(3, 1));
        assert_eq!(succ[&banks(&[1, 2], &[3], Side::Here)], back(1, 1));
        assert_eq!(succ[&banks(&[2, 3], &[1], Side::Here)], back(3, 3));
    }

    #[test]
    fn timed_successors_add_time() {
        let start = Timed {
            banks: banks(&[1], &[], Side::Here),
            elapsed: 3,
        };
        let succ = timed_successors(&start);
        let expected = Timed {
            banks: banks(&[], &[1], Side::There),
            elapsed: 4,
        };
        assert_eq!(succ.len(), 1);
        assert_eq!(succ[&expected], across(1, 1));
    }

    #[test]
    fn group_successors_are_unordered() {
        let succ = group_successors(&banks(&[1, 2], &[3], Side::Here));
        assert_eq!(succ.len(), 3);
        let everyone = &succ[&banks(&[], &[1, 2, 3], Side::There)];
        assert_eq!(everyone.people, set(&[1, 2]));
        assert_eq!(everyone.time(), 2);
    }

    #[test]
    fn four_people() {
        let path = bridge_problem(&[1, 2, 5, 10], SearchOptions::default()).unwrap();
        assert_eq!(elapsed_time(&path), 17);
        assert!(final_state(&path).is_done());

        // There are two equally good solutions.
        let first = vec![
            across(2, 1),
            back(1, 1),
            across(10, 5),
            back(2, 2),
            across(2, 1),
        ];
        let second = vec![
            across(2, 1),
            back(2, 2),
            across(10, 5),
            back(1, 1),
            across(2, 1),
        ];
        let actions: Vec<Crossing> = path_actions(&path).into_iter().copied().collect();
        assert!(actions == first || actions == second, "{:?}", actions);
    }

    #[test]
    fn six_people() {
        let path = bridge_problem(&[1, 2, 5, 10, 15, 20], SearchOptions::default()).unwrap();
        assert_eq!(elapsed_time(&path), 42);
        assert_eq!(
            path_actions(&path),
            vec![
                &across(2, 1),
                &back(1, 1),
                &across(10, 5),
                &back(2, 2),
                &across(2, 1),
                &back(1, 1),
                &across(20, 15),
                &back(2, 2),
                &across(2, 1),
            ]
        );

        let path = bridge_problem(&[1, 2, 4, 8, 16, 32], SearchOptions::default()).unwrap();
        assert_eq!(elapsed_time(&path), 52);
        assert_eq!(path_actions(&path)[2], &across(8, 4));
        assert_eq!(path_actions(&path)[6], &across(32, 16));
    }

    #[test]
    fn growing_groups() {
        let people = [1, 2, 4, 8, 16];
        let times: Vec<u32> = (0..=people.len()).map(|n| fastest(&people[..n])).collect();
        assert_eq!(times, vec![0, 1, 2, 7, 15, 28]);

        // Repeated crossing times are the same person.
        let people = [1, 1, 2, 3, 5, 8, 13, 21];
        let times: Vec<u32> = (0..people.len()).map(|n| fastest(&people[..n])).collect();
        assert_eq!(times, vec![0, 1, 1, 2, 6, 12, 19, 30]);
    }

    #[test]
    fn nobody_to_cross() {
        let path = bridge_problem(&[], SearchOptions::default()).unwrap();
        assert!(path.is_empty());
        assert_eq!(elapsed_time(&path), 0);
    }

    #[test]
    fn timed_variant() {
        let path = timed_bridge_problem(&[1, 2, 5, 10], SearchOptions::default()).unwrap();
        assert_eq!(elapsed_time(&path), 17);
        assert_eq!(final_state(&path).elapsed, 17);
        for step in path.steps() {
            assert_eq!(step.state.elapsed, step.cost);
        }
    }

    #[test]
    fn group_variant() {
        let path = group_bridge_problem(&[1, 2, 5, 10], SearchOptions::default()).unwrap();
        assert_eq!(elapsed_time(&path), 17);
        assert!(final_state(&path).is_done());
    }

    #[test]
    fn no_state_repeats() {
        let path = bridge_problem(&[1, 2, 5, 10, 15, 20], SearchOptions::default()).unwrap();
        let states = path_states(&path);
        for (i, state) in states.iter().enumerate() {
            assert!(!states[i + 1..].contains(state));
        }
    }

    #[test]
    fn variant_names() {
        assert_eq!("timed".parse::<Variant>().unwrap(), Variant::Timed);
        assert_eq!("groups".parse::<Variant>().unwrap(), Variant::Groups);
        assert!("boats".parse::<Variant>().is_err());
    }
}
