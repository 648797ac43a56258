//! Subway planning: the ride with the fewest stops between two stations.

use std::fs;
use std::str::FromStr;

use anyhow::Error;
use clap::{App, Arg, ArgMatches, SubCommand};
use indexmap::IndexMap;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use searcher::{basic, Path, SearchError, SearchOptions, Successors};

use super::PuzzleError;

pub type Station = String;
pub type Line = String;

lazy_static! {
    /// The Boston subway, more or less.
    pub static ref BOSTON: Subway = Subway::new(vec![
        (
            "blue",
            "bowdoin government state aquarium maverick airport suffolk revere wonderland",
        ),
        (
            "orange",
            "oakgrove sullivan haymarket state downtown chinatown tufts backbay foresthills",
        ),
        (
            "green",
            "lechmere science north haymarket government park copley kenmore newton riverside",
        ),
        (
            "red",
            "alewife davis porter harvard central mit charles park downtown south umass mattapan",
        ),
    ]);
}

/// A subway map: each station, with the neighboring stations
/// and the line which connects to each one.
#[derive(Debug, Clone, Default)]
pub struct Subway {
    connections: IndexMap<Station, Successors<Station, Line>>,
}

impl Subway {
    /// Build a map from lines, each given as a name and the
    /// whitespace-separated stations along it, in order.
    pub fn new<I, L, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = (L, S)>,
        L: AsRef<str>,
        S: AsRef<str>,
    {
        let mut subway = Subway::default();
        for (line, stations) in lines {
            subway.add_line(line.as_ref(), stations.as_ref());
        }
        subway
    }

    fn add_line(&mut self, line: &str, stations: &str) {
        for (a, b) in stations.split_whitespace().tuple_windows() {
            self.connections
                .entry(a.to_owned())
                .or_default()
                .insert(b.to_owned(), line.to_owned());
            self.connections
                .entry(b.to_owned())
                .or_default()
                .insert(a.to_owned(), line.to_owned());
        }
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.connections.keys()
    }

    pub fn contains(&self, station: &str) -> bool {
        self.connections.contains_key(station)
    }

    /// Stations one stop away, along with the line to take.
    pub fn neighbors(&self, station: &str) -> Option<&Successors<Station, Line>> {
        self.connections.get(station)
    }

    pub fn successors(&self, station: &Station) -> Successors<Station, Line> {
        self.connections.get(station).cloned().unwrap_or_default()
    }

    /// The ride with the fewest stops from `here` to `there`.
    pub fn ride(&self, here: &str, there: &str) -> Result<Path<Station, Line>, PuzzleError> {
        self.ride_with(here, there, SearchOptions::default())
    }

    pub fn ride_with(
        &self,
        here: &str,
        there: &str,
        options: SearchOptions,
    ) -> Result<Path<Station, Line>, PuzzleError> {
        for station in [here, there].iter() {
            if !self.contains(station) {
                return Err(PuzzleError::UnknownStation((*station).to_owned()));
            }
        }

        Ok(basic::build(
            here.to_owned(),
            |s| self.successors(s),
            |s: &Station| s == there,
        )
        .with_options(options)
        .run()?)
    }

    /// The longest of the shortest rides between any two stations.
    ///
    /// Stations are considered in alphabetical order, and the first
    /// ride found of the greatest length wins. Pairs of stations with
    /// no ride between them are skipped, but running out of search
    /// budget is an error.
    pub fn longest_ride(
        &self,
        options: &SearchOptions,
    ) -> Result<Option<Path<Station, Line>>, PuzzleError> {
        let stations: Vec<&Station> = self.stations().sorted().collect();

        let mut longest: Option<Path<Station, Line>> = None;
        for (a, b) in stations.iter().cartesian_product(stations.iter()) {
            if a == b {
                continue;
            }
            let path = match self.ride_with(a, b, options.clone()) {
                Ok(path) => path,
                Err(PuzzleError::Search(SearchError::NoResultFound)) => continue,
                Err(e) => return Err(e),
            };
            if longest.as_ref().map(|l| path.len() > l.len()).unwrap_or(true) {
                longest = Some(path);
            }
        }
        Ok(longest)
    }
}

impl FromStr for Subway {
    type Err = PuzzleError;

    /// Parse lines of the form `name: station station ...`.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"^\s*([\w-]+)\s*[:=]\s*(.*?)\s*$").unwrap();
        }

        let mut lines = Vec::new();
        for text in s.lines() {
            let text = text.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let cap = RE
                .captures(text)
                .ok_or_else(|| PuzzleError::InvalidLine(text.to_owned()))?;
            if cap[2].is_empty() {
                return Err(PuzzleError::EmptyLine(cap[1].to_owned()));
            }
            lines.push((cap[1].to_owned(), cap[2].to_owned()));
        }

        Ok(Subway::new(lines))
    }
}

/// Render a ride as stations joined by the line taken between them.
pub fn itinerary(path: &Path<Station, Line>) -> String {
    let mut out = path.origin().clone();
    for step in path.steps() {
        out.push_str(&format!(" -({})-> {}", step.action, step.state));
    }
    out
}

fn load(matches: &ArgMatches) -> Result<Subway, Error> {
    match matches.value_of("map") {
        Some(filename) => Ok(fs::read_to_string(filename)?.parse()?),
        None => Ok(BOSTON.clone()),
    }
}

fn map_arg() -> Arg<'static, 'static> {
    Arg::with_name("map")
        .long("map")
        .value_name("FILE")
        .help("Subway map, one `line: stations...` per line")
}

pub(crate) fn command() -> App<'static, 'static> {
    SubCommand::with_name("subway")
        .about("Find the ride with the fewest stops between two stations")
        .arg(Arg::with_name("from").value_name("FROM").required(true))
        .arg(Arg::with_name("to").value_name("TO").required(true))
        .arg(map_arg())
}

pub(crate) fn main(matches: &ArgMatches, options: SearchOptions) -> Result<(), Error> {
    let subway = load(matches)?;
    let here = matches.value_of("from").unwrap_or_default();
    let there = matches.value_of("to").unwrap_or_default();

    let path = subway.ride_with(here, there, options)?;
    println!("{} stops", path.len());
    println!("{}", itinerary(&path));
    Ok(())
}

pub(crate) fn longest_command() -> App<'static, 'static> {
    SubCommand::with_name("longest-ride")
        .about("Find the longest ride in the subway system")
        .arg(map_arg())
}

pub(crate) fn longest_main(matches: &ArgMatches, options: SearchOptions) -> Result<(), Error> {
    let subway = load(matches)?;
    match subway.longest_ride(&options)? {
        Some(path) => {
            println!("{} stops", path.len());
            println!("{}", itinerary(&path));
        }
        None => println!("No rides between different stations"),
    }
    Ok(())
}
