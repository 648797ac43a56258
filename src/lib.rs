#![deny(clippy::all)]

use anyhow::Context;
use clap::{value_t, App, AppSettings, Arg, ArgMatches};

use lazy_static::lazy_static;
use searcher::SearchOptions;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use std::collections::HashMap;
use std::time::Duration;

pub mod puzzles;

type Error = anyhow::Error;
type Actor = Box<dyn (Fn(&ArgMatches, SearchOptions) -> Result<(), Error>) + Send + Sync + 'static>;

macro_rules! puzzle {
    ($name:expr, $main:path) => {
        ($name, Box::new($main) as Actor)
    };
}

lazy_static! {
    static ref SOLVERS: HashMap<&'static str, Actor> = {
        let mut s: HashMap<&'static str, Actor> = HashMap::new();
        let solvers: Vec<(&'static str, Actor)> = vec![
            puzzle!("pour", puzzles::pour::main),
            puzzle!("hardest", puzzles::pour::hardest_main),
            puzzle!("bridge", puzzles::bridge::main),
            puzzle!("missionaries", puzzles::missionaries::main),
            puzzle!("subway", puzzles::subway::main),
            puzzle!("longest-ride", puzzles::subway::longest_main),
        ];

        for (name, func) in solvers.into_iter() {
            s.insert(name, func);
        }

        s
    };
}

fn app() -> App<'static, 'static> {
    App::new("State space puzzles")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Solve classic puzzles by searching their state spaces")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("limit")
                .long("limit")
                .value_name("STEPS")
                .global(true)
                .help("Give up after expanding this many paths"),
        )
        .arg(
            Arg::with_name("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .global(true)
                .help("Give up after searching for this long"),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .value_name("STEPS")
                .global(true)
                .help("Log search progress every so many steps"),
        )
        .subcommand(puzzles::pour::command())
        .subcommand(puzzles::pour::hardest_command())
        .subcommand(puzzles::bridge::command())
        .subcommand(puzzles::missionaries::command())
        .subcommand(puzzles::subway::command())
        .subcommand(puzzles::subway::longest_command())
}

/// Build search options from the global arguments.
fn search_options(matches: &ArgMatches) -> Result<SearchOptions, Error> {
    let mut options = SearchOptions::default();
    if matches.is_present("limit") {
        options.limit = Some(value_t!(matches, "limit", usize)?);
    }
    if matches.is_present("timeout") {
        let seconds = value_t!(matches, "timeout", f64)?;
        let timeout = Duration::try_from_secs_f64(seconds)
            .with_context(|| format!("Invalid timeout: {} seconds", seconds))?;
        options.timeout = Some(timeout);
    }
    if matches.is_present("verbose") {
        options.verbose = Some(value_t!(matches, "verbose", usize)?);
    }
    Ok(options)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PUZZLES_LOG").unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

pub fn solver() -> Result<(), Error> {
    let matches = app().get_matches();

    let (name, submatches) = matches.subcommand();
    let submatches = submatches.ok_or(PuzzlesError::MissingPuzzle)?;

    // Global arguments are propagated down to the subcommand.
    let options = search_options(submatches)?;
    init_tracing(options.verbose.is_some());
    debug!(puzzle = name, ?options, "solving");

    match SOLVERS.get(name) {
        None => Err(PuzzlesError::PuzzleNotFound(name.to_owned()).into()),
        Some(actor) => actor(submatches, options),
    }
}

#[derive(Debug, Error)]
pub enum PuzzlesError {
    #[error("No puzzle named {0}")]
    PuzzleNotFound(String),

    #[error("No puzzle given")]
    MissingPuzzle,
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Result<SearchOptions, Error> {
        let matches = app().get_matches_from(args);
        let (_, submatches) = matches.subcommand();
        search_options(submatches.unwrap())
    }

    fn options(args: &[&str]) -> SearchOptions {
        parse(args).unwrap()
    }

    #[test]
    fn solvers() {
        for name in &["pour", "hardest", "bridge", "missionaries", "subway", "longest-ride"] {
            assert!(SOLVERS.contains_key(name), "missing {}", name);
        }
    }

    #[test]
    fn default_options() {
        let o = options(&["puzzles", "pour", "4", "9", "6"]);
        assert_eq!(o.limit, None);
        assert_eq!(o.timeout, None);
        assert_eq!(o.verbose, None);
    }

    #[test]
    fn global_options() {
        let o = options(&[
            "puzzles", "bridge", "--limit", "100", "--timeout", "1.5", "--verbose", "10", "1", "2",
        ]);
        assert_eq!(o.limit, Some(100));
        assert_eq!(o.timeout, Some(Duration::from_millis(1500)));
        assert_eq!(o.verbose, Some(10));
    }

    #[test]
    fn hardest_max_is_not_the_step_limit() {
        let matches = app().get_matches_from(&["puzzles", "hardest", "5"]);
        let (name, submatches) = matches.subcommand();
        let submatches = submatches.unwrap();
        assert_eq!(name, "hardest");
        assert_eq!(submatches.value_of("max"), Some("5"));
        assert_eq!(search_options(submatches).unwrap().limit, None);

        let o = options(&["puzzles", "hardest", "--limit", "1", "10"]);
        assert_eq!(o.limit, Some(1));
    }

    #[test]
    fn bad_timeouts() {
        assert!(parse(&["puzzles", "pour", "--timeout", "nan", "4", "9", "6"]).is_err());
        assert!(parse(&["puzzles", "pour", "--timeout", "inf", "4", "9", "6"]).is_err());
    }
}
