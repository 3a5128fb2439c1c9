use clap::{ArgMatches, Command};

pub fn cli() -> Vec<Command> {
    vec![profile::cli(), rain::cli(), stations::cli()]
}

pub fn dispatch(matches: ArgMatches) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("profile", args)) => profile::exec(args),
        Some(("rain", args)) => rain::exec(args),
        Some(("stations", args)) => stations::exec(args),
        _ => unreachable!(),
    }
}

pub mod profile;
pub mod rain;
pub mod stations;
