use std::path::PathBuf;

use anyhow::Result;
use clap::{arg, ArgMatches, Command};
use rainquest::DataStore;

use crate::cli;

pub fn cli() -> Command {
    Command::new("stations")
        .about("List the top-level radar and station groups in the data")
        .arg(arg!(<FILE> "Target file").value_parser(clap::value_parser!(PathBuf)))
}

pub fn exec(args: &ArgMatches) -> Result<()> {
    let file_name = args.get_one::<PathBuf>("FILE").unwrap();
    let store = cli::store(file_name)?;

    for name in store.group_names("/")? {
        println!("{name}");
    }
    Ok(())
}
