use std::path::PathBuf;

use anyhow::Result;
use clap::{arg, ArgMatches, Command};
use rainquest::{read_rain_series, RainFilter};

use crate::cli;

pub fn cli() -> Command {
    Command::new("rain")
        .about("Print the observation table of a rain station")
        .arg(arg!(<FILE> "Target file").value_parser(clap::value_parser!(PathBuf)))
        .arg(arg!(<STATION_ID> "Station to read"))
        .arg(
            arg!(--year <YYYY> "Year to filter by")
                .required(false), // There is no syntax yet for optional options.
        )
        .arg(arg!(--month <MM> "Month to filter by").required(false))
        .arg(arg!(--day <DD> "Day to filter by").required(false))
        .arg(arg!(--hour <HH> "Hour to filter by").required(false))
        .arg(
            arg!(--minute <mm> "Minute to filter by, mapped to its 5-minute row")
                .required(false)
                .value_parser(clap::value_parser!(u32)),
        )
}

pub fn exec(args: &ArgMatches) -> Result<()> {
    let file_name = args.get_one::<PathBuf>("FILE").unwrap();
    let store = cli::store(file_name)?;
    let station = args.get_one::<String>("STATION_ID").unwrap();

    let filter = RainFilter {
        year: args.get_one::<String>("year").map(String::as_str),
        month: args.get_one::<String>("month").map(String::as_str),
        day: args.get_one::<String>("day").map(String::as_str),
        hour: args.get_one::<String>("hour").map(String::as_str),
        minute: args.get_one::<u32>("minute").copied(),
    };

    let series = read_rain_series(&store, station, &filter)?;
    print!("{series}");
    Ok(())
}
