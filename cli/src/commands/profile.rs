use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{arg, ArgAction, ArgMatches, Command};
use console::Style;
use rainquest::{read_radar_volume, AcquisitionTime, AltitudeMode, RadarVolume};

use crate::cli;

pub fn cli() -> Command {
    Command::new("profile")
        .about("Print the reflectivity at a point for one radar acquisition")
        .arg(arg!(<FILE> "Target file").value_parser(clap::value_parser!(PathBuf)))
        .arg(arg!(<RADAR> "Radar group to read"))
        .arg(arg!(--year <YYYY> "Acquisition year"))
        .arg(arg!(--month <MM> "Acquisition month"))
        .arg(arg!(--day <DD> "Acquisition day"))
        .arg(arg!(--hour <HH> "Acquisition hour"))
        .arg(arg!(--minute <mm> "Acquisition minute"))
        .arg(
            arg!(--lon <DEGREES> "Longitude of the query point")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--lat <DEGREES> "Latitude of the query point")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--alt <METERS> "Altitude of the query point; omit to print the whole profile")
                .required(false)
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--"valid-altitudes" "Restrict the altitude axis to the acquisition's populated levels")
                .action(ArgAction::SetTrue),
        )
}

pub fn exec(args: &ArgMatches) -> Result<()> {
    let file_name = args.get_one::<PathBuf>("FILE").unwrap();
    let store = cli::store(file_name)?;
    let radar = args.get_one::<String>("RADAR").unwrap();

    let time = AcquisitionTime::new(
        args.get_one::<String>("year").unwrap(),
        args.get_one::<String>("month").unwrap(),
        args.get_one::<String>("day").unwrap(),
        args.get_one::<String>("hour").unwrap(),
        args.get_one::<String>("minute").unwrap(),
    );
    let mode = if args.get_flag("valid-altitudes") {
        AltitudeMode::ValidOnly
    } else {
        AltitudeMode::Full
    };

    let volume = read_radar_volume(&store, radar, &time, mode)?;
    print_header(radar, &volume);

    let longitude = *args.get_one::<f64>("lon").unwrap();
    let latitude = *args.get_one::<f64>("lat").unwrap();

    match args.get_one::<f64>("alt") {
        Some(&altitude) => match volume.value_at(longitude, latitude, altitude) {
            Some(value) => println!("{value}"),
            None => println!("no coverage at this location"),
        },
        None => match volume.profile_at(longitude, latitude) {
            Some(profile) => {
                for (altitude, value) in volume.altitudes.iter().zip(profile.iter()) {
                    println!("{altitude:>10.1} {value:>12.3}");
                }
            }
            None => println!("no coverage at this location"),
        },
    }
    Ok(())
}

fn print_header(radar: &str, volume: &RadarVolume) {
    let bold = Style::new().bold();
    let time = DateTime::<Utc>::from_timestamp(volume.utc as i64, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("{} s", volume.utc));
    let header = format!(
        "{} @ ({:.4}, {:.4}, {:.1} m), {}",
        radar,
        volume.position.longitude,
        volume.position.latitude,
        volume.position.elevation,
        time,
    );
    println!("{}", bold.apply_to(header));
}
