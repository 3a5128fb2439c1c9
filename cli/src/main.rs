use clap::{crate_version, Command};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

fn app() -> Command {
    Command::new("rainq")
        .version(crate_version!())
        .arg_required_else_help(true)
        .subcommands(commands::cli())
}

fn real_main() -> anyhow::Result<()> {
    let matches = app().get_matches();

    commands::dispatch(matches)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(ref e) = real_main() {
        let red = console::Style::new().red();
        eprintln!("{}: {}", red.apply_to("error"), e);
        std::process::exit(1);
    }
}
