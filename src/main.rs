use std::io;

use anyhow::Result;
use bikeshare_explorer::{Args, CityFiles, Console, Session};
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let files = CityFiles::from_args(&args)?;
    let console = Console::new(io::stdin().lock(), io::stdout().lock());

    let mut session = Session::new(files, console);
    let runs = session.run()?;
    info!("session finished after {runs} run(s)");

    Ok(())
}
