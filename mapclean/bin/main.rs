use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use mapclean::{pgm, process, Error};

/// Where the processed map is written, relative to the working directory
const OUTPUT_PATH: &str = "map_out.pgm";

#[derive(Parser, Debug)]
#[command(
    name = "mapclean",
    version,
    about = "Separate outdoor from unexplored space in a PGM occupancy grid and wall off indoor areas"
)]
struct Cli {
    /// The PGM (P5) map to process
    input: Option<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let Some(input) = cli.input else {
        eprintln!("{}", Cli::command().render_usage());
        return Err(Error::MissingArgument.into());
    };

    let grid = pgm::load(&input).with_context(|| format!("failed to load {}", input.display()))?;
    log::info!("loaded {}x{} grid from {}", grid.rows(), grid.cols(), input.display());

    let grid = process(grid)?;

    pgm::save(&grid, OUTPUT_PATH).with_context(|| format!("failed to write {}", OUTPUT_PATH))?;
    println!("Map processing complete. Output saved to {}.", OUTPUT_PATH);

    Ok(())
}
