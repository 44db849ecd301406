use clap::Parser;
use log::info;
use maze_route::{render, Grid, MazeError, MazeResult, Mode};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Reads a maze of '#' walls and open spaces and prints it with the route from 's' to 't' drawn
/// in.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Draw the region explored by a flood fill instead of a route
    #[arg(long)]
    flood_fill: bool,

    /// Maze file, standard input if absent or "-"
    input: Option<PathBuf>,
}

impl Args {
    fn mode(&self) -> Mode {
        if self.flood_fill {
            Mode::FloodFill
        } else {
            Mode::DirectedSearch
        }
    }
}

fn run(args: &Args) -> MazeResult<()> {
    let grid = match &args.input {
        Some(path) if path.as_os_str() != "-" => Grid::from_path(path)?,
        _ => Grid::from_reader(io::stdin().lock())?,
    };
    let mode = args.mode();
    info!(
        "Solving {}x{} maze with {:?}",
        grid.width(),
        grid.height(),
        mode
    );
    let path = mode.solve(&grid);
    info!("Path has {} cells", path.len());

    let mut out = BufWriter::new(io::stdout().lock());
    out.write_all(render(&grid, &path).as_bytes())
        .and_then(|_| out.flush())
        .map_err(MazeError::Output)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("maze_route: {e}");
            ExitCode::FAILURE
        }
    }
}
