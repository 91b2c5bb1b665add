use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log::{debug, info};
use mazer::{grid::{Maze, Pos}, logger::DevLogger, render::{self, ImageOptions}, Error, Search, Solver};
use std::{collections::HashSet, fs, path::{Path, PathBuf}};

#[derive(Parser, Debug)]
#[command(name = "mazer", version, about = "Solve a text maze with depth-first or breadth-first search")]
struct Cli {
    /// Maze file (`A` start, `B` goal, `#` wall, space open). If omitted, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Search strategy: DFS or BFS
    #[arg(short, long, default_value = "DFS")]
    strategy: String,

    /// Write a PNG rendering of the maze here
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Leave the solution path out of the PNG
    #[arg(long)]
    hide_solution: bool,

    /// Shade explored cells in the PNG
    #[arg(long)]
    show_explored: bool,

    /// Colour the console output
    #[arg(long)]
    color: bool,

    /// Write devlogs into this directory
    #[arg(long)]
    devlogs: Option<PathBuf>,

    /// Step-by-step mode (pauses after each devlog). Press Enter to continue.
    #[arg(long)]
    step: bool,

    /// Maximum devlogs to write (0 = unlimited)
    #[arg(long, default_value_t=0)]
    max_logs: usize,

    /// Print the search report as JSON (needs the `serde` feature)
    #[arg(long)]
    json: bool,
}

fn read_maze(input: &Option<PathBuf>) -> Result<String> {
    match input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            use std::io::{self, Read};
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn print_maze(maze: &Maze, path: Option<&[Pos]>, color: bool) {
    if !color { print!("{}", maze.to_pretty_string(path)); return; }
    let path: HashSet<Pos> = path.unwrap_or(&[]).iter().copied().collect();
    for r in 0..maze.height() {
        let line: String = (0..maze.width()).map(|c| {
            let ch = maze.glyph(Pos::new(r, c), &path);
            let s = ch.to_string();
            match ch {
                '#' => s.bright_black().to_string(),
                'A' => s.red().bold().to_string(),
                'B' => s.green().bold().to_string(),
                '.' => s.yellow().to_string(),
                _ => s,
            }
        }).collect();
        println!("{}", line);
    }
}

#[cfg(feature = "serde")]
fn print_json(search: &Search) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(search)?);
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_json(_search: &Search) -> Result<()> {
    anyhow::bail!("--json needs mazer built with the `serde` feature")
}

fn write_png(maze: &Maze, search: Option<&Search>, cli: &Cli, out: &Path) -> Result<()> {
    let opts = ImageOptions { show_solution: !cli.hide_solution, show_explored: cli.show_explored };
    render::save_png(maze, search, opts, out).with_context(|| format!("writing {}", out.display()))?;
    info!("wrote {}", out.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = read_maze(&cli.input)?;
    let maze = Maze::parse(&text).context("parse maze")?;
    info!("loaded {}x{} maze, start {}, goal {}", maze.height(), maze.width(), maze.start(), maze.goal());

    let mut logger = match &cli.devlogs {
        Some(dir) => Some(DevLogger::new(dir, cli.color, cli.step, cli.max_logs)?),
        None => None,
    };
    if let Some(l) = logger.as_mut() { l.log_maze(&maze)?; }

    let mut solver = Solver::from_name(&cli.strategy)?;
    println!("Maze:\n");
    print_maze(&maze, None, cli.color);
    println!("\nSolving...");

    let search = match solver.solve(&maze) {
        Ok(search) => search,
        Err(Error::NoSolution) => {
            info!("{} exhausted the frontier", solver.strategy());
            if let Some(l) = logger.as_mut() { l.log_no_solution(&maze, solver.strategy())?; }
            println!("No solution");
            if let Some(out) = &cli.output { write_png(&maze, None, &cli, out)?; }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    debug!("solver finished in state {:?}", solver.state());

    println!("States Explored: {}", search.num_explored);
    println!("Solution:\n");
    print_maze(&maze, Some(&search.solution.cells), cli.color);
    if let Some(l) = logger.as_mut() { l.log_search(&maze, &search)?; }

    if cli.json { print_json(&search)?; }

    if let Some(out) = &cli.output { write_png(&maze, Some(&search), &cli, out)?; }
    Ok(())
}
