use anyhow::Result;
use chrono::Local;
use colored::*;
use itertools::Itertools;
use std::{fs::{self, File}, io::Write, path::{Path, PathBuf}};

use crate::{frontier::Strategy, grid::Maze, solver::Search};

/// Writes numbered `devlog(N).txt` files, one per solver milestone, and echoes
/// each entry to the console.
pub struct DevLogger {
    dir: PathBuf,
    color: bool,
    step: bool,
    max_logs: usize,
    counter: usize,
}

impl DevLogger {
    pub fn new(dir: impl Into<PathBuf>, color: bool, step: bool, max_logs: usize) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, color, step, max_logs, counter: 0 })
    }

    pub fn dir(&self) -> &Path { &self.dir }
    pub fn written(&self) -> usize { self.counter }

    /// Returns the file written, or `None` once `max_logs` is reached (0 = unlimited).
    pub fn log(&mut self, title: &str, details: &str) -> Result<Option<PathBuf>> {
        if self.max_logs != 0 && self.counter >= self.max_logs { return Ok(None); }
        self.counter += 1;
        let path = self.dir.join(format!("devlog({}).txt", self.counter));

        let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut f = File::create(&path)?;
        writeln!(f, "[{}] {}\n\n{}", ts, title, details)?;

        if self.color {
            println!("{} {}\n{}", "➤".blue().bold(), title.bold(), details);
        } else {
            println!("➤ {}\n{}", title, details);
        }

        if self.step {
            print!("-- press Enter to continue --");
            use std::io;
            io::stdout().flush().ok();
            let mut s = String::new();
            io::stdin().read_line(&mut s).ok();
        }
        Ok(Some(path))
    }

    pub fn log_maze(&mut self, maze: &Maze) -> Result<Option<PathBuf>> {
        let details = format!(
            "{}x{} grid, {} open cells, start {}, goal {}\n\n{}",
            maze.height(), maze.width(), maze.open_cells(), maze.start(), maze.goal(), maze,
        );
        self.log("Maze loaded", &details)
    }

    pub fn log_search(&mut self, maze: &Maze, search: &Search) -> Result<Option<PathBuf>> {
        let sol = &search.solution;
        let details = format!(
            "States explored: {}\nMoves: {}\nActions: {}\nCells: {}\nExpansion order: {}\n\n{}",
            search.num_explored,
            sol.len(),
            sol.actions.iter().join(", "),
            sol.cells.iter().join(" "),
            search.order.iter().join(" "),
            maze.to_pretty_string(Some(&sol.cells)),
        );
        self.log(&format!("{} reached the goal", search.strategy), &details)
    }

    pub fn log_no_solution(&mut self, maze: &Maze, strategy: Strategy) -> Result<Option<PathBuf>> {
        let details = format!("Frontier exhausted; goal {} is unreachable from {}", maze.goal(), maze.start());
        self.log(&format!("{} found no solution", strategy), &details)
    }
}
