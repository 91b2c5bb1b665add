use itertools::iproduct;
use std::{collections::HashSet, fmt};

use crate::error::{InvalidMaze, Result};

pub const START: char = 'A';
pub const GOAL: char = 'B';
pub const WALL: char = '#';
pub const BLANK: char = ' ';
pub const PATH: char = '.';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos { pub r: usize, pub c: usize }

impl Pos {
    pub const fn new(r: usize, c: usize) -> Self { Self { r, c } }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "({}, {})", self.r, self.c) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action { Up, Down, Left, Right }

impl Action {
    /// Expansion order; decides tie-breaks in both search strategies.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    pub fn name(self) -> &'static str {
        match self { Action::Up => "up", Action::Down => "down", Action::Left => "left", Action::Right => "right" }
    }

    /// The cell one step away, or `None` when the step would go below row/col 0.
    pub fn step(self, p: Pos) -> Option<Pos> {
        match self {
            Action::Up => p.r.checked_sub(1).map(|r| Pos::new(r, p.c)),
            Action::Down => Some(Pos::new(p.r + 1, p.c)),
            Action::Left => p.c.checked_sub(1).map(|c| Pos::new(p.r, c)),
            Action::Right => Some(Pos::new(p.r, p.c + 1)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    height: usize,
    width: usize,
    // row-major, height * width; true = wall
    walls: Vec<bool>,
    start: Pos,
    goal: Pos,
}

impl Maze {
    /// Parse a text layout: `A` start, `B` goal, `#` wall, space open.
    /// Rows shorter than the longest one are padded with open cells.
    pub fn parse(text: &str) -> Result<Self> {
        let starts = text.matches(START).count();
        if starts != 1 { return Err(InvalidMaze::StartCount(starts).into()); }
        let goals = text.matches(GOAL).count();
        if goals != 1 { return Err(InvalidMaze::GoalCount(goals).into()); }

        let lines: Vec<Vec<char>> = split_lines(text).into_iter().map(|l| l.chars().collect()).collect();
        let height = lines.len();
        let width = lines.iter().map(Vec::len).max().unwrap_or(0);

        let mut walls = vec![false; height * width];
        let (mut start, mut goal) = (None, None);
        for (r, line) in lines.iter().enumerate() {
            for c in 0..width {
                match line.get(c).copied().unwrap_or(BLANK) {
                    START => start = Some(Pos::new(r, c)),
                    GOAL => goal = Some(Pos::new(r, c)),
                    WALL => walls[r * width + c] = true,
                    BLANK => {}
                    ch => return Err(InvalidMaze::IllegalChar { ch, row: r, col: c }.into()),
                }
            }
        }
        let start = start.ok_or(InvalidMaze::StartCount(0))?;
        let goal = goal.ok_or(InvalidMaze::GoalCount(0))?;
        Ok(Self { height, width, walls, start, goal })
    }

    /// Build from a wall map (`true` = wall). Short rows are padded with open cells.
    /// Start and goal must be open, in-bounds cells; they may coincide.
    pub fn from_walls(rows: &[Vec<bool>], start: Pos, goal: Pos) -> Result<Self> {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let walls = rows.iter()
            .flat_map(|row| (0..width).map(move |c| row.get(c).copied().unwrap_or(false)))
            .collect();
        let maze = Self { height, width, walls, start, goal };
        for p in [start, goal] {
            if !maze.is_open(p) { return Err(InvalidMaze::Endpoint(p).into()); }
        }
        Ok(maze)
    }

    pub fn height(&self) -> usize { self.height }
    pub fn width(&self) -> usize { self.width }
    pub fn start(&self) -> Pos { self.start }
    pub fn goal(&self) -> Pos { self.goal }

    pub fn in_bounds(&self, p: Pos) -> bool { p.r < self.height && p.c < self.width }
    pub fn is_wall(&self, p: Pos) -> bool { self.in_bounds(p) && self.walls[p.r * self.width + p.c] }
    pub fn is_open(&self, p: Pos) -> bool { self.in_bounds(p) && !self.walls[p.r * self.width + p.c] }

    pub fn cells(&self) -> impl Iterator<Item = Pos> {
        iproduct!(0..self.height, 0..self.width).map(|(r, c)| Pos::new(r, c))
    }

    pub fn open_cells(&self) -> usize { self.walls.iter().filter(|&&w| !w).count() }

    /// In-bounds, non-wall cells adjacent to `p`, in up/down/left/right order.
    pub fn neighbors(&self, p: Pos) -> Vec<(Action, Pos)> {
        Action::ALL.iter()
            .filter_map(|&a| a.step(p).map(|q| (a, q)))
            .filter(|&(_, q)| self.is_open(q))
            .collect()
    }

    /// Walk `actions` from the start. Returns the cells entered (start excluded),
    /// or `None` if a move leaves the grid or runs into a wall.
    pub fn replay(&self, actions: &[Action]) -> Option<Vec<Pos>> {
        let mut at = self.start;
        let mut cells = Vec::with_capacity(actions.len());
        for a in actions {
            at = a.step(at).filter(|&q| self.is_open(q))?;
            cells.push(at);
        }
        Some(cells)
    }

    /// Character for one cell: wall, start, goal, path member or blank.
    pub fn glyph(&self, p: Pos, path: &HashSet<Pos>) -> char {
        if self.is_wall(p) { WALL }
        else if p == self.start { START }
        else if p == self.goal { GOAL }
        else if path.contains(&p) { PATH }
        else { BLANK }
    }

    pub fn to_pretty_string(&self, path: Option<&[Pos]>) -> String {
        let path: HashSet<Pos> = path.unwrap_or(&[]).iter().copied().collect();
        let mut s = String::with_capacity(self.height * (self.width + 1));
        for r in 0..self.height {
            for c in 0..self.width { s.push(self.glyph(Pos::new(r, c), &path)); }
            s.push('\n');
        }
        s
    }
}

/// Split on `\n`, `\r\n` or a lone `\r`. A trailing break does not open an extra row.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(|ch: char| ch == '\n' || ch == '\r') {
            Some(i) => {
                lines.push(&rest[..i]);
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
            }
            None => { lines.push(rest); break; }
        }
    }
    lines
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_pretty_string(None)) }
}
