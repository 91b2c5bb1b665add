use image::error::{ImageError, ImageResult, LimitError, LimitErrorKind};
use image::{Rgba, RgbaImage};
use std::{collections::HashSet, path::Path};

use crate::{grid::{Maze, Pos}, solver::Search};

pub const CELL_SIZE: u32 = 50;
pub const CELL_BORDER: u32 = 2;

pub const BACKGROUND: [u8; 4] = [0, 0, 0, 255];
pub const WALL: [u8; 4] = [40, 40, 40, 255];
pub const START: [u8; 4] = [255, 0, 0, 255];
pub const GOAL: [u8; 4] = [0, 171, 28, 255];
pub const SOLUTION: [u8; 4] = [220, 235, 113, 255];
pub const EXPLORED: [u8; 4] = [212, 97, 85, 255];
pub const EMPTY: [u8; 4] = [237, 240, 252, 255];

#[derive(Clone, Copy, Debug)]
pub struct ImageOptions {
    pub show_solution: bool,
    pub show_explored: bool,
}

impl Default for ImageOptions {
    fn default() -> Self { Self { show_solution: true, show_explored: false } }
}

/// Fill colour for one cell. Solution and explored colours need a finished search;
/// `path` holds that search's solution cells.
pub fn cell_color(maze: &Maze, search: Option<&Search>, path: &HashSet<Pos>, opts: ImageOptions, p: Pos) -> [u8; 4] {
    if maze.is_wall(p) { return WALL; }
    if p == maze.start() { return START; }
    if p == maze.goal() { return GOAL; }
    match search {
        Some(_) if opts.show_solution && path.contains(&p) => SOLUTION,
        Some(s) if opts.show_explored && s.explored.contains(&p) => EXPLORED,
        _ => EMPTY,
    }
}

/// Rasterize the maze: one `CELL_SIZE` square per cell, inset by `CELL_BORDER`
/// so the black background shows as grid lines.
pub fn draw(maze: &Maze, search: Option<&Search>, opts: ImageOptions) -> ImageResult<RgbaImage> {
    let (w, h) = canvas_size(maze.height(), maze.width())?;
    let mut img = RgbaImage::from_pixel(w, h, Rgba(BACKGROUND));
    let path: HashSet<Pos> = search.map(|s| s.solution.cells.iter().copied().collect()).unwrap_or_default();

    // every cell offset is below the canvas size, which fits in u32
    for p in maze.cells() {
        let fill = Rgba(cell_color(maze, search, &path, opts, p));
        let (x0, y0) = (p.c as u32 * CELL_SIZE + CELL_BORDER, p.r as u32 * CELL_SIZE + CELL_BORDER);
        let (x1, y1) = ((p.c as u32 + 1) * CELL_SIZE - CELL_BORDER, (p.r as u32 + 1) * CELL_SIZE - CELL_BORDER);
        // both corners inclusive
        for y in y0..=y1 {
            for x in x0..=x1 { img.put_pixel(x, y, fill); }
        }
    }
    Ok(img)
}

/// Canvas width and height in pixels for a `rows` x `cols` maze.
pub fn canvas_size(rows: usize, cols: usize) -> ImageResult<(u32, u32)> {
    let px = |n: usize| u32::try_from(n).ok().and_then(|n| n.checked_mul(CELL_SIZE));
    match (px(cols), px(rows)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError))),
    }
}

pub fn save_png(maze: &Maze, search: Option<&Search>, opts: ImageOptions, path: impl AsRef<Path>) -> ImageResult<()> {
    draw(maze, search, opts)?.save_with_format(path, image::ImageFormat::Png)
}
