use mazer::{logger::DevLogger, render::{self, ImageOptions}, Maze, Pos, Solver, Strategy};
use pretty_assertions::assert_eq;
use std::{fs, time::{Duration, Instant}};

const SMALL: &str = "A  \n # \n  B";

fn pixel(img: &image::RgbaImage, x: u32, y: u32) -> [u8; 4] { img.get_pixel(x, y).0 }

#[test]
fn text_shows_solution_path() {
    let m = Maze::parse(SMALL).unwrap();
    let s = Solver::new(Strategy::Bfs).solve(&m).unwrap();
    assert_eq!(m.to_pretty_string(Some(&s.solution.cells)), "A  \n.# \n..B\n");
    assert_eq!(m.to_pretty_string(None), "A  \n # \n  B\n");
}

/// Open even rows joined by a single gap that alternates between the right and left edge.
fn serpentine(n: usize) -> Maze {
    let rows: Vec<Vec<bool>> = (0..n).map(|r| match r % 4 {
        1 => (0..n).map(|c| c != n - 1).collect(),
        3 => (0..n).map(|c| c != 0).collect(),
        _ => vec![false; n],
    }).collect();
    Maze::from_walls(&rows, Pos::new(0, 0), Pos::new(n - 1, n - 1)).unwrap()
}

#[test]
fn long_paths_render_quickly() {
    let m = serpentine(301);
    let s = Solver::new(Strategy::Bfs).solve(&m).unwrap();
    assert!(s.solution.len() > 45_000);

    let started = Instant::now();
    let text = m.to_pretty_string(Some(&s.solution.cells));
    assert!(started.elapsed() < Duration::from_secs(10), "text took {:?}", started.elapsed());
    // goal prints as `B`, so one path cell fewer than moves
    assert_eq!(text.matches('.').count(), s.solution.len() - 1);

    let m = serpentine(61);
    let s = Solver::new(Strategy::Bfs).solve(&m).unwrap();
    let img = render::draw(&m, Some(&s), ImageOptions::default()).unwrap();
    assert_eq!(img.dimensions(), (61 * 50, 61 * 50));
    assert_eq!(pixel(&img, 25, 75), render::WALL);
    assert_eq!(pixel(&img, 61 * 50 - 25, 75), render::SOLUTION);
}

#[test]
fn canvas_size_rejects_overflow() {
    assert_eq!(render::canvas_size(3, 4).unwrap(), (200, 150));
    assert!(render::canvas_size(1, 90_000_000).is_err());
    assert!(render::canvas_size(usize::MAX, 1).is_err());
    assert!(render::canvas_size(85_899_345, 1).is_ok());
}

#[test]
fn image_geometry_and_palette() {
    let m = Maze::parse(SMALL).unwrap();
    let s = Solver::new(Strategy::Bfs).solve(&m).unwrap();
    let img = render::draw(&m, Some(&s), ImageOptions::default()).unwrap();
    assert_eq!(img.dimensions(), (150, 150));

    // border around each cell stays black
    assert_eq!(pixel(&img, 0, 0), render::BACKGROUND);
    assert_eq!(pixel(&img, 49, 49), render::BACKGROUND);
    assert_eq!(pixel(&img, 2, 2), render::START);
    assert_eq!(pixel(&img, 48, 48), render::START);

    assert_eq!(pixel(&img, 75, 75), render::WALL);
    assert_eq!(pixel(&img, 125, 125), render::GOAL);
    assert_eq!(pixel(&img, 25, 75), render::SOLUTION);
    // explored but off the path
    assert_eq!(pixel(&img, 75, 25), render::EMPTY);
}

#[test]
fn image_toggles() {
    let m = Maze::parse(SMALL).unwrap();
    let s = Solver::new(Strategy::Bfs).solve(&m).unwrap();

    let both = render::draw(&m, Some(&s), ImageOptions { show_solution: true, show_explored: true }).unwrap();
    assert_eq!(pixel(&both, 25, 75), render::SOLUTION);
    assert_eq!(pixel(&both, 75, 25), render::EXPLORED);

    let explored_only = render::draw(&m, Some(&s), ImageOptions { show_solution: false, show_explored: true }).unwrap();
    assert_eq!(pixel(&explored_only, 25, 75), render::EXPLORED);

    let unsolved = render::draw(&m, None, ImageOptions { show_solution: true, show_explored: true }).unwrap();
    assert_eq!(pixel(&unsolved, 25, 75), render::EMPTY);
    assert_eq!(pixel(&unsolved, 25, 25), render::START);
}

#[test]
fn png_is_written() {
    let m = Maze::parse(SMALL).unwrap();
    let s = Solver::new(Strategy::Dfs).solve(&m).unwrap();
    let path = std::env::temp_dir().join(format!("mazer_render_{}.png", std::process::id()));
    render::save_png(&m, Some(&s), ImageOptions::default(), &path).unwrap();
    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (150, 150));
    assert_eq!(pixel(&back, 125, 25), render::SOLUTION);
    fs::remove_file(&path).ok();
}

#[test]
fn devlogs_are_numbered_and_capped() {
    let m = Maze::parse(SMALL).unwrap();
    let s = Solver::new(Strategy::Bfs).solve(&m).unwrap();
    let dir = std::env::temp_dir().join(format!("mazer_devlogs_{}", std::process::id()));
    let mut logger = DevLogger::new(&dir, false, false, 2).unwrap();

    let first = logger.log_maze(&m).unwrap().unwrap();
    let second = logger.log_search(&m, &s).unwrap().unwrap();
    assert_eq!(logger.log_no_solution(&m, Strategy::Bfs).unwrap(), None);
    assert_eq!(logger.written(), 2);

    assert!(first.ends_with("devlog(1).txt"));
    let text = fs::read_to_string(&second).unwrap();
    assert!(text.contains("BFS reached the goal"));
    assert!(text.contains("States explored: 8"));
    assert!(text.contains("Actions: down, down, right, right"));
    fs::remove_dir_all(logger.dir()).ok();
}
