//! Shared model for the `ornaments` demo binary.
//!
//! Demonstrates: character-map parsing, A* over a grid and over the same
//! grid flattened into a weighted graph, multi-source search ordered by a
//! lower bound, and parallel queries over a shared maze.

use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use ornaments_collections::PriorityQueue;
use ornaments_core::{Grid, Point};
use ornaments_paths::{
    FlatManhattan, Heuristic, Manhattan, PathError, WeightedGraph, Zero, find, manhattan,
};
use rand::{Rng, RngExt, SeedableRng};
use rayon::prelude::*;

// ---------------------------------------------------------------------------
// Hill climbing
// ---------------------------------------------------------------------------

/// Elevation grid with a start and a goal marker.
///
/// Letters `a` to `z` are elevations `0` to `25`. `S` marks the start at
/// elevation `a` and `E` the goal at elevation `z`.
#[derive(Debug, Clone)]
pub struct Heightmap {
    grid: Grid<u8>,
    start: Point,
    goal: Point,
}

/// A step may climb at most one level; descending is always allowed.
#[inline]
pub fn can_climb(from: u8, to: u8) -> bool {
    to <= from + 1
}

impl Heightmap {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let chars = Grid::parse(text, |c| {
            (c.is_ascii_lowercase() || c == 'S' || c == 'E').then_some(c)
        })?;
        let start = chars.find(|&c| c == 'S').context("heightmap has no start marker 'S'")?;
        let goal = chars.find(|&c| c == 'E').context("heightmap has no goal marker 'E'")?;
        let grid = chars.map(|&c| match c {
            'S' => 0,
            'E' => b'z' - b'a',
            c => c as u8 - b'a',
        });
        Ok(Self { grid, start, goal })
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    fn climbable(&self, from: Point, to: Point) -> bool {
        match (self.grid.get(from), self.grid.get(to)) {
            (Some(&a), Some(&b)) => can_climb(a, b),
            _ => false,
        }
    }

    /// Fewest steps from `from` to the goal, searching the grid directly.
    pub fn steps_on_grid(&self, from: Point) -> Result<usize, PathError<Point>> {
        let path = find(
            &self.grid,
            &Manhattan,
            |s| self.climbable(s.from, s.to),
            from,
            self.goal,
        )?;
        Ok(path.len())
    }

    /// Fewest steps from `from` to the goal over the grid flattened into a
    /// weighted graph.
    pub fn steps_on_graph(&self, from: Point) -> anyhow::Result<usize> {
        let graph = WeightedGraph::from_grid(&self.grid, |&a, &b| can_climb(a, b).then_some(1u32));
        let (Some(start), Some(goal)) = (self.grid.index_of(from), self.grid.index_of(self.goal))
        else {
            bail!("{from} is outside the heightmap");
        };
        let path = find(&graph, &FlatManhattan::new(self.grid.width()), |_| true, start, goal)?;
        Ok(path.len())
    }

    /// Fewest steps from the start marker, cross-checked between both
    /// domain representations.
    pub fn climb(&self) -> anyhow::Result<usize> {
        let on_grid = self.steps_on_grid(self.start)?;
        let on_graph = self.steps_on_graph(self.start)?;
        if on_grid != on_graph {
            bail!("grid search found {on_grid} steps but graph search found {on_graph}");
        }
        Ok(on_grid)
    }

    /// The lowest cell with the shortest climb to the goal.
    ///
    /// Candidates are tried nearest first by Manhattan distance, which is a
    /// lower bound on their step count, so the scan stops as soon as no
    /// remaining candidate can beat the best climb found.
    pub fn best_trailhead(&self) -> Option<(Point, usize)> {
        let mut candidates: PriorityQueue<Point, u64> = self
            .grid
            .iter()
            .filter(|(_, h)| **h == 0)
            .map(|(p, _)| (p, manhattan(p, self.goal)))
            .collect();
        let mut best: Option<(Point, usize)> = None;

        while let Some((&p, &bound)) = candidates.peek() {
            if best.is_some_and(|(_, steps)| bound >= steps as u64) {
                log::debug!("trailhead scan pruned {} candidates", candidates.len());
                break;
            }
            candidates.pop();
            match self.steps_on_grid(p) {
                Ok(steps) if best.is_none_or(|(_, b)| steps < b) => best = Some((p, steps)),
                Ok(_) => {}
                Err(e) => log::trace!("{p} cannot reach the goal: {e}"),
            }
        }
        best
    }
}

// ---------------------------------------------------------------------------
// Benchmark
// ---------------------------------------------------------------------------

/// Options for a benchmark run.
#[derive(Debug, Clone, Copy)]
pub struct BenchConfig {
    pub size: usize,
    pub seed: u64,
    pub queries: usize,
    /// Percentage of cells that are walls.
    pub density: u32,
}

/// Square maze of walls (`true`) placed uniformly at random.
pub fn random_maze(size: usize, density: u32, rng: &mut impl Rng) -> Grid<bool> {
    let mut grid = Grid::new(size, size, false);
    for p in grid.bounds() {
        grid.set(p, rng.random_range(0..100u32) < density);
    }
    grid
}

/// Random start/goal pairs on open cells.
pub fn random_queries(grid: &Grid<bool>, n: usize, rng: &mut impl Rng) -> Vec<(Point, Point)> {
    let open: Vec<Point> = grid.iter().filter(|(_, wall)| !**wall).map(|(p, _)| p).collect();
    if open.is_empty() {
        return Vec::new();
    }
    (0..n)
        .map(|_| {
            (
                open[rng.random_range(0..open.len())],
                open[rng.random_range(0..open.len())],
            )
        })
        .collect()
}

/// Aggregate results of solving a batch of queries with one heuristic.
#[derive(Debug, Clone, Default)]
pub struct BenchStats {
    pub found: usize,
    pub unreachable: usize,
    pub expanded: usize,
    pub elapsed: Duration,
    /// Most expensive found paths as `(query index, cost)`, costliest first.
    pub hardest: Vec<(usize, u32)>,
}

/// Solve every query in parallel over the shared maze.
pub fn run_queries<H>(grid: &Grid<bool>, queries: &[(Point, Point)], heuristic: &H) -> BenchStats
where
    H: Heuristic<Point, u32> + Sync,
{
    let started = Instant::now();
    let results: Vec<_> = queries
        .par_iter()
        .map(|&(start, goal)| {
            find(grid, heuristic, |s| grid.get(s.to) == Some(&false), start, goal)
                .map(|path| (path.cost(), path.expanded()))
        })
        .collect();
    let elapsed = started.elapsed();

    let mut stats = BenchStats {
        elapsed,
        ..BenchStats::default()
    };
    let mut by_cost = PriorityQueue::new();
    for (i, result) in results.into_iter().enumerate() {
        match result {
            Ok((cost, expanded)) => {
                stats.found += 1;
                stats.expanded += expanded;
                by_cost.push((i, cost), -i64::from(cost));
            }
            Err(e) if e.is_not_found() => stats.unreachable += 1,
            Err(e) => log::warn!("query {i} failed: {e}"),
        }
    }
    stats.hardest = std::iter::from_fn(|| by_cost.pop()).take(3).collect();
    stats
}

/// Run the same queries with Manhattan and with the zero heuristic.
pub fn bench(config: BenchConfig) -> (BenchStats, BenchStats) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(config.seed);
    let grid = random_maze(config.size, config.density, &mut rng);
    let queries = random_queries(&grid, config.queries, &mut rng);
    log::debug!(
        "bench: {}x{} maze, {} queries",
        grid.width(),
        grid.height(),
        queries.len()
    );
    let astar = run_queries(&grid, &queries, &Manhattan);
    let dijkstra = run_queries(&grid, &queries, &Zero);
    (astar, dijkstra)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HILL: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi
";

    #[test]
    fn climb_agrees_on_both_domains() {
        let map = Heightmap::parse(HILL).unwrap();
        assert_eq!(map.start(), Point::new(0, 0));
        assert_eq!(map.goal(), Point::new(5, 2));
        assert_eq!(map.climb().unwrap(), 31);
    }

    #[test]
    fn best_trailhead_beats_the_start() {
        let map = Heightmap::parse(HILL).unwrap();
        let (p, steps) = map.best_trailhead().unwrap();
        assert_eq!(steps, 29);
        assert_eq!(map.steps_on_grid(p).unwrap(), 29);
    }

    #[test]
    fn cliffs_block_the_climb() {
        let map = Heightmap::parse("SaE").unwrap();
        assert!(map.steps_on_grid(map.start()).unwrap_err().is_not_found());
        assert!(map.climb().is_err());
        assert_eq!(map.best_trailhead(), None);
    }

    #[test]
    fn parse_requires_markers() {
        assert!(Heightmap::parse("abc\nabE").is_err());
        assert!(Heightmap::parse("Sbc\nabc").is_err());
        assert!(Heightmap::parse("S#E").is_err());
    }

    #[test]
    fn climb_rule() {
        assert!(can_climb(0, 1));
        assert!(can_climb(5, 0));
        assert!(!can_climb(0, 2));
    }

    #[test]
    fn maze_is_reproducible() {
        let a = random_maze(16, 30, &mut rand::rngs::StdRng::seed_from_u64(7));
        let b = random_maze(16, 30, &mut rand::rngs::StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(random_maze(8, 0, &mut rand::rngs::StdRng::seed_from_u64(1))
            .iter()
            .all(|(_, wall)| !*wall));
    }

    #[test]
    fn queries_land_on_open_cells() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let grid = random_maze(12, 40, &mut rng);
        let queries = random_queries(&grid, 50, &mut rng);
        assert_eq!(queries.len(), 50);
        assert!(queries.iter().all(|&(s, g)| {
            grid.get(s) == Some(&false) && grid.get(g) == Some(&false)
        }));
    }

    #[test]
    fn heuristic_saves_work_on_the_same_answers() {
        let (astar, dijkstra) = bench(BenchConfig {
            size: 24,
            seed: 3,
            queries: 40,
            density: 25,
        });
        assert_eq!(astar.found + astar.unreachable, 40);
        assert_eq!(astar.found, dijkstra.found);
        assert_eq!(astar.hardest, dijkstra.hardest);
        assert!(astar.expanded <= dijkstra.expanded);
        assert!(astar.hardest.len() <= 3);
        assert!(astar.hardest.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn fully_walled_maze_has_no_queries() {
        let grid = Grid::new(4, 4, true);
        let queries = random_queries(&grid, 10, &mut rand::rngs::StdRng::seed_from_u64(0));
        assert!(queries.is_empty());
        let stats = run_queries(&grid, &queries, &Manhattan);
        assert_eq!(stats.found, 0);
    }
}
