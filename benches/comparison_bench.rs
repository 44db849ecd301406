use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::point::Point;
use maze_route::grid::{Cell, Grid};
use maze_route::render::render;
use maze_route::solver::{best_first::BestFirstSolver, flood_fill::FloodFillSolver, GridSolver};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_maze(n: usize, rng: &mut StdRng) -> Grid {
    let mut cells = (0..n * n)
        .map(|_| {
            if rng.gen_bool(0.3) {
                Cell::Wall
            } else {
                Cell::Empty
            }
        })
        .collect::<Vec<Cell>>();
    cells[0] = Cell::Empty;
    cells[n * n - 1] = Cell::Empty;
    let end = n as i32 - 1;
    Grid::from_cells(n, n, cells, Point::new(0, 0), Point::new(end, end)).unwrap()
}

fn maze_bench_solver<S: GridSolver>(c: &mut Criterion, solver_name: &str, solver: S) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [32, 128] {
        let mazes = (0..16)
            .map(|_| random_maze(n, &mut rng))
            .collect::<Vec<Grid>>();
        c.bench_function(format!("{solver_name}, {n}x{n}").as_str(), |b| {
            b.iter(|| {
                for maze in &mazes {
                    black_box(solver.solve(maze));
                }
            })
        });
    }
}

fn search_bench(c: &mut Criterion) {
    maze_bench_solver(c, "Best-first", BestFirstSolver::new());
    maze_bench_solver(
        c,
        "Best-first (no components)",
        BestFirstSolver {
            use_components: false,
        },
    );
    maze_bench_solver(c, "Flood fill", FloodFillSolver);
}

fn render_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let maze = random_maze(128, &mut rng);
    let path = BestFirstSolver::new().solve(&maze);
    c.bench_function("Render 128x128", |b| {
        b.iter(|| black_box(render(&maze, &path)))
    });
}

criterion_group!(benches, search_bench, render_bench);
criterion_main!(benches);
