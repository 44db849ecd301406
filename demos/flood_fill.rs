use maze_route::render::render;
use maze_route::solver::flood_fill::FloodFillSolver;
use maze_route::Grid;

// In this example the target is cut off from the start, so the flood fill
// explores the whole region around the start without finding it.
// s  #
//    #
// ####
//     t
fn main() {
    let grid: Grid = "s  #\n   #\n####\n    t".parse().unwrap();
    let exploration = FloodFillSolver.explore(&grid);
    println!(
        "Closed {} cells, target reached: {}",
        exploration.closed.len(),
        exploration.reached_target
    );
    print!("{}", render(&grid, &exploration.closed));
}
