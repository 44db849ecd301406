use maze_route::{render, Grid, Mode};

// In this example a route is found through the maze
// #######
// #s  # #
// # # # #
// # #   #
// #   #t#
// #######
// and drawn into it.
fn main() {
    let grid: Grid = "#######\n#s  # #\n# # # #\n# #   #\n#   #t#\n#######"
        .parse()
        .unwrap();
    println!("{}", grid);
    let path = Mode::DirectedSearch.solve(&grid);
    println!("Path:");
    for p in &path {
        println!("{:?}", p);
    }
    print!("{}", render(&grid, &path));
}
