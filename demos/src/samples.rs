//! Example inputs from the puzzle statements.

pub const PIPES_SIMPLE: &str = "\
.....
.S-7.
.|.|.
.L-J.
.....
";

pub const PIPES_COMPLEX: &str = "\
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";

pub const PIPES_ENCLOSING: &str = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";

pub const GALAXIES: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

pub const PLATFORM: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

pub const CONTRAPTION: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....
";

pub const CITY: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

pub const CITY_UNFAIR: &str = "\
111111111111
999999999991
999999999991
999999999991
999999999991
";

pub const DIG_PLAN: &str = "\
R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713d2)
D 2 (#d2c735)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceff1)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa2)
L 2 (#015232)
U 2 (#7a21e3)
";
