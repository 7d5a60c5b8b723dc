use std::{env, fs, process};

use sudoku_backtrack::Grid;

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: sudoku-backtrack <puzzle-file>");
            process::exit(2);
        }
    };
    let input = match fs::read_to_string(&path) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{}: {}", path, err);
            process::exit(2);
        }
    };
    let mut grid = match Grid::from_str_line(&input) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{}: {}", path, err);
            process::exit(2);
        }
    };
    match grid.solve() {
        Ok(()) => println!("{}", grid.display_block()),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
