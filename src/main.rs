mod fruit;
mod game;
mod grid;
mod snake;
mod state;
mod term;

// Signed so that a candidate head one step outside the grid is representable
// before the bounds check rejects it.
pub type GridInt = i16;
pub type Coords = (GridInt, GridInt);

const GRID_WIDTH: GridInt = 40;
const GRID_HEIGHT: GridInt = 20;

fn main() {
    let mut game = game::SnakeGame::new(grid::Grid::new(GRID_WIDTH, GRID_HEIGHT));
    game.run();
}
