use crate::fruit::{Fruit, FruitType};
use crate::grid::Grid;
use crate::snake::{Direction, Snake};
use crate::{Coords, GridInt};

use rand::seq::SliceRandom;
use rand::Rng;

const INITIAL_SNAKE_LENGTH: GridInt = 1;
const MAX_SPAWN_ATTEMPTS: u32 = 32;

/// What one tick did, carrying everything the render layer needs to update
/// the screen incrementally.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StepOutcome {
    Moved {
        new_head: Coords,
        vacated: Option<Coords>,
        spawned: Option<Fruit>,
    },
    Crashed,
}

pub struct GameState {
    grid: Grid,
    snake: Snake,
    fruits: Vec<Fruit>,
    score: u32,
    game_over: bool,
}

impl GameState {
    pub fn new(grid: Grid) -> Self {
        let snake = Snake::new(grid.center(), INITIAL_SNAKE_LENGTH, Direction::Right);
        let fruits = seed_fruits(&grid);
        GameState { grid, snake, fruits, score: 0, game_over: false }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruits(&self) -> &[Fruit] {
        &self.fruits
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Advances the game by one tick: applies the requested direction change
    /// (reversals are ignored), moves the snake, consumes a fruit under the
    /// new head and spawns a replacement, then checks the post-move head
    /// against the walls and the rest of the body.
    ///
    /// Returns None once the game is over; the state no longer changes.
    pub fn advance(&mut self, input: Option<Direction>) -> Option<StepOutcome> {
        if self.game_over {
            return None;
        }

        if let Some(dir) = input {
            self.snake.set_direction(dir);
        }

        let new_head = self.snake.next_head();
        let eaten = self.fruits.iter().position(|f| f.position == new_head);
        let vacated = self.snake.step(eaten.is_some());

        let spawned = match eaten {
            Some(i) => {
                self.fruits.remove(i);
                self.score += 1;
                let spawned = self.spawn_fruit(&mut rand::thread_rng());
                if let Some(fruit) = spawned {
                    self.fruits.push(fruit);
                }
                spawned
            }
            None => None,
        };

        if !self.grid.contains(new_head) || self.snake.hits_body(new_head) {
            self.game_over = true;
            return Some(StepOutcome::Crashed);
        }

        Some(StepOutcome::Moved { new_head, vacated, spawned })
    }

    /// Picks a free cell for a new fruit. Rejection sampling only runs while
    /// the board is under half occupancy and is capped; past either limit the
    /// free cells are enumerated and sampled directly, so a crowded board
    /// never degenerates into an endless retry loop. None means no free cell
    /// is left.
    fn spawn_fruit(&self, rng: &mut impl Rng) -> Option<Fruit> {
        let occupied = self.snake.len() + self.fruits.len();

        if occupied * 2 < self.grid.cell_count() {
            for _ in 0..MAX_SPAWN_ATTEMPTS {
                let pos = (
                    rng.gen_range(0..self.grid.width),
                    rng.gen_range(0..self.grid.height),
                );
                if self.is_free(pos) {
                    return Some(Fruit::new(pos, FruitType::random(rng)));
                }
            }
        }

        let free: Vec<Coords> = self.grid.cells().filter(|&pos| self.is_free(pos)).collect();
        free.choose(rng).map(|&pos| Fruit::new(pos, FruitType::random(rng)))
    }

    fn is_free(&self, pos: Coords) -> bool {
        !self.snake.body().contains(&pos) && !self.fruits.iter().any(|f| f.position == pos)
    }
}

// The fixed seed set from game start: center, then decreasing fractional
// offsets from the origin. Seed positions may coincide on tiny grids.
fn seed_fruits(grid: &Grid) -> Vec<Fruit> {
    [
        (2, FruitType::Apple),
        (3, FruitType::Cherry),
        (4, FruitType::Orange),
        (5, FruitType::Watermelon),
    ]
    .iter()
    .map(|&(div, kind)| Fruit::new((grid.width / div, grid.height / div), kind))
    .collect()
}
