use std::{process::exit, thread::sleep, time::Duration};

use crate::grid::Grid;
use crate::snake::Direction::{self, *};
use crate::state::{GameState, StepOutcome};
use crate::term::TermManager;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const TICK_INTERVAL_MS: u64 = 100;

pub struct SnakeGame {
    grid: Grid,
    term: TermManager,
    state: GameState,
}

impl SnakeGame {
    pub fn new(grid: Grid) -> Self {
        SnakeGame { grid, term: TermManager::new(), state: GameState::new(grid) }
    }

    pub fn run(&mut self) {
        self.term.setup();
        self.draw_initial();

        while !self.state.is_game_over() {
            let input = self.try_get_direction();

            if let Some(StepOutcome::Moved { new_head, vacated, spawned }) = self.state.advance(input) {
                if let Some(tail) = vacated {
                    self.term.clear_cell(tail);
                }
                self.term.draw_snake_segment(new_head);
                if let Some(fruit) = spawned {
                    self.term.draw_fruit(fruit.position, fruit.kind.symbol());
                }
                self.term.flush();

                sleep(Duration::from_millis(TICK_INTERVAL_MS));
            }
        }

        self.show_game_over();

        // Keep the final screen readable until a key is pressed
        self.term.read_key_blocking();
        self.clean_exit();
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_initial(&mut self) {
        self.term.draw_border(&self.grid);

        for fruit in self.state.fruits() {
            self.term.draw_fruit(fruit.position, fruit.kind.symbol());
        }

        for &pos in self.state.snake().body() {
            self.term.draw_snake_segment(pos);
        }

        self.term.flush();
    }

    /// Non-blocking poll: drains pending key events and returns the last
    /// directional key, or None when nothing relevant was pressed.
    fn try_get_direction(&mut self) -> Option<Direction> {
        let mut dir = None;

        for key_ev in self.term.read_key_events_queue() {
            if is_ctrl_c(&key_ev) {
                self.clean_exit();
            }

            match key_ev.code {
                KeyCode::Char('w') | KeyCode::Up => dir = Some(Up),
                KeyCode::Char('a') | KeyCode::Left => dir = Some(Left),
                KeyCode::Char('s') | KeyCode::Down => dir = Some(Down),
                KeyCode::Char('d') | KeyCode::Right => dir = Some(Right),
                _ => {}
            }
        }

        dir
    }

    fn show_game_over(&mut self) {
        let (width, height) = (self.grid.width as u16, self.grid.height as u16);

        self.term.draw_text((width / 2 - 4, height / 2), "Game Over!");
        self.term.draw_text(
            (width / 2 - 5, height / 2 + 1),
            &format!("Your Score: {}", self.state.score()),
        );
        self.term.flush();
    }

    fn clean_exit(&mut self) {
        self.term.restore();
        exit(0);
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
