use crate::grid::Grid;
use crate::Coords;
use std::{io::{stdout, Stdout, Write}, time::Duration};

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

const SNAKE_SEGMENT_CHAR: char = '*';
const CORNER_CHAR: char = '+';
const HORIZONTAL_CHAR: char = '-';
const VERTICAL_CHAR: char = '|';

/// Write-only sink over the terminal. Game logic hands it zero-based interior
/// coordinates; the +1 shift for the border is applied here and nowhere else.
pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        self.set_raw_mode(true);
        self.set_cursor_visibility(false);
        self.clear();
    }

    pub fn restore(&mut self) {
        self.set_raw_mode(false);
        self.set_cursor_visibility(true);
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    pub fn read_key_blocking(&self) -> KeyEvent {
        loop {
            if let Event::Key(ev) = read().unwrap() {
                return ev;
            }
        }
    }

    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    pub fn draw_border(&mut self, grid: &Grid) {
        let width = grid.width as u16;
        let height = grid.height as u16;

        for x in 0..width + 2 {
            let ch = if x == 0 || x == width + 1 { CORNER_CHAR } else { HORIZONTAL_CHAR };
            self.print_at((x, 0), ch);
            self.print_at((x, height + 1), ch);
        }

        for y in 1..height + 1 {
            self.print_at((0, y), VERTICAL_CHAR);
            self.print_at((width + 1, y), VERTICAL_CHAR);
        }

        self.flush();
    }

    pub fn draw_snake_segment(&mut self, pos: Coords) {
        self.print_cell(pos, SNAKE_SEGMENT_CHAR);
    }

    pub fn clear_cell(&mut self, pos: Coords) {
        self.print_cell(pos, ' ');
    }

    pub fn draw_fruit(&mut self, pos: Coords, symbol: char) {
        self.print_cell(pos, symbol);
    }

    pub fn draw_text(&mut self, pos: (u16, u16), text: &str) {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(text))
            .expect("Error printing text.");
    }

    pub fn clear(&mut self) {
        execute!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    ///////////////////////////////////////////////////////////////////////////

    // Interior coordinates sit inside the one-cell border
    fn print_cell(&mut self, pos: Coords, ch: char) {
        self.print_at((pos.0 as u16 + 1, pos.1 as u16 + 1), ch);
    }

    fn print_at(&mut self, pos: (u16, u16), ch: char) {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch)).unwrap();
    }

    fn set_raw_mode(&self, option: bool) {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.expect("Error setting raw mode.");
    }

    fn set_cursor_visibility(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.expect("Error setting cursor visibility.");
    }
}
