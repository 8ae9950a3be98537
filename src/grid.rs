use crate::{Coords, GridInt};

/// The bounded playing field. Coordinates are zero-based interior positions;
/// the border drawn around them is purely a rendering concern.
#[derive(Debug, Copy, Clone)]
pub struct Grid {
    pub width: GridInt,
    pub height: GridInt,
}

impl Grid {
    pub fn new(width: GridInt, height: GridInt) -> Self {
        Grid { width, height }
    }

    pub fn contains(&self, (x, y): Coords) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn cells(&self) -> impl Iterator<Item = Coords> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}
