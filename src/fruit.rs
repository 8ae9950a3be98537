use crate::Coords;

use rand::seq::SliceRandom;
use rand::Rng;

use FruitType::*;

/// Purely cosmetic; every type behaves identically when eaten.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FruitType {
    Apple,
    Cherry,
    Orange,
    Watermelon,
}

impl FruitType {
    pub const ALL: [FruitType; 4] = [Apple, Cherry, Orange, Watermelon];

    pub fn symbol(self) -> char {
        match self {
            Apple => 'A',
            Cherry => 'C',
            Orange => 'O',
            Watermelon => 'W',
        }
    }

    pub fn random(rng: &mut impl Rng) -> FruitType {
        *Self::ALL.choose(rng).unwrap()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fruit {
    pub position: Coords,
    pub kind: FruitType,
}

impl Fruit {
    pub fn new(position: Coords, kind: FruitType) -> Self {
        Fruit { position, kind }
    }
}
