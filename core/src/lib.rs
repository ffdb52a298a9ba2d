#![no_std]

extern crate alloc;

use alloc::string::ToString;
use core::ops::Index;
use ndarray::{Array2, ArrayView1};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod text;
mod types;

#[derive(Deserialize)]
#[serde(default)]
struct ConfigRepr {
    size: Coord2,
    lit_chance: f64,
}

impl Default for ConfigRepr {
    fn default() -> Self {
        let GameConfig { size, lit_chance } = GameConfig::default();
        Self { size, lit_chance }
    }
}

/// Parameters of a new game, fixed once the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct GameConfig {
    size: Coord2,
    lit_chance: f64,
}

impl GameConfig {
    /// Validated config, failing on an empty board or a lit chance outside `0.0..=1.0`.
    pub fn new(size: Coord2, lit_chance: f64) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        // also rejects NaN
        if !(0.0..=1.0).contains(&lit_chance) {
            return Err(GameError::InvalidProbability(lit_chance));
        }
        Ok(Self { size, lit_chance })
    }

    /// Reads a config such as `{"size": [5, 5], "lit_chance": 0.25}`, omitted fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let repr: ConfigRepr = serde_json::from_str(json)
            .map_err(|err| GameError::MalformedConfig(err.to_string()))?;
        Self::new(repr.size, repr.lit_chance)
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn lit_chance(&self) -> f64 {
        self.lit_chance
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: (5, 5),
            lit_chance: 0.25,
        }
    }
}

impl<'de> Deserialize<'de> for GameConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let repr = ConfigRepr::deserialize(deserializer)?;
        Self::new(repr.size, repr.lit_chance).map_err(serde::de::Error::custom)
    }
}

/// Rectangular grid of lights, `true` meaning lit.
///
/// Boards are values: [`Board::flip_around`] hands back the next board and leaves the current one untouched, so
/// callers replace their copy with the returned one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct Board {
    cells: Array2<bool>,
}

impl Board {
    /// Board with every light off.
    pub fn unlit(size: Coord2) -> Result<Self> {
        Self::filled(size, false)
    }

    pub fn filled(size: Coord2, lit: bool) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        Ok(Self {
            cells: Array2::from_elem(size.to_nd_index(), lit),
        })
    }

    pub fn from_cells(cells: Array2<bool>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidSize);
        }
        if rows > Coord::MAX.into() || cols > Coord::MAX.into() {
            return Err(GameError::InvalidSize);
        }
        Ok(Self { cells })
    }

    /// Builds a board from nested rows, every row must have the same length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(GameError::InvalidSize);
        };
        let cols = first.as_ref().len();
        if rows.iter().any(|row| row.as_ref().len() != cols) {
            return Err(GameError::InvalidBoardShape);
        }
        Self::from_cells(Array2::from_shape_fn((rows.len(), cols), |(row, col)| {
            rows[row].as_ref()[col]
        }))
    }

    /// Generates a board drawing every cell from `rng`.
    pub fn random<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        generate_with_rng(config, rng)
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn lit_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|&&lit| lit)
            .count()
            .try_into()
            .unwrap()
    }

    pub fn is_lit(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// True when every light is off.
    pub fn is_solved(&self) -> bool {
        !self.cells.iter().any(|&lit| lit)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Cells toggled by a flip at `coords`: the center first, then its in-bounds orthogonal neighbors.
    pub fn flip_targets(&self, coords: Coord2) -> Result<impl Iterator<Item = Coord2> + use<>> {
        let coords = self.validate_coords(coords)?;
        Ok(core::iter::once(coords).chain(self.cells.iter_neighbors(coords)))
    }

    /// Returns the board after flipping `coords` and its orthogonal neighbors.
    ///
    /// Neighbors falling outside the board are skipped, an out-of-bounds center is rejected with
    /// [`GameError::InvalidCoords`].
    pub fn flip_around(&self, coords: Coord2) -> Result<Self> {
        let mut next = self.clone();
        next.flip_around_in_place(coords)?;
        Ok(next)
    }

    pub fn flip_around_in_place(&mut self, coords: Coord2) -> Result<()> {
        for pos in self.flip_targets(coords)? {
            let cell = &mut self.cells[pos.to_nd_index()];
            *cell = !*cell;
        }
        Ok(())
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = ArrayView1<'_, bool>> {
        self.cells.rows().into_iter()
    }

    pub fn cells(&self) -> &Array2<bool> {
        &self.cells
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl TryFrom<Array2<bool>> for Board {
    type Error = GameError;

    fn try_from(cells: Array2<bool>) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Board> for Array2<bool> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlipOutcome {
    Flipped,
    Won,
}

impl FlipOutcome {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}
