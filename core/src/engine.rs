use serde::{Deserialize, Deserializer, Serialize};

use crate::*;

/// Playing while any light is on, won once every light is off.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }

    fn of(board: &Board) -> Self {
        if board.is_solved() {
            Self::Won
        } else {
            Self::Playing
        }
    }
}

/// One play session over a board.
///
/// Unlike the bare [`Board`], the engine stops accepting flips once every light is off.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayEngine {
    board: Board,
    moves: u32,
    state: EngineState,
}

#[derive(Deserialize)]
struct EngineRepr {
    board: Board,
    moves: u32,
}

impl<'de> Deserialize<'de> for PlayEngine {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        // the stored state is ignored, it always follows from the board
        let EngineRepr { board, moves } = EngineRepr::deserialize(deserializer)?;
        Ok(Self {
            moves,
            ..Self::new(board)
        })
    }
}

impl PlayEngine {
    pub fn new(board: Board) -> Self {
        let state = EngineState::of(&board);
        Self {
            board,
            moves: 0,
            state,
        }
    }

    pub fn from_config(config: GameConfig, seed: u64) -> Self {
        Self::new(RandomBoardGenerator::new(seed).generate(config))
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_lit(&self, coords: Coord2) -> Result<bool> {
        self.board.is_lit(coords)
    }

    pub fn can_interact_at(&self, coords: Coord2) -> bool {
        !self.state.is_finished() && self.board.validate_coords(coords).is_ok()
    }

    /// Flips `coords` and its orthogonal neighbors, reporting whether that solved the board.
    ///
    /// Fails with [`GameError::InvalidCoords`] off the board and [`GameError::AlreadyEnded`] once won.
    pub fn flip(&mut self, coords: Coord2) -> Result<FlipOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        self.board.flip_around_in_place(coords)?;
        self.moves = self.moves.saturating_add(1);
        log::trace!("Flipped around {:?}, {} lit", coords, self.board.lit_count());

        self.state = EngineState::of(&self.board);
        Ok(if self.state.is_finished() {
            log::debug!("Board solved after {} moves", self.moves);
            FlipOutcome::Won
        } else {
            FlipOutcome::Flipped
        })
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
