use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Generation strategy where every cell is lit independently with the configured chance.
///
/// The same seed always produces the same board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate_with_rng(config, &mut rng)
    }
}

/// Draws the cells of a new board from `rng` in row-major order.
pub(crate) fn generate_with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Board {
    let lit_chance = config.lit_chance();
    let cells = Array2::from_shape_fn(config.size().to_nd_index(), |_| {
        rng.random_bool(lit_chance)
    });
    let board = Board { cells };

    log::debug!(
        "Generated {}x{} board with {} of {} cells lit",
        config.rows(),
        config.cols(),
        board.lit_count(),
        board.total_cells()
    );
    if board.is_solved() {
        log::warn!("Generated board is already solved, game starts won");
    }
    board
}
