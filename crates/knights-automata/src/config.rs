//! Configuration for building boards and runs.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, NeighbourRule};
use crate::error::BoardError;
use crate::moves::{CustomMoves, Knight};
use crate::runner::Runner;

/// Configuration for creating a board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    /// Board size N (the board has N×N cells).
    pub size: usize,
    /// Moves that link cells.
    pub moves: CustomMoves,
    /// Which links count towards a neighbour sum.
    pub rule: NeighbourRule,
}

impl BoardConfig {
    /// Creates a knight-move configuration of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            moves: Knight.into(),
            rule: NeighbourRule::default(),
        }
    }

    /// Replaces the move set.
    pub fn with_moves(mut self, moves: impl IntoIterator<Item = (i32, i32)>) -> Self {
        self.moves = CustomMoves::new(moves);
        self
    }

    /// Replaces the neighbour rule.
    pub fn with_rule(mut self, rule: NeighbourRule) -> Self {
        self.rule = rule;
        self
    }

    /// Creates and links the configured board.
    pub fn apply(&self, rng: &mut impl Rng) -> Result<Board, BoardError> {
        let mut board = Board::with_rule(self.size, self.rule)?;
        board.init_with(&self.moves, rng)?;
        Ok(board)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(6)
    }
}

/// Configuration for a headless run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunConfig {
    /// Board to run on.
    pub board: BoardConfig,
    /// Seed for every random draw (None = seed from the OS).
    pub seed: Option<u64>,
    /// Re-seed and keep running when the board settles, instead of pausing.
    pub reset_on_stable: bool,
}

impl RunConfig {
    /// Creates a knight-move run of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            board: BoardConfig::new(size),
            seed: None,
            reset_on_stable: false,
        }
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Creates the configured runner.
    pub fn apply(&self) -> Result<Runner, BoardError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let board = self.board.apply(&mut rng)?;

        let mut runner = Runner::new(board, rng);
        runner.set_reset_on_stable(self.reset_on_stable);
        Ok(runner)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(6)
    }
}
