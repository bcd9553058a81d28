//! Headless driver loop.
//!
//! [`Runner`] is the control surface a front end talks to: it owns the board
//! and its random source, steps while running, pauses when the board settles
//! and re-seeds whenever a repeating pattern shows up.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use tracing::info;

use crate::board::Board;

/// What a single [`Runner::tick`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The run is paused; nothing happened.
    Paused,
    /// The board advanced and is still changing.
    Running,
    /// No link changed on this step.
    Stable {
        /// Steps since the last (re)start.
        steps: u64,
    },
    /// The board repeated itself and was re-seeded.
    PatternDetected {
        /// Steps it took to fall into the pattern.
        steps: u64,
        /// Periods shared by every link.
        periods: BTreeSet<usize>,
    },
}

/// How [`Runner::run_until_settled`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The board settled after this many steps since its last re-seed.
    Stable {
        /// Steps since the last re-seed.
        steps: u64,
    },
    /// The step limit was reached first.
    Exhausted,
}

/// Summary of [`Runner::run_until_settled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Total steps taken.
    pub total_steps: u64,
    /// Patterns detected (each one re-seeded the board).
    pub patterns: u64,
    /// How the run ended.
    pub outcome: RunOutcome,
}

/// Drives a board one tick at a time.
#[derive(Debug, Clone)]
pub struct Runner {
    board: Board,
    rng: StdRng,
    running: bool,
    steps: u64,
    resets: u64,
    reset_on_stable: bool,
}

impl Runner {
    /// Creates a running driver for an initialised board.
    pub fn new(board: Board, rng: StdRng) -> Self {
        Self {
            board,
            rng,
            running: true,
            steps: 0,
            resets: 0,
            reset_on_stable: false,
        }
    }

    /// Sets whether a settled board is re-seeded instead of pausing the run.
    pub fn set_reset_on_stable(&mut self, reset: bool) {
        self.reset_on_stable = reset;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board, mutably.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Returns true if [`tick`](Self::tick) advances the board.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns steps taken since the last (re)start or re-seed.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns how many times the board has been re-seeded.
    pub fn resets(&self) -> u64 {
        self.resets
    }

    /// Advances one step if running and reacts to the result.
    ///
    /// A detected pattern wins over stability: the board is re-seeded and
    /// the run continues. A settled board pauses the run unless
    /// reset-on-stable is set.
    pub fn tick(&mut self) -> StepOutcome {
        if !self.running {
            return StepOutcome::Paused;
        }

        self.steps += 1;
        self.board.update();

        let periods = self.board.pattern_offsets();
        if !periods.is_empty() {
            let steps = self.steps;
            info!(steps, ?periods, "pattern detected");
            self.reseed();
            return StepOutcome::PatternDetected { steps, periods };
        }

        if self.board.is_stable() {
            let steps = self.steps;
            info!(steps, "board settled");
            if self.reset_on_stable {
                self.reseed();
            } else {
                self.running = false;
            }
            return StepOutcome::Stable { steps };
        }

        StepOutcome::Running
    }

    /// Pauses the run and advances exactly one step.
    pub fn step_once(&mut self) {
        self.running = false;
        self.steps += 1;
        self.board.update();
    }

    /// Pauses or resumes the run.
    pub fn toggle_run(&mut self) {
        self.running = !self.running;
    }

    /// Re-seeds the board and resumes the run.
    pub fn restart(&mut self) {
        self.reseed();
        self.running = true;
    }

    /// Ticks until the board settles or `max_steps` steps have been taken.
    pub fn run_until_settled(&mut self, max_steps: u64) -> RunReport {
        self.running = true;
        let mut patterns = 0;

        for taken in 1..=max_steps {
            match self.tick() {
                StepOutcome::Stable { steps } => {
                    return RunReport {
                        total_steps: taken,
                        patterns,
                        outcome: RunOutcome::Stable { steps },
                    };
                }
                StepOutcome::PatternDetected { .. } => patterns += 1,
                StepOutcome::Running | StepOutcome::Paused => {}
            }
        }

        RunReport {
            total_steps: max_steps,
            patterns,
            outcome: RunOutcome::Exhausted,
        }
    }

    fn reseed(&mut self) {
        self.board.reset(&mut self.rng);
        self.steps = 0;
        self.resets += 1;
    }
}
