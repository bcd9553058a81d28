//! A link automaton on the knight-move graph of a square board.
//!
//! Every pair of cells a knight's move apart is joined by a [`Link`]. Each
//! link carries an integer counter and a binary output; on every step the
//! counter moves by `4` minus the number of active neighbouring links, and
//! the output switches on above 3, off below 0, and holds in between. All
//! links step together from the previous step's outputs.
//!
//! After each step a driver asks whether the board has settled
//! ([`Board::is_stable`]) or fallen into a cycle shorter than
//! [`PATTERN_LOOKBACK`] steps ([`Board::is_not_convergent`]), and re-seeds it
//! with [`Board::reset`] when it has. [`Runner`] packages that loop.
//!
//! # Example
//!
//! ```
//! use knights_automata::{RunConfig, StepOutcome};
//!
//! let mut runner = RunConfig::new(6).with_seed(12345).apply().unwrap();
//! for _ in 0..100 {
//!     match runner.tick() {
//!         StepOutcome::Stable { steps } => println!("settled after {steps} steps"),
//!         StepOutcome::PatternDetected { periods, .. } => println!("cycle {periods:?}"),
//!         StepOutcome::Running | StepOutcome::Paused => {}
//!     }
//! }
//!
//! let snapshot = runner.board().snapshot();
//! assert_eq!(snapshot.links.len(), 80);
//! ```

mod board;
mod cell;
mod config;
mod error;
mod history;
mod link;
mod moves;
pub mod pattern;
mod runner;
mod snapshot;

pub use board::{Board, NeighbourRule};
pub use cell::{Cell, CellId, Coord};
pub use config::{BoardConfig, RunConfig};
pub use error::BoardError;
pub use history::{OutputHistory, PATTERN_LOOKBACK};
pub use link::{Link, LinkId};
pub use moves::{CustomMoves, Knight, MoveSet};
pub use pattern::{common_periods, possible_patterns};
pub use runner::{RunOutcome, RunReport, Runner, StepOutcome};
pub use snapshot::{BoardSnapshot, LinkSnapshot};
