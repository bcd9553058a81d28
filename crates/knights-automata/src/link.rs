//! Links: the automaton units living on board edges.

use rand::Rng;

use crate::cell::CellId;
use crate::history::OutputHistory;

/// Index of a link in its board.
pub type LinkId = usize;

/// Constant drive added to the state every step.
const DRIVE: i32 = 4;

/// Output switches on above this state.
const UPPER_THRESHOLD: i32 = 3;

/// Output switches off below this state.
const LOWER_THRESHOLD: i32 = 0;

/// An edge between two cells carrying a thresholded counter.
///
/// Every step the counter moves by `4 - s`, where `s` is the number of
/// active neighbouring links on the previous step. The binary output turns
/// on when the counter exceeds 3, off when it drops below 0, and holds its
/// previous value in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    cells: [CellId; 2],
    state: i32,
    previous_state: i32,
    output: OutputHistory,
}

impl Link {
    /// Creates a link between two cells with a random initial output.
    pub fn new(a: CellId, b: CellId, rng: &mut impl Rng) -> Self {
        Self::with_output(a, b, rng.random_range(0..=1))
    }

    /// Creates a link between two cells with the given initial output.
    pub fn with_output(a: CellId, b: CellId, output: u8) -> Self {
        Self {
            cells: [a, b],
            state: 0,
            previous_state: 0,
            output: OutputHistory::new(output),
        }
    }

    /// Resets time, state and history, drawing a fresh initial output.
    pub(crate) fn init(&mut self, rng: &mut impl Rng) {
        self.reseed(rng.random_range(0..=1));
    }

    /// Resets time, state and history with the given initial output.
    pub(crate) fn reseed(&mut self, output: u8) {
        self.state = 0;
        self.previous_state = 0;
        self.output = OutputHistory::new(output);
    }

    /// Returns both endpoints.
    pub fn cells(&self) -> [CellId; 2] {
        self.cells
    }

    /// Returns the endpoint opposite `cell`, if `cell` is an endpoint.
    pub fn other(&self, cell: CellId) -> Option<CellId> {
        match self.cells {
            [a, b] if a == cell => Some(b),
            [a, b] if b == cell => Some(a),
            _ => None,
        }
    }

    /// Returns true if the link joins `a` and `b` in either order.
    pub fn joins(&self, a: CellId, b: CellId) -> bool {
        self.other(a) == Some(b)
    }

    /// Returns the current time step.
    pub fn time(&self) -> u64 {
        self.output.time()
    }

    /// Returns the internal counter.
    pub fn state(&self) -> i32 {
        self.state
    }

    /// Returns the counter as of the previous step.
    pub fn previous_state(&self) -> i32 {
        self.previous_state
    }

    /// Returns the current output bit.
    pub fn output(&self) -> u8 {
        self.output.latest()
    }

    /// Returns true if the current output is 1.
    pub fn is_active(&self) -> bool {
        self.output() == 1
    }

    /// Returns the retained output history.
    pub fn history(&self) -> &OutputHistory {
        &self.output
    }

    /// Overwrites the output for the current time step.
    pub fn set_output(&mut self, output: u8) {
        self.output.set_latest(output);
    }

    /// Advances one step given the neighbour sum for the previous step.
    pub(crate) fn update(&mut self, neighbour_sum: i32) {
        self.previous_state = self.state;
        self.state = self.previous_state + DRIVE - neighbour_sum;

        let next = if self.state > UPPER_THRESHOLD {
            1
        } else if self.state < LOWER_THRESHOLD {
            0
        } else {
            self.output.latest()
        };
        self.output.push(next);
    }

    /// Returns true if the output or the counter changed on the last step.
    ///
    /// A link that has not stepped yet counts as changed.
    pub fn has_changed(&self) -> bool {
        let previous = self
            .time()
            .checked_sub(1)
            .and_then(|t| self.output.get(t));

        match previous {
            Some(previous) => previous != self.output() || self.state != self.previous_state,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_link() {
        let mut rng = StdRng::seed_from_u64(7);
        let link = Link::new(0, 1, &mut rng);

        assert_eq!(link.time(), 0);
        assert_eq!(link.state(), 0);
        assert_eq!(link.previous_state(), 0);
        assert!(link.output() <= 1);
        assert_eq!(link.cells(), [0, 1]);
    }

    #[test]
    fn test_other_endpoint() {
        let link = Link::with_output(3, 8, 0);
        assert_eq!(link.other(3), Some(8));
        assert_eq!(link.other(8), Some(3));
        assert_eq!(link.other(4), None);
        assert!(link.joins(8, 3));
        assert!(!link.joins(3, 3));
    }

    #[test]
    fn test_update_switches_on() {
        let mut link = Link::with_output(0, 1, 0);

        // state: 0 + 4 - 0 = 4 > 3
        link.update(0);
        assert_eq!(link.time(), 1);
        assert_eq!(link.state(), 4);
        assert_eq!(link.previous_state(), 0);
        assert_eq!(link.output(), 1);
    }

    #[test]
    fn test_update_switches_off() {
        let mut link = Link::with_output(0, 1, 1);

        // state: 0 + 4 - 6 = -2 < 0
        link.update(6);
        assert_eq!(link.state(), -2);
        assert_eq!(link.output(), 0);
    }

    #[test]
    fn test_update_holds_between_thresholds() {
        let mut on = Link::with_output(0, 1, 1);
        on.update(2);
        assert_eq!(on.state(), 2);
        assert_eq!(on.output(), 1);

        let mut off = Link::with_output(0, 1, 0);
        off.update(4);
        assert_eq!(off.state(), 0);
        assert_eq!(off.output(), 0);

        off.update(1);
        assert_eq!(off.state(), 3);
        assert_eq!(off.output(), 0);
    }

    #[test]
    fn test_has_changed() {
        let mut link = Link::with_output(0, 1, 1);
        assert!(link.has_changed());

        // Balanced input: state and output both hold.
        link.update(4);
        assert!(!link.has_changed());

        // Output holds but the counter drifts.
        link.update(3);
        assert_eq!(link.output(), 1);
        assert!(link.has_changed());

        // Output flips.
        link.update(10);
        assert_eq!(link.output(), 0);
        assert!(link.has_changed());
    }

    #[test]
    fn test_reseed_resets() {
        let mut link = Link::with_output(0, 1, 1);
        for _ in 0..30 {
            link.update(0);
        }
        assert_eq!(link.time(), 30);

        link.reseed(0);
        assert_eq!(link.time(), 0);
        assert_eq!(link.state(), 0);
        assert_eq!(link.previous_state(), 0);
        assert_eq!(link.output(), 0);
        assert_eq!(link.history().retained(), 1);
    }

    #[test]
    fn test_init_is_reproducible() {
        let mut a = Link::with_output(0, 1, 0);
        let mut b = Link::with_output(0, 1, 0);
        a.init(&mut StdRng::seed_from_u64(99));
        b.init(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
