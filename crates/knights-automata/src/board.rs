//! The board: cells, links and synchronous stepping.

use std::collections::BTreeSet;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cell::{Cell, CellId, Coord};
use crate::error::BoardError;
use crate::link::{Link, LinkId};
use crate::moves::{Knight, MoveSet};
use crate::pattern::common_periods;

/// Which links count towards a link's neighbour sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NeighbourRule {
    /// Every other link touching either endpoint.
    #[default]
    ExcludeSelf,
    /// Every link in both endpoints' incidence lists, so the link itself is
    /// counted once per endpoint.
    ///
    /// Under this rule a link balances (sum of 4) exactly when both of its
    /// endpoints have two active links, which makes the fixed points of the
    /// board unions of closed knight's tours.
    SelfAtBothEnds,
}

/// An N×N board of cells joined by links.
///
/// Cells and links are stored in flat arenas and refer to each other by
/// index. Topology only grows while the board is being built; stepping never
/// adds or removes links.
///
/// # Example
///
/// ```
/// use knights_automata::Board;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(12345);
/// let mut board = Board::new(6).unwrap();
/// board.init(&mut rng).unwrap();
/// assert_eq!(board.links().len(), 80);
///
/// board.update();
/// if board.is_stable() || board.is_not_convergent() {
///     board.reset(&mut rng);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    /// Cells addressed `x * size + y`.
    cells: Vec<Cell>,
    links: Vec<Link>,
    rule: NeighbourRule,
}

impl Board {
    /// Creates a board of `size × size` unlinked cells.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Self::with_rule(size, NeighbourRule::default())
    }

    /// Creates an unlinked board using the given neighbour rule.
    pub fn with_rule(size: usize, rule: NeighbourRule) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize(size));
        }

        let cells = (0..size)
            .flat_map(|x| (0..size).map(move |y| Cell::new(x, y)))
            .collect();

        Ok(Self {
            size,
            cells,
            links: Vec::new(),
            rule,
        })
    }

    /// Returns the board size N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the neighbour rule.
    pub fn rule(&self) -> NeighbourRule {
        self.rule
    }

    /// Iterates over all cells, column by column.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Returns all links in creation order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Returns a cell by index.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id)
    }

    /// Returns the cell at `(x, y)`.
    pub fn cell_at(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cell_id(x, y).map(|id| &self.cells[id])
    }

    /// Returns the index of the cell at `(x, y)`.
    pub fn cell_id(&self, x: usize, y: usize) -> Option<CellId> {
        (x < self.size && y < self.size).then(|| x * self.size + y)
    }

    /// Returns a link by index.
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id)
    }

    /// Returns a link by index, mutably.
    ///
    /// Outside this crate only the current output can be overwritten; links
    /// advance together through [`update`](Self::update).
    ///
    /// ```compile_fail
    /// use knights_automata::Board;
    ///
    /// let mut board = Board::new(4).unwrap();
    /// board.link_mut(0).unwrap().update(0);
    /// ```
    pub fn link_mut(&mut self, id: LinkId) -> Option<&mut Link> {
        self.links.get_mut(id)
    }

    /// Builds knight-move topology.
    pub fn init(&mut self, rng: &mut impl Rng) -> Result<(), BoardError> {
        self.init_with(&Knight, rng)
    }

    /// Builds topology from every move in `moves`.
    pub fn init_with<M: MoveSet>(
        &mut self,
        moves: &M,
        rng: &mut impl Rng,
    ) -> Result<(), BoardError> {
        for &m in moves.moves() {
            self.add_move(m, rng)?;
        }
        debug!(
            size = self.size,
            links = self.links.len(),
            "board topology built"
        );
        Ok(())
    }

    /// Links every cell to the cell `(dx, dy)` away.
    ///
    /// Only source cells whose target stays on the board are visited, so no
    /// bounds check is needed per cell.
    pub fn add_move(
        &mut self,
        (dx, dy): (i32, i32),
        rng: &mut impl Rng,
    ) -> Result<(), BoardError> {
        if (dx, dy) == (0, 0) {
            return Err(BoardError::InvalidMove { dx, dy });
        }

        for x in self.source_range(dx) {
            for y in self.source_range(dy) {
                let target = (offset(x, dx), offset(y, dy));
                self.connect((x, y), target, rng)?;
            }
        }
        Ok(())
    }

    /// Source coordinates along one axis for which `c + delta` is on the board.
    fn source_range(&self, delta: i32) -> std::ops::Range<usize> {
        let shift = delta.unsigned_abs() as usize;
        if delta >= 0 {
            0..self.size.saturating_sub(shift)
        } else {
            shift.min(self.size)..self.size
        }
    }

    /// Links two cells, returning the new link's index.
    ///
    /// Fails if either cell is off the board, the cells are the same, or they
    /// are already linked.
    pub fn connect(
        &mut self,
        a: Coord,
        b: Coord,
        rng: &mut impl Rng,
    ) -> Result<LinkId, BoardError> {
        let ia = self.require_cell(a)?;
        let ib = self.require_cell(b)?;
        if ia == ib {
            return Err(BoardError::InvalidMove { dx: 0, dy: 0 });
        }
        if self.link_between(a, b).is_some() {
            return Err(BoardError::DuplicateLink { a, b });
        }

        let id = self.links.len();
        self.links.push(Link::new(ia, ib, rng));
        self.cells[ia].attach(id);
        self.cells[ib].attach(id);
        Ok(id)
    }

    fn require_cell(&self, (x, y): Coord) -> Result<CellId, BoardError> {
        self.cell_id(x, y).ok_or(BoardError::CellOutOfBounds {
            coord: (x, y),
            size: self.size,
        })
    }

    /// Returns the link joining `a` and `b`, if any.
    pub fn link_between(&self, a: Coord, b: Coord) -> Option<LinkId> {
        let ia = self.cell_id(a.0, a.1)?;
        let ib = self.cell_id(b.0, b.1)?;
        self.cells[ia]
            .links()
            .iter()
            .copied()
            .find(|&id| self.links[id].joins(ia, ib))
    }

    /// Returns true if `a` and `b` are linked.
    pub fn has_link(&self, a: Coord, b: Coord) -> bool {
        self.link_between(a, b).is_some()
    }

    /// Returns the coordinates of both endpoints of a link.
    pub fn endpoints(&self, id: LinkId) -> Option<(Coord, Coord)> {
        let [a, b] = self.links.get(id)?.cells();
        Some((self.cells[a].coord(), self.cells[b].coord()))
    }

    /// Sums the outputs at `time` of the links neighbouring `id`.
    ///
    /// Links whose output at `time` is no longer retained contribute nothing.
    pub fn sum_of_neighbours(&self, id: LinkId, time: u64) -> i32 {
        let Some(link) = self.links.get(id) else {
            return 0;
        };

        link.cells()
            .iter()
            .flat_map(|&cell| self.cells[cell].links())
            .filter(|&&other| self.rule == NeighbourRule::SelfAtBothEnds || other != id)
            .filter_map(|&other| self.links[other].history().get(time))
            .map(i32::from)
            .sum()
    }

    /// Advances every link by one step.
    ///
    /// Neighbour sums are read from the step every link has already
    /// committed, so links never observe each other's new outputs.
    pub fn update(&mut self) {
        let sums: Vec<i32> = (0..self.links.len())
            .map(|id| self.sum_of_neighbours(id, self.links[id].time()))
            .collect();

        for (link, sum) in self.links.iter_mut().zip(sums) {
            link.update(sum);
        }
        trace!(time = self.time(), active = self.active_links(), "board updated");
    }

    /// Re-seeds every link without touching topology.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        for link in &mut self.links {
            link.init(rng);
        }
        debug!(links = self.links.len(), "board reset");
    }

    /// Returns the current time step, or 0 for a board without links.
    pub fn time(&self) -> u64 {
        self.links.first().map_or(0, Link::time)
    }

    /// Returns how many links currently output 1.
    pub fn active_links(&self) -> usize {
        self.links.iter().filter(|link| link.is_active()).count()
    }

    /// Returns true if no link changed output or state on the last step.
    pub fn is_stable(&self) -> bool {
        !self.links.iter().any(Link::has_changed)
    }

    /// Returns the periods every link's recent output agrees with.
    pub fn pattern_offsets(&self) -> BTreeSet<usize> {
        common_periods(self.links.iter().map(Link::history), self.time())
    }

    /// Returns true if the whole board is repeating with a period shorter
    /// than the lookback window.
    pub fn is_not_convergent(&self) -> bool {
        !self.pattern_offsets().is_empty()
    }
}

fn offset(c: usize, delta: i32) -> usize {
    c.wrapping_add_signed(delta as isize)
}
