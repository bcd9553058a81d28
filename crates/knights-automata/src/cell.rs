//! Board cells.

use crate::board::Board;
use crate::link::LinkId;

/// Board coordinate `(x, y)`.
pub type Coord = (usize, usize);

/// Index of a cell in its board.
pub type CellId = usize;

/// A square on the board.
///
/// Cells carry no simulation state of their own; they only record which
/// links touch them, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    links: Vec<LinkId>,
}

impl Cell {
    pub(crate) fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            links: Vec::new(),
        }
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Returns `(x, y)`.
    pub fn coord(&self) -> Coord {
        (self.x, self.y)
    }

    /// Returns the incident links in creation order.
    pub fn links(&self) -> &[LinkId] {
        &self.links
    }

    /// Returns the number of incident links.
    pub fn degree(&self) -> usize {
        self.links.len()
    }

    /// Returns true if one of this cell's links ends at `other`.
    pub fn links_to(&self, board: &Board, other: &Cell) -> bool {
        let from = board.cell_id(self.x, self.y);
        let to = board.cell_id(other.x, other.y);
        let (Some(from), Some(to)) = (from, to) else {
            return false;
        };
        self.links
            .iter()
            .filter_map(|&id| board.link(id))
            .any(|link| link.joins(from, to))
    }

    pub(crate) fn attach(&mut self, link: LinkId) {
        self.links.push(link);
    }
}
