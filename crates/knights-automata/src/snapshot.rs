//! Read-only views of a board for renderers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cell::Coord;

/// One link as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkSnapshot {
    /// First endpoint.
    pub a: Coord,
    /// Second endpoint.
    pub b: Coord,
    /// Current output bit.
    pub output: u8,
}

/// Everything a renderer needs to draw one step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardSnapshot {
    /// Board size N.
    pub size: usize,
    /// Time step the snapshot was taken at.
    pub time: u64,
    /// Cell coordinates, column by column.
    pub cells: Vec<Coord>,
    /// Links in creation order.
    pub links: Vec<LinkSnapshot>,
}

impl BoardSnapshot {
    /// Returns the links whose output is on.
    pub fn active(&self) -> impl Iterator<Item = &LinkSnapshot> {
        self.links.iter().filter(|link| link.output == 1)
    }
}

impl Board {
    /// Captures the current step.
    pub fn snapshot(&self) -> BoardSnapshot {
        let links = self
            .links()
            .iter()
            .map(|link| {
                let [a, b] = link.cells();
                LinkSnapshot {
                    a: self.coord_of(a),
                    b: self.coord_of(b),
                    output: link.output(),
                }
            })
            .collect();

        BoardSnapshot {
            size: self.size(),
            time: self.time(),
            cells: self.cells().map(|cell| cell.coord()).collect(),
            links,
        }
    }

    /// Cells are laid out `x * size + y`.
    fn coord_of(&self, id: usize) -> Coord {
        (id / self.size(), id % self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board() -> Board {
        let mut board = Board::new(5).unwrap();
        board.init(&mut StdRng::seed_from_u64(3)).unwrap();
        board
    }

    #[test]
    fn test_snapshot_mirrors_board() {
        let mut board = board();
        board.update();
        let snap = board.snapshot();

        assert_eq!(snap.size, 5);
        assert_eq!(snap.time, 1);
        assert_eq!(snap.cells.len(), 25);
        assert_eq!(snap.cells[7], (1, 2));
        assert_eq!(snap.links.len(), board.links().len());

        for (id, link) in snap.links.iter().enumerate() {
            assert_eq!(board.endpoints(id), Some((link.a, link.b)));
            assert_eq!(board.link(id).unwrap().output(), link.output);
        }
        assert_eq!(snap.active().count(), board.active_links());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_snapshot_serde() {
        let snap = board().snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
