//! Move sets that define board connectivity.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A set of moves used to link cells on a board.
///
/// Each move `(dx, dy)` links `(x, y)` to `(x + dx, y + dy)`. Links are
/// undirected, so a move and its negation describe the same links; a move set
/// lists only one of each pair and never `(0, 0)`.
pub trait MoveSet: Clone {
    /// Returns the canonical moves.
    fn moves(&self) -> &[(i32, i32)];

    /// Returns every direction covered, i.e. each move and its negation.
    fn directions(&self) -> Vec<(i32, i32)> {
        self.moves()
            .iter()
            .flat_map(|&(dx, dy)| [(dx, dy), (-dx, -dy)])
            .collect()
    }
}

/// Knight moves - 8 directions from 4 canonical offsets.
///
/// ```text
/// ┌───┬───┬───┬───┬───┐
/// │   │ X │   │ X │   │
/// ├───┼───┼───┼───┼───┤
/// │ X │   │   │   │ X │
/// ├───┼───┼───┼───┼───┤
/// │   │   │ · │   │   │
/// ├───┼───┼───┼───┼───┤
/// │ X │   │   │   │ X │
/// ├───┼───┼───┼───┼───┤
/// │   │ X │   │ X │   │
/// └───┴───┴───┴───┴───┘
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Knight;

impl MoveSet for Knight {
    fn moves(&self) -> &[(i32, i32)] {
        &[(2, 1), (-2, 1), (1, 2), (-1, 2)]
    }
}

/// Move set with user-defined offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CustomMoves {
    moves: Vec<(i32, i32)>,
}

impl CustomMoves {
    /// Creates a move set from the given offsets.
    ///
    /// `(0, 0)` is dropped, each offset is replaced by its canonical form (the
    /// one of `m` and `-m` pointing up, or right when horizontal) and
    /// repeats are removed, keeping first-seen order.
    pub fn new(offsets: impl IntoIterator<Item = (i32, i32)>) -> Self {
        let mut moves = Vec::new();
        for offset in offsets {
            if offset == (0, 0) {
                continue;
            }
            let canonical = canonical(offset);
            if !moves.contains(&canonical) {
                moves.push(canonical);
            }
        }
        Self { moves }
    }
}

impl MoveSet for CustomMoves {
    fn moves(&self) -> &[(i32, i32)] {
        &self.moves
    }
}

impl From<Knight> for CustomMoves {
    fn from(knight: Knight) -> Self {
        Self::new(knight.moves().iter().copied())
    }
}

fn canonical((dx, dy): (i32, i32)) -> (i32, i32) {
    if dy > 0 || (dy == 0 && dx > 0) {
        (dx, dy)
    } else {
        (-dx, -dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_directions() {
        let mut dirs = Knight.directions();
        dirs.sort();

        let mut expected = vec![
            (1, 2),
            (2, 1),
            (2, -1),
            (1, -2),
            (-1, -2),
            (-2, -1),
            (-2, 1),
            (-1, 2),
        ];
        expected.sort();

        assert_eq!(dirs, expected);
    }

    #[test]
    fn test_knight_moves_are_canonical() {
        for &m in Knight.moves() {
            assert_eq!(canonical(m), m);
        }
    }

    #[test]
    fn test_custom_moves_canonicalize() {
        let moves = CustomMoves::new([(0, 0), (-1, -2), (1, 2), (-3, 0), (2, -1)]);
        assert_eq!(moves.moves(), &[(1, 2), (3, 0), (-2, 1)]);
    }

    #[test]
    fn test_custom_from_knight() {
        let moves = CustomMoves::from(Knight);
        assert_eq!(moves.moves(), Knight.moves());
    }
}
