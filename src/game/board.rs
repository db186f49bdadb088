//! Board snapshot, display orientation, and per-cell highlight rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authority sends the whole board as a row-major 8×8 matrix (row 0 is
//! rank 8). This module never mutates a snapshot; it only projects it into
//! display order for the viewing side and decides which overlay each cell
//! gets.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceColor};
use super::square::{BOARD_SIZE, Square};

type Rows = Vec<Vec<Option<Piece>>>;

/// Error returned when a snapshot does not have the 8×8 shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected 8 rows, got {0}")]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },
}

/// Immutable board snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Rows", into = "Rows")]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Build a snapshot from server rows, validating the shape.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when there are not exactly 8 rows of 8 cells.
    pub fn from_rows(rows: Rows) -> Result<Self, BoardError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::RowCount(rows.len()));
        }
        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != BOARD_SIZE {
                return Err(BoardError::RowLength { row, len: values.len() });
            }
            for (col, piece) in values.into_iter().enumerate() {
                cells[row][col] = piece;
            }
        }
        Ok(Self { cells })
    }

    /// Copy of this snapshot with `piece` placed on `square`.
    #[must_use]
    pub fn with_piece(mut self, square: Square, piece: Option<Piece>) -> Self {
        let (row, col) = square.grid_position();
        self.cells[row][col] = piece;
        self
    }

    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let (row, col) = square.grid_position();
        self.cells[row][col]
    }

    #[must_use]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Cells in display order for `perspective`.
    ///
    /// Black reverses both the row order and the column order inside each
    /// row. Square names are attached before reordering, so a cell keeps its
    /// name whichever side is viewing.
    #[must_use]
    pub fn display_rows(&self, perspective: PieceColor) -> Vec<Vec<GridCell>> {
        let mut rows: Vec<Vec<GridCell>> = self
            .cells
            .iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .filter_map(|(col, piece)| {
                        Square::from_grid(row, col).map(|square| GridCell { row, col, square, piece: *piece })
                    })
                    .collect()
            })
            .collect();
        if perspective == PieceColor::Black {
            rows.reverse();
            for row in &mut rows {
                row.reverse();
            }
        }
        rows
    }
}

impl TryFrom<Rows> for Board {
    type Error = BoardError;

    fn try_from(rows: Rows) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Rows {
    fn from(board: Board) -> Self {
        board.cells.iter().map(|row| row.to_vec()).collect()
    }
}

/// One rendered cell of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell {
    /// Snapshot row (0 = rank 8), independent of perspective.
    pub row: usize,
    /// Snapshot column (0 = file a), independent of perspective.
    pub col: usize,
    pub square: Square,
    pub piece: Option<Piece>,
}

impl GridCell {
    /// Light squares sit on even `row + col`, so a8 and h1 are light.
    #[must_use]
    pub fn is_light(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Destination overlay for this cell.
    #[must_use]
    pub fn highlight(&self, destinations: &HashSet<Square>) -> Highlight {
        if !destinations.contains(&self.square) {
            Highlight::None
        } else if self.piece.is_some() {
            Highlight::Capture
        } else {
            Highlight::QuietMove
        }
    }
}

/// Destination marker drawn on a cell. At most one applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    None,
    /// Centre dot on an empty destination.
    QuietMove,
    /// Ring around an occupied destination.
    Capture,
}
