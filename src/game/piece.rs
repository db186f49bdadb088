//! Piece identity as delivered in board snapshots.

#[cfg(test)]
#[path = "piece_test.rs"]
mod piece_test;

use serde::{Deserialize, Serialize};

/// Side a piece belongs to. Also used for the viewing perspective and turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    #[default]
    #[serde(rename = "w", alias = "white")]
    White,
    #[serde(rename = "b", alias = "black")]
    Black,
}

impl PieceColor {
    /// Single-letter side code used by asset names (`w` / `b`).
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }

    /// The other side.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

/// Piece type. Wire letters are lower case; upper case is accepted on input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    #[serde(rename = "p", alias = "P")]
    Pawn,
    #[serde(rename = "n", alias = "N")]
    Knight,
    #[serde(rename = "b", alias = "B")]
    Bishop,
    #[serde(rename = "r", alias = "R")]
    Rook,
    #[serde(rename = "q", alias = "Q")]
    Queen,
    #[serde(rename = "k", alias = "K")]
    King,
}

impl PieceKind {
    /// Lower-case piece letter.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }
}

/// A piece occupying a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    #[must_use]
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    /// Two-character artwork code: side letter then lower-case piece letter.
    #[must_use]
    pub fn asset_code(self) -> String {
        format!("{}{}", self.color.code(), self.kind.letter())
    }

    /// Artwork URL for this piece, e.g. `/wp.png`.
    #[must_use]
    pub fn asset_path(self, base: &str, extension: &str) -> String {
        let base = base.trim_end_matches('/');
        format!("{base}/{}.{extension}", self.asset_code())
    }
}
