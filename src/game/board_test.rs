use super::*;
use crate::game::piece::PieceKind;

// =============================================================
// Helpers
// =============================================================

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

fn white_pawn() -> Piece {
    Piece::new(PieceKind::Pawn, PieceColor::White)
}

fn black_knight() -> Piece {
    Piece::new(PieceKind::Knight, PieceColor::Black)
}

fn names(rows: &[Vec<GridCell>]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.square.to_string()).collect())
        .collect()
}

// =============================================================
// Snapshot parsing
// =============================================================

#[test]
fn from_rows_rejects_wrong_shapes() {
    assert_eq!(Board::from_rows(vec![vec![None; 8]; 7]), Err(BoardError::RowCount(7)));
    let mut rows = vec![vec![None; 8]; 8];
    rows[3].pop();
    assert_eq!(Board::from_rows(rows), Err(BoardError::RowLength { row: 3, len: 7 }));
}

#[test]
fn deserializes_server_snapshot_with_extra_fields() {
    let mut rows = vec![vec![serde_json::Value::Null; 8]; 8];
    rows[6][4] = serde_json::json!({"square": "e2", "type": "p", "color": "w"});
    rows[0][1] = serde_json::json!({"square": "b8", "type": "n", "color": "b"});
    let board: Board = serde_json::from_value(serde_json::json!(rows)).expect("valid snapshot");
    assert_eq!(board.piece_at(sq("e2")), Some(white_pawn()));
    assert_eq!(board.piece_at(sq("b8")), Some(black_knight()));
    assert!(!board.is_occupied(sq("e4")));
}

#[test]
fn deserialize_rejects_short_board() {
    let rows = vec![vec![serde_json::Value::Null; 8]; 2];
    assert!(serde_json::from_value::<Board>(serde_json::json!(rows)).is_err());
}

#[test]
fn with_piece_returns_updated_copy() {
    let empty = Board::default();
    let board = empty.clone().with_piece(sq("d4"), Some(white_pawn()));
    assert!(board.is_occupied(sq("d4")));
    assert!(!empty.is_occupied(sq("d4")));
}

// =============================================================
// Orientation
// =============================================================

#[test]
fn white_perspective_keeps_snapshot_order() {
    let rows = Board::default().display_rows(PieceColor::White);
    let names = names(&rows);
    assert_eq!(names[0][0], "a8");
    assert_eq!(names[0][7], "h8");
    assert_eq!(names[7][0], "a1");
    assert_eq!(names[7][7], "h1");
}

#[test]
fn black_perspective_reverses_rows_and_columns() {
    let white = names(&Board::default().display_rows(PieceColor::White));
    let black = names(&Board::default().display_rows(PieceColor::Black));
    assert_eq!(black[0][0], "h1");
    assert_eq!(black[7][7], "a8");
    for r in 0..8 {
        for c in 0..8 {
            assert_eq!(black[r][c], white[7 - r][7 - c]);
        }
    }
}

#[test]
fn names_and_pieces_travel_with_their_cells() {
    let board = Board::default().with_piece(sq("b8"), Some(black_knight()));
    for perspective in [PieceColor::White, PieceColor::Black] {
        for cell in board.display_rows(perspective).into_iter().flatten() {
            assert_eq!(Square::from_grid(cell.row, cell.col), Some(cell.square));
            assert_eq!(cell.piece, board.piece_at(cell.square));
        }
    }
}

#[test]
fn shading_puts_light_on_a8_and_h1() {
    let rows = Board::default().display_rows(PieceColor::White);
    assert!(rows[0][0].is_light());
    assert!(!rows[0][1].is_light());
    assert!(rows[7][7].is_light());
}

// =============================================================
// Highlights
// =============================================================

#[test]
fn highlight_depends_on_membership_and_occupancy() {
    let board = Board::default().with_piece(sq("d5"), Some(black_knight()));
    let destinations: HashSet<Square> = [sq("e4"), sq("d5")].into_iter().collect();
    let cells: Vec<GridCell> = board.display_rows(PieceColor::White).into_iter().flatten().collect();
    let find = |name: &str| cells.iter().find(|c| c.square == sq(name)).copied().expect("cell exists");

    assert_eq!(find("e4").highlight(&destinations), Highlight::QuietMove);
    assert_eq!(find("d5").highlight(&destinations), Highlight::Capture);
    assert_eq!(find("a1").highlight(&destinations), Highlight::None);
    assert_eq!(find("e4").highlight(&HashSet::new()), Highlight::None);
}
