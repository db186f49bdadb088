use super::*;

#[test]
fn clock_runs_only_for_side_to_move_in_live_game() {
    assert!(is_clock_running(PieceColor::White, PieceColor::White, true, false));
    assert!(!is_clock_running(PieceColor::Black, PieceColor::White, true, false));
}

#[test]
fn clock_idle_before_start_and_after_game_over() {
    assert!(!is_clock_running(PieceColor::White, PieceColor::White, false, false));
    assert!(!is_clock_running(PieceColor::White, PieceColor::White, true, true));
}

#[test]
fn connection_label_matches_status() {
    assert_eq!(connection_label(ConnectionStatus::Connected), "Connected");
    assert_eq!(connection_label(ConnectionStatus::Connecting), "Connecting");
    assert_eq!(connection_label(ConnectionStatus::Disconnected), "Disconnected");
}
