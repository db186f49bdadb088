use super::*;

#[test]
fn connection_status_default_is_disconnected() {
    assert_eq!(ConnectionStatus::default(), ConnectionStatus::Disconnected);
}

#[test]
fn connection_status_dot_classes_are_distinct() {
    let classes = [
        ConnectionStatus::Connected.dot_class(),
        ConnectionStatus::Connecting.dot_class(),
        ConnectionStatus::Disconnected.dot_class(),
    ];
    assert_ne!(classes[0], classes[1]);
    assert_ne!(classes[1], classes[2]);
    assert!(classes[0].ends_with("--connected"));
}

#[test]
fn player_info_parses_sparse_payloads() {
    let info: PlayerInfo = serde_json::from_value(serde_json::json!({"name": "Ann"})).unwrap();
    assert_eq!(info.name, "Ann");
    let empty: PlayerInfo = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(empty, PlayerInfo::default());
}

#[test]
fn player_info_ignores_profile_extras() {
    let info: PlayerInfo = serde_json::from_value(serde_json::json!({
        "id": "u-7",
        "name": "Bo",
        "avatarUrl": "https://img.example/bo.png",
        "rating": 1500
    }))
    .unwrap();
    assert_eq!(info, PlayerInfo { name: "Bo".to_owned() });
}

#[test]
fn display_name_falls_back_for_missing_or_blank_names() {
    let ann = PlayerInfo { name: " Ann ".to_owned() };
    assert_eq!(PlayerInfo::display_name(Some(&ann)), "Ann");
    assert_eq!(PlayerInfo::display_name(Some(&PlayerInfo::default())), "Waiting for player");
    assert_eq!(PlayerInfo::display_name(None), "Waiting for player");
}
