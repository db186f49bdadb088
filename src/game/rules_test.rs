use super::*;

struct NoMoves;

impl RulesEngine for NoMoves {
    fn moves(&self, _square: Square, _verbose: bool) -> Result<Vec<MoveDescriptor>, RulesError> {
        Ok(Vec::new())
    }
}

// =============================================================
// MoveDescriptor
// =============================================================

#[test]
fn verbose_move_reads_destination_only() {
    let verbose = serde_json::json!({
        "color": "w",
        "from": "e7",
        "to": "e8",
        "piece": "p",
        "san": "e8=Q+",
        "flags": "np",
        "promotion": "q"
    });
    let descriptor: MoveDescriptor = serde_json::from_value(verbose).unwrap();
    assert_eq!(descriptor, MoveDescriptor::to("e8".parse().unwrap()));
}

#[test]
fn descriptor_without_destination_is_rejected() {
    let result = serde_json::from_value::<MoveDescriptor>(serde_json::json!({"from": "e2"}));
    assert!(result.is_err());
}

// =============================================================
// RulesHandle
// =============================================================

#[test]
fn handles_compare_by_engine_identity() {
    let handle = RulesHandle::new(NoMoves);
    assert_eq!(handle.clone(), handle);
    assert_ne!(handle, RulesHandle::new(NoMoves));
    assert!(handle.engine().moves("a1".parse().unwrap(), true).unwrap().is_empty());
}
