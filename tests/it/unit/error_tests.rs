//! Error display strings.

use movable::{MoveError, NodeId};

#[test]
fn test_error_messages() {
    assert_eq!(
        MoveError::UnknownHandle(NodeId(7)).to_string(),
        "handle NodeId(7) is not attached"
    );
    assert_eq!(
        MoveError::TargetMissing(NodeId(3)).to_string(),
        "target for handle NodeId(3) could not be resolved"
    );
    assert_eq!(
        MoveError::InvalidTrace("empty".to_string()).to_string(),
        "invalid trace: empty"
    );
}

#[test]
fn test_json_error_converts() {
    let err: MoveError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
    assert!(matches!(err, MoveError::Json(_)));
}
