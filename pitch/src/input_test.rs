use super::*;

#[test]
fn default_tool_is_cursor() {
    assert_eq!(Tool::default(), Tool::Cursor);
}

#[test]
fn cursor_draws_nothing() {
    assert_eq!(Tool::Cursor.line_kind(), None);
}

#[test]
fn drawing_tools_map_to_their_line_kinds() {
    assert_eq!(Tool::Movement.line_kind(), Some(LineKind::Movement));
    assert_eq!(Tool::Pass.line_kind(), Some(LineKind::Pass));
    assert_eq!(Tool::Dribble.line_kind(), Some(LineKind::Dribble));
}

#[test]
fn default_gesture_is_idle() {
    assert_eq!(Gesture::default(), Gesture::Idle);
}
