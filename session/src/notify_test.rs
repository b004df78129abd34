use super::*;

#[test]
fn no_outcome_no_notice() {
    assert_eq!(Notice::from_state(&SessionState::default()), None);
}

#[test]
fn error_outcome_wins_over_success() {
    let state = SessionState {
        is_error: true,
        is_success: true,
        message: Some("Invalid credentials".to_owned()),
        ..SessionState::default()
    };
    assert_eq!(Notice::from_state(&state), Some(Notice::error("Invalid credentials")));
}

#[test]
fn error_without_message_gets_generic_text() {
    let state = SessionState { is_error: true, ..SessionState::default() };
    assert_eq!(Notice::from_state(&state), Some(Notice::error("Something went wrong.")));
}

#[test]
fn success_without_message_is_silent() {
    let state = SessionState { is_success: true, ..SessionState::default() };
    assert_eq!(Notice::from_state(&state), None);
}
