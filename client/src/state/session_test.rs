use super::*;

#[test]
fn session_defaults_to_idle_with_no_image() {
    let state = SessionState::default();
    assert!(!state.analyzing);
    assert!(state.uploaded_image.is_none());
}

#[test]
fn begin_stores_the_image_and_raises_the_flag() {
    let mut state = SessionState::default();
    assert!(state.begin("data:image/png;base64,AAAA".to_owned()));
    assert!(state.analyzing);
    assert_eq!(state.uploaded_image.as_deref(), Some("data:image/png;base64,AAAA"));
}

#[test]
fn begin_while_analyzing_is_rejected_and_changes_nothing() {
    let mut state = SessionState::default();
    assert!(state.begin("data:image/png;base64,first".to_owned()));

    assert!(!state.begin("data:image/png;base64,second".to_owned()));
    assert!(state.analyzing);
    assert_eq!(state.uploaded_image.as_deref(), Some("data:image/png;base64,first"));
}

#[test]
fn finish_clears_the_flag_but_keeps_the_image() {
    let mut state = SessionState::default();
    assert!(state.begin("data:image/png;base64,AAAA".to_owned()));
    state.finish();
    assert!(!state.analyzing);
    assert!(state.uploaded_image.is_some());
}

#[test]
fn a_new_submission_after_finish_overwrites_the_image() {
    let mut state = SessionState::default();
    assert!(state.begin("data:image/png;base64,first".to_owned()));
    state.finish();
    assert!(state.begin("data:image/png;base64,second".to_owned()));
    assert_eq!(state.uploaded_image.as_deref(), Some("data:image/png;base64,second"));
}
