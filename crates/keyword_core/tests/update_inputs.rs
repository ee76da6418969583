use keyword_core::{update, AppState, Msg, Notice, RequestOutcome};

#[test]
fn initial_state_is_empty() {
    let view = AppState::new().view();

    assert_eq!(view.topic, "");
    assert_eq!(view.email, "");
    assert!(view.keywords.is_empty());
    assert_eq!(view.status, None);
    assert_eq!(view.error, None);
    assert!(!view.busy);
    assert!(!view.dirty);
}

#[test]
fn edits_only_touch_their_field() {
    let (state, _) = update(AppState::new(), Msg::SearchClicked);
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            outcome: RequestOutcome::Failed,
        },
    );
    let before = state.clone();

    let (state, effects) = update(state, Msg::TopicChanged("rockets".to_string()));
    let (mut state, more) = update(state, Msg::EmailChanged("a@b.c".to_string()));

    assert!(effects.is_empty());
    assert!(more.is_empty());
    assert_eq!(state.topic(), "rockets");
    assert_eq!(state.email(), "a@b.c");
    assert_eq!(state.notice(), before.notice());
    assert_eq!(state.keywords(), before.keywords());
    assert_eq!(state.is_busy(), before.is_busy());
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn whitespace_email_counts_as_present() {
    let (state, _) = update(AppState::new(), Msg::EmailChanged("  ".to_string()));
    let (state, effects) = update(state, Msg::SubscribeClicked);

    assert_eq!(effects.len(), 1);
    assert_eq!(state.notice(), &Notice::None);
}
