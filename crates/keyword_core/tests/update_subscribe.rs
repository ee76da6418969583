use std::sync::Once;

use keyword_core::{
    update, AppState, Effect, Msg, Notice, RequestOutcome, EMAIL_REQUIRED_MESSAGE,
    SUBSCRIBE_FAILED_MESSAGE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(keyword_logging::initialize_for_tests);
}

fn filled(email: &str, topic: &str) -> AppState {
    let (state, _) = update(AppState::new(), Msg::EmailChanged(email.to_string()));
    let (state, _) = update(state, Msg::TopicChanged(topic.to_string()));
    state
}

#[test]
fn missing_email_fails_locally_without_request() {
    init_logging();
    let (state, effects) = update(filled("", "rockets"), Msg::SubscribeClicked);

    assert!(effects.is_empty());
    assert_eq!(
        state.notice(),
        &Notice::Error(EMAIL_REQUIRED_MESSAGE.to_string())
    );
    assert!(!state.is_busy());
}

#[test]
fn missing_email_replaces_previous_status() {
    init_logging();
    let (state, _) = update(filled("", "the"), Msg::SearchClicked);
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            outcome: RequestOutcome::Success(Vec::new()),
        },
    );
    assert!(state.view().status.is_some());

    let (state, _) = update(state, Msg::SubscribeClicked);
    let view = state.view();
    assert_eq!(view.status, None);
    assert_eq!(view.error.as_deref(), Some(EMAIL_REQUIRED_MESSAGE));
}

#[test]
fn subscribe_sends_email_and_topic() {
    init_logging();
    let (state, effects) = update(filled("user@example.com", "rockets"), Msg::SubscribeClicked);

    assert_eq!(
        effects,
        vec![Effect::Subscribe {
            request_id: 1,
            email: "user@example.com".to_string(),
            topic: "rockets".to_string(),
        }]
    );
    assert!(state.is_busy());
    assert_eq!(state.notice(), &Notice::None);
}

#[test]
fn successful_subscribe_shows_message_and_clears_email() {
    init_logging();
    let (state, _) = update(filled("user@example.com", "rockets"), Msg::SubscribeClicked);
    let message = "Successfully subscribed user@example.com to updates on 'rockets'";

    let (state, effects) = update(
        state,
        Msg::SubscribeCompleted {
            request_id: 1,
            outcome: RequestOutcome::Success(message.to_string()),
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.status.as_deref(), Some(message));
    assert_eq!(view.error, None);
    assert_eq!(view.email, "");
    assert_eq!(view.topic, "rockets");
    assert!(!view.busy);
}

#[test]
fn failed_subscribe_keeps_email() {
    init_logging();
    let (state, _) = update(filled("user@example.com", "rockets"), Msg::SubscribeClicked);

    let (state, _) = update(
        state,
        Msg::SubscribeCompleted {
            request_id: 1,
            outcome: RequestOutcome::Failed,
        },
    );
    let view = state.view();

    assert_eq!(view.error.as_deref(), Some(SUBSCRIBE_FAILED_MESSAGE));
    assert_eq!(view.status, None);
    assert_eq!(view.email, "user@example.com");
    assert!(!view.busy);
}

#[test]
fn subscribe_does_not_touch_keywords() {
    init_logging();
    let (state, _) = update(filled("user@example.com", "rockets"), Msg::SearchClicked);
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            outcome: RequestOutcome::Success(vec!["rockets".to_string()]),
        },
    );

    let (state, effects) = update(state, Msg::SubscribeClicked);
    assert_eq!(effects.len(), 1);
    let (state, _) = update(
        state,
        Msg::SubscribeCompleted {
            request_id: 2,
            outcome: RequestOutcome::Failed,
        },
    );

    assert_eq!(state.keywords(), ["rockets".to_string()].as_slice());
}

#[test]
fn starting_subscribe_clears_previous_error() {
    init_logging();
    let (state, _) = update(filled("", "rockets"), Msg::SubscribeClicked);
    assert!(state.view().error.is_some());

    let (state, _) = update(state, Msg::EmailChanged("user@example.com".to_string()));
    let (state, effects) = update(state, Msg::SubscribeClicked);
    let view = state.view();

    assert_eq!(effects.len(), 1);
    assert_eq!(view.error, None);
    assert_eq!(view.status, None);
    assert!(view.busy);
}
