//! The request/response machine shared by search and subscribe.
//!
//! Each interaction moves `Idle -> Pending -> (Success | Failure) -> Idle`.
//! The busy flag and the notice slot are shared between both interactions, so
//! overlapping requests resolve last-writer-wins.

use crate::{AppState, Notice, RequestId, RequestOutcome};

pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search. Please try again.";
pub const NO_KEYWORDS_MESSAGE: &str = "No relevant keywords found. Try a different search term.";
pub const SUBSCRIBE_FAILED_MESSAGE: &str = "Failed to subscribe. Please try again.";
pub const EMAIL_REQUIRED_MESSAGE: &str = "Please enter your email address";

pub(crate) trait Interaction {
    type Output;

    /// Shown in the error slot when the request fails for any reason.
    const FAILURE_MESSAGE: &'static str;

    fn on_success(state: &mut AppState, output: Self::Output);
}

pub(crate) struct Search;

impl Interaction for Search {
    type Output = Vec<String>;

    const FAILURE_MESSAGE: &'static str = SEARCH_FAILED_MESSAGE;

    fn on_success(state: &mut AppState, keywords: Vec<String>) {
        let empty = keywords.is_empty();
        state.replace_keywords(keywords);
        if empty {
            state.set_notice(Notice::Status(NO_KEYWORDS_MESSAGE.to_string()));
        }
    }
}

pub(crate) struct Subscribe;

impl Interaction for Subscribe {
    type Output = String;

    const FAILURE_MESSAGE: &'static str = SUBSCRIBE_FAILED_MESSAGE;

    fn on_success(state: &mut AppState, message: String) {
        state.set_notice(Notice::Status(message));
        state.clear_email();
    }
}

/// Idle -> Pending. Returns the id to attach to the outbound request.
pub(crate) fn begin(state: &mut AppState) -> RequestId {
    state.set_busy(true);
    state.set_notice(Notice::None);
    state.next_request_id()
}

/// Local rejection before any request goes out.
pub(crate) fn reject(state: &mut AppState, message: &str) {
    state.set_notice(Notice::Error(message.to_string()));
    state.set_busy(false);
}

/// Pending -> Success | Failure -> Idle.
pub(crate) fn settle<I: Interaction>(state: &mut AppState, outcome: RequestOutcome<I::Output>) {
    match outcome {
        RequestOutcome::Success(output) => I::on_success(state, output),
        RequestOutcome::Failed => {
            state.set_notice(Notice::Error(I::FAILURE_MESSAGE.to_string()));
        }
    }
    state.set_busy(false);
}
