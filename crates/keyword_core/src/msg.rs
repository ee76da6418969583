use crate::RequestId;

/// Result of one outbound request, as seen by the core.
///
/// Failure detail stays with the IO layer; the core only shows a fixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome<T> {
    Success(T),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the topic input box.
    TopicChanged(String),
    /// User edited the email input box.
    EmailChanged(String),
    /// User asked for keywords about the current topic.
    SearchClicked,
    /// User asked to subscribe the current email to the current topic.
    SubscribeClicked,
    /// The search request resolved.
    SearchCompleted {
        request_id: RequestId,
        outcome: RequestOutcome<Vec<String>>,
    },
    /// The subscribe request resolved. Success carries the server's message.
    SubscribeCompleted {
        request_id: RequestId,
        outcome: RequestOutcome<String>,
    },
}
