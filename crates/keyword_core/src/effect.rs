use crate::RequestId;

/// Outbound work requested by [`crate::update`]. The front end executes each
/// effect exactly once and reports back with the matching completion message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Search {
        request_id: RequestId,
        query: String,
    },
    Subscribe {
        request_id: RequestId,
        email: String,
        topic: String,
    },
}
