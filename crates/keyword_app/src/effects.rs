use std::io;
use std::sync::Arc;

use keyword_client::{ApiError, EngineEvent, EngineHandle, KeywordApi, RequestId};
use keyword_core::{Effect, Msg, RequestOutcome};
use keyword_logging::{kw_info, kw_warn};

/// Executes core effects on the engine and turns engine completions back into
/// messages for the UI loop.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(api: Arc<dyn KeywordApi>) -> io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::new(api)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Search { request_id, query } => {
                    kw_info!(
                        "Search request_id={} query_len={} query={}",
                        request_id,
                        query.len(),
                        query
                    );
                    self.engine.search(request_id, query);
                }
                Effect::Subscribe {
                    request_id,
                    email,
                    topic,
                } => {
                    kw_info!(
                        "Subscribe request_id={} email_len={} topic={}",
                        request_id,
                        email.len(),
                        topic
                    );
                    self.engine.subscribe(request_id, email, topic);
                }
            }
        }
    }

    /// Drains every completion that has arrived so far, without blocking.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(completion_msg(event));
        }
        inbox
    }
}

fn completion_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => Msg::SearchCompleted {
            request_id,
            outcome: into_outcome("Search", request_id, result),
        },
        EngineEvent::SubscribeCompleted { request_id, result } => Msg::SubscribeCompleted {
            request_id,
            outcome: into_outcome("Subscribe", request_id, result),
        },
    }
}

/// Failure detail ends here: it is logged, and the core only learns that the
/// request failed.
fn into_outcome<T>(
    label: &str,
    request_id: RequestId,
    result: Result<T, ApiError>,
) -> RequestOutcome<T> {
    match result {
        Ok(value) => {
            kw_info!("{} request_id={} succeeded", label, request_id);
            RequestOutcome::Success(value)
        }
        Err(err) => {
            kw_warn!("{} request_id={} failed: {}", label, request_id, err);
            RequestOutcome::Failed
        }
    }
}
