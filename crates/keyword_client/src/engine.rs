use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use keyword_logging::kw_debug;

use crate::{EngineEvent, KeywordApi, RequestId};

enum EngineCommand {
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

/// Runs requests on a background tokio runtime and hands completions back
/// over a channel, so the UI loop never blocks on the network.
///
/// Requests run concurrently; completions arrive in the order they resolve.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(api: Arc<dyn KeywordApi>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("keyword-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let api = api.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(api.as_ref(), command, event_tx).await;
                    });
                }
                kw_debug!("engine command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn search(&self, request_id: RequestId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            request_id,
            query: query.into(),
        });
    }

    pub fn subscribe(
        &self,
        request_id: RequestId,
        email: impl Into<String>,
        topic: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::Subscribe {
            request_id,
            email: email.into(),
            topic: topic.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    api: &dyn KeywordApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Search { request_id, query } => EngineEvent::SearchCompleted {
            request_id,
            result: api.search(&query).await,
        },
        EngineCommand::Subscribe {
            request_id,
            email,
            topic,
        } => EngineEvent::SubscribeCompleted {
            request_id,
            result: api.subscribe(&email, &topic).await,
        },
    };
    let _ = event_tx.send(event);
}
