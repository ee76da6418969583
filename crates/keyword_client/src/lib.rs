//! Keyword client: HTTP access to the search/subscribe backend and the
//! background engine that runs requests for the UI loop.
mod api;
mod engine;
mod types;

pub use api::{ApiSettings, KeywordApi, ReqwestApi};
pub use engine::EngineHandle;
pub use types::{
    ApiError, EngineEvent, FailureKind, RequestId, SearchRequest, SearchResponse,
    SubscribeResponse,
};
