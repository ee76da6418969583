//! Keyword client core: pure state machine and view-model helpers.
mod effect;
mod interaction;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use interaction::{
    EMAIL_REQUIRED_MESSAGE, NO_KEYWORDS_MESSAGE, SEARCH_FAILED_MESSAGE, SUBSCRIBE_FAILED_MESSAGE,
};
pub use msg::{Msg, RequestOutcome};
pub use state::{AppState, Notice, RequestId};
pub use update::update;
pub use view_model::{AppViewModel, LABEL_SEARCH, LABEL_SEARCHING, LABEL_SUBSCRIBE, LABEL_SUBSCRIBING};
