use crate::view_model::{
    AppViewModel, LABEL_SEARCH, LABEL_SEARCHING, LABEL_SUBSCRIBE, LABEL_SUBSCRIBING,
};

pub type RequestId = u64;

/// The shared status/error slot. Holding both in one value keeps them
/// mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Notice {
    #[default]
    None,
    Status(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    topic: String,
    email: String,
    keywords: Vec<String>,
    notice: Notice,
    busy: bool,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let (status, error) = match &self.notice {
            Notice::None => (None, None),
            Notice::Status(text) => (Some(text.clone()), None),
            Notice::Error(text) => (None, Some(text.clone())),
        };
        AppViewModel {
            topic: self.topic.clone(),
            email: self.email.clone(),
            keywords: self.keywords.clone(),
            status,
            error,
            busy: self.busy,
            search_label: if self.busy { LABEL_SEARCHING } else { LABEL_SEARCH },
            subscribe_label: if self.busy {
                LABEL_SUBSCRIBING
            } else {
                LABEL_SUBSCRIBE
            },
            actions_enabled: !self.busy,
            show_keywords: !self.keywords.is_empty(),
            dirty: self.dirty,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_topic(&mut self, topic: String) {
        self.topic = topic;
        self.mark_dirty();
    }

    pub(crate) fn set_email(&mut self, email: String) {
        self.email = email;
        self.mark_dirty();
    }

    pub(crate) fn clear_email(&mut self) {
        self.email.clear();
        self.mark_dirty();
    }

    /// Replaces the keyword list wholesale; results are never merged.
    pub(crate) fn replace_keywords(&mut self, keywords: Vec<String>) {
        self.keywords = keywords;
        self.mark_dirty();
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = notice;
        self.mark_dirty();
    }

    pub(crate) fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.mark_dirty();
    }

    pub(crate) fn next_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.last_request_id
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
