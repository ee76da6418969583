pub const LABEL_SEARCH: &str = "Search";
pub const LABEL_SEARCHING: &str = "Searching...";
pub const LABEL_SUBSCRIBE: &str = "Subscribe";
pub const LABEL_SUBSCRIBING: &str = "Processing...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub topic: String,
    pub email: String,
    pub keywords: Vec<String>,
    pub status: Option<String>,
    pub error: Option<String>,
    pub busy: bool,
    pub search_label: &'static str,
    pub subscribe_label: &'static str,
    /// Both actions are disabled while a request is outstanding.
    pub actions_enabled: bool,
    pub show_keywords: bool,
    pub dirty: bool,
}
