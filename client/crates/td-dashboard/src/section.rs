use td_remote::RemoteResult;

use log::warn;

/// One independently fetched dashboard list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<T> {
    Loaded(Vec<T>),
    /// Fetch failed; holds the displayable reason
    Failed(String),
}

impl<T> Section<T> {
    /// Section from a fetch result, labelling failures with `what`
    pub fn from_result(what: &str, result: RemoteResult<Vec<T>>) -> Self {
        match result {
            Ok(items) => Section::Loaded(items),
            Err(e) => {
                warn!("Failed to load {what}: {e}");
                Section::Failed(format!("Failed to load {what}: {}", e.service_message()))
            }
        }
    }

    pub fn items(&self) -> Option<&[T]> {
        match self {
            Section::Loaded(items) => Some(items),
            Section::Failed(_) => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Section::Loaded(_))
    }
}
