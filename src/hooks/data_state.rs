use std::rc::Rc;

/// Lifecycle of one page-visit fetch: entered at `Loading`, settles in
/// `Loaded` or `Error` exactly once. No retry, no backoff.
#[derive(Clone, PartialEq, Debug)]
pub enum DataState<T> {
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> DataState<T> {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error message if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}
