pub mod auth_success;
pub mod dashboard;
pub mod home;
pub mod upload;

/// The places the client can navigate to. Each view flow returns the next
/// route instead of navigating itself, which keeps the flows testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    AuthSuccess,
    Dashboard,
    Done,
}

/// Per-view request state. Transitions are driven solely by the single
/// outstanding network call: Idle -> Loading -> Success | Error.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> ViewState<T> {
    pub fn start(&mut self) {
        *self = ViewState::Loading;
    }

    pub fn resolve(&mut self, result: crate::error::Result<T>) {
        *self = match result {
            Ok(value) => ViewState::Success(value),
            Err(e) => ViewState::Error(e.to_string()),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}
