use std::sync::Arc;
use tokio::sync::RwLock;

/// Outcome of one user action: `Idle` until submitted, then `Succeeded` or
/// `Failed`.
///
/// The in-flight phase is the awaited backend call itself; pages are rendered
/// only once it settles, so it is not stored. There is no cancellation and no
/// queue.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionState<T> {
    Idle,
    Succeeded(T),
    Failed(String),
}

impl<T> Default for ActionState<T> {
    fn default() -> Self {
        ActionState::Idle
    }
}

impl<T> ActionState<T> {
    pub fn succeed(&mut self, value: T) {
        *self = ActionState::Succeeded(value);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = ActionState::Failed(message.into());
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ActionState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ActionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// The one-shot status line shared by the upload and analysis actions.
///
/// Writes are unconditional: whichever action resolves last owns the message.
/// Reading with [`take`](StatusBoard::take) consumes it, so a message is shown
/// on the next page load only.
#[derive(Debug, Clone, Default)]
pub struct StatusBoard {
    message: Arc<RwLock<Option<String>>>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, message: impl Into<String>) {
        *self.message.write().await = Some(message.into());
    }

    /// Returns the pending message and clears it.
    pub async fn take(&self) -> Option<String> {
        self.message.write().await.take()
    }
}
