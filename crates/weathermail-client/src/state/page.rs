use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageColor {
    Green,
    Red,
}

/// One line of feedback shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub color: MessageColor,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: MessageColor::Green,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: MessageColor::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageArea {
    /// Below the register and login forms
    General,
    /// Inside the subscription section
    Subscription,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub message: Option<StatusMessage>,
    pub subscription_message: Option<StatusMessage>,
    pub subscription_visible: bool,
}

/// What the window currently shows. Handlers write here, the UI reads.
/// Concurrent writers are not ordered: the last one to finish wins.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    inner: Arc<RwLock<PageSnapshot>>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn show(&self, area: MessageArea, message: StatusMessage) {
        let mut page = self.inner.write().await;
        match area {
            MessageArea::General => page.message = Some(message),
            MessageArea::Subscription => page.subscription_message = Some(message),
        }
    }

    pub async fn reveal_subscription(&self) {
        self.inner.write().await.subscription_visible = true;
    }

    pub async fn snapshot(&self) -> PageSnapshot {
        self.inner.read().await.clone()
    }
}
