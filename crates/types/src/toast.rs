use std::time::Duration;

/// Default time a toast stays on screen.
pub const DEFAULT_TOAST_LIFE: Duration = Duration::from_millis(3000);

/// Visual severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warn,
    Error,
}

/// A transient notification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub severity: Severity,
    /// Bold headline (e.g., "Success")
    pub summary: String,
    /// Body text
    pub detail: String,
    /// How long the toast remains visible
    pub life: Duration,
}

impl Toast {
    pub fn new(severity: Severity, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity,
            summary: summary.into(),
            detail: detail.into(),
            life: DEFAULT_TOAST_LIFE,
        }
    }

    pub fn success(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Success, summary, detail)
    }

    pub fn with_life(mut self, life: Duration) -> Self {
        self.life = life;
        self
    }
}
