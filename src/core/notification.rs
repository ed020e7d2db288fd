//! Transient notices shown after a form submission
//!
//! Only one notice is visible at a time. Showing a new notice replaces the
//! current one instead of queueing behind it.

/// How long a notice stays on screen unless dismissed earlier
pub const NOTIFICATION_TIMEOUT_MS: u32 = 3000;

/// Notice severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Message plus severity, as requested by the form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// A notice together with the id of its display instance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveNotice {
    pub id: u64,
    pub notice: Notice,
}

/// Holds the single visible notice
///
/// Every `show` creates a new instance id. `dismiss` only hides the notice
/// when the id still matches, so a late timer from a replaced notice cannot
/// hide its successor.
#[derive(Clone, Debug, Default)]
pub struct NotificationSlot {
    current: Option<ActiveNotice>,
    next_id: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&ActiveNotice> {
        self.current.as_ref()
    }

    /// Replace whatever is shown with `notice`, returning its instance id
    pub fn show(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(ActiveNotice { id, notice });
        id
    }

    /// Hide instance `id`. Returns `false` if it was already gone or replaced.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match &self.current {
            Some(active) if active.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

/// Lets a displayed notice report its dismissal once.
///
/// A toast can be closed by its timer and by the close button; whichever
/// comes second is swallowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DismissOnce {
    fired: bool,
}

impl DismissOnce {
    /// `true` on the first call only
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}
