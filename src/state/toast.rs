//! Transient notification queue

use super::forms::{NotificationKind, Notifier};
use std::time::{Duration, Instant};

/// Lifecycle phase of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Sliding in from the right edge
    Entering,
    Visible,
    /// Sliding out to the right edge
    Leaving,
    Expired,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

impl Toast {
    /// Slide-in and slide-out duration
    pub const TRANSITION: Duration = Duration::from_millis(300);
    /// Time until the slide-out starts
    pub const VISIBLE_FOR: Duration = Duration::from_secs(3);

    pub fn new(message: impl Into<String>, kind: NotificationKind, shown_at: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at,
        }
    }

    pub fn phase(&self, now: Instant) -> ToastPhase {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed < Self::TRANSITION {
            ToastPhase::Entering
        } else if elapsed < Self::VISIBLE_FOR {
            ToastPhase::Visible
        } else if elapsed < Self::VISIBLE_FOR + Self::TRANSITION {
            ToastPhase::Leaving
        } else {
            ToastPhase::Expired
        }
    }

    /// Fraction of the toast slid into view (0.0 hidden, 1.0 fully shown)
    pub fn reveal(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        let transition = Self::TRANSITION.as_secs_f32();
        match self.phase(now) {
            ToastPhase::Entering => simple_easing::cubic_out(elapsed.as_secs_f32() / transition),
            ToastPhase::Visible => 1.0,
            ToastPhase::Leaving => {
                let leaving = (elapsed - Self::VISIBLE_FOR).as_secs_f32() / transition;
                1.0 - simple_easing::cubic_in(leaving)
            }
            ToastPhase::Expired => 0.0,
        }
    }
}

/// Stack of toasts, newest last
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, toast: Toast) {
        tracing::debug!(
            message = %toast.message,
            kind = ?toast.kind,
            queued = self.len() + 1,
            "showing notification"
        );
        self.toasts.push(toast);
    }

    /// Drop toasts whose exit transition has finished
    pub fn prune(&mut self, now: Instant) {
        self.toasts
            .retain(|toast| toast.phase(now) != ToastPhase::Expired);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Whether any toast is mid-transition and needs fast redraws
    pub fn is_animating(&self, now: Instant) -> bool {
        self.toasts.iter().any(|toast| {
            matches!(
                toast.phase(now),
                ToastPhase::Entering | ToastPhase::Leaving
            )
        })
    }
}

impl Notifier for ToastQueue {
    fn display(&mut self, message: &str, kind: NotificationKind) {
        self.push(Toast::new(message, kind, Instant::now()));
    }
}
