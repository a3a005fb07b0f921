//! Transient toast notifications.

use std::time::Duration;

use tokio::time::Instant;

/// How long a notification stays fully visible.
pub const VISIBLE_FOR: Duration = Duration::from_secs(3);

/// Length of the slide-out animation before removal.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
}

impl NotificationKind {
    /// Background color of the toast.
    pub fn color(self) -> &'static str {
        match self {
            NotificationKind::Success => "#4CAF50",
            NotificationKind::Info => "#2196F3",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification-success",
            NotificationKind::Info => "notification notification-info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    Leaving,
    Gone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

impl Notification {
    pub fn phase_at(&self, now: Instant) -> NotificationPhase {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed < VISIBLE_FOR {
            NotificationPhase::Visible
        } else if elapsed < VISIBLE_FOR + EXIT_ANIMATION {
            NotificationPhase::Leaving
        } else {
            NotificationPhase::Gone
        }
    }
}

/// Notifications currently on screen, newest last.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    active: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.show_at(message, kind, Instant::now())
    }

    pub fn show_at(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push(Notification {
            id,
            message: message.into(),
            kind,
            shown_at: now,
        });
        id
    }

    /// Drop notifications whose exit animation has finished.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.active.len();
        self.active
            .retain(|n| n.phase_at(now) != NotificationPhase::Gone);
        before - self.active.len()
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_lifecycle() {
        let mut center = NotificationCenter::new();
        center.show("Đã mở Google Calendar!", NotificationKind::Success);
        let n = center.active()[0].clone();

        assert_eq!(n.phase_at(Instant::now()), NotificationPhase::Visible);
        tokio::time::advance(VISIBLE_FOR).await;
        assert_eq!(n.phase_at(Instant::now()), NotificationPhase::Leaving);
        assert_eq!(center.prune(Instant::now()), 0);

        tokio::time::advance(EXIT_ANIMATION).await;
        assert_eq!(center.prune(Instant::now()), 1);
        assert!(center.is_empty());
    }

    #[test]
    fn test_colors() {
        assert_eq!(NotificationKind::Success.color(), "#4CAF50");
        assert_eq!(NotificationKind::Info.color(), "#2196F3");
    }
}
