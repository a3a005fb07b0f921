//! Countdown to the ceremony.

use std::time::Duration;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::error::{InvitationError, InvitationResult};

/// 25 December 2025, 16:00 local time (UTC+07:00).
pub const DEFAULT_TARGET: &str = "2025-12-25T16:00:00+07:00";

/// How often the display is recomputed.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Zero-padded countdown fields as shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownDisplay {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub finished: bool,
}

impl CountdownDisplay {
    pub fn finished() -> Self {
        Self {
            days: "00".to_string(),
            hours: "00".to_string(),
            minutes: "00".to_string(),
            seconds: "00".to_string(),
            finished: true,
        }
    }

    fn from_millis(distance: i64) -> Self {
        Self {
            days: format!("{:02}", distance / MS_PER_DAY),
            hours: format!("{:02}", (distance % MS_PER_DAY) / MS_PER_HOUR),
            minutes: format!("{:02}", (distance % MS_PER_HOUR) / MS_PER_MINUTE),
            seconds: format!("{:02}", (distance % MS_PER_MINUTE) / MS_PER_SECOND),
            finished: false,
        }
    }
}

impl std::fmt::Display for CountdownDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ngày {} giờ {} phút {} giây",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    target: DateTime<FixedOffset>,
}

impl Countdown {
    pub fn new(target: DateTime<FixedOffset>) -> Self {
        Self { target }
    }

    /// Parse an RFC 3339 target such as [`DEFAULT_TARGET`].
    pub fn parse(target: &str) -> InvitationResult<Self> {
        DateTime::parse_from_rfc3339(target)
            .map(Self::new)
            .map_err(|e| InvitationError::Config(format!("invalid countdown target {target:?}: {e}")))
    }

    pub fn target(&self) -> DateTime<FixedOffset> {
        self.target
    }

    pub fn remaining_at(&self, now: DateTime<Utc>) -> CountdownDisplay {
        let distance = (self.target.with_timezone(&Utc) - now).num_milliseconds();
        if distance < 0 {
            CountdownDisplay::finished()
        } else {
            CountdownDisplay::from_millis(distance)
        }
    }

    pub fn remaining(&self) -> CountdownDisplay {
        self.remaining_at(Utc::now())
    }

    /// Recompute the display every second until the target passes or
    /// `cancel` fires. The first value is published immediately.
    pub fn spawn_ticker(self, cancel: CancellationToken) -> watch::Receiver<CountdownDisplay> {
        let (tx, rx) = watch::channel(self.remaining());

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!("Countdown ticker cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        let shown = self.remaining();
                        trace!(%shown, "Countdown tick");
                        let finished = shown.finished;
                        if tx.send(shown).is_err() || finished {
                            break;
                        }
                    }
                }
            }
        });

        rx
    }
}

impl Default for Countdown {
    fn default() -> Self {
        // The constant is a valid RFC 3339 timestamp
        match Self::parse(DEFAULT_TARGET) {
            Ok(countdown) => countdown,
            Err(_) => Self::new(DateTime::<Utc>::MIN_UTC.fixed_offset()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_default_target() {
        let countdown = Countdown::default();
        assert_eq!(
            countdown.target().with_timezone(&Utc),
            Utc.with_ymd_and_hms(2025, 12, 25, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_zero_padded_fields() {
        let countdown = Countdown::default();
        let display = countdown.remaining_at(at("2025-12-24T14:58:55+07:00"));
        assert_eq!(display.days, "01");
        assert_eq!(display.hours, "01");
        assert_eq!(display.minutes, "01");
        assert_eq!(display.seconds, "05");
        assert!(!display.finished);
    }

    #[test]
    fn test_days_exceed_two_digits() {
        let countdown = Countdown::default();
        let display = countdown.remaining_at(at("2025-01-01T16:00:00+07:00"));
        assert_eq!(display.days, "358");
        assert_eq!(display.hours, "00");
    }

    #[test]
    fn test_past_target_reads_zero() {
        let countdown = Countdown::default();
        let display = countdown.remaining_at(at("2026-01-01T00:00:00Z"));
        assert_eq!(display, CountdownDisplay::finished());
    }

    #[test]
    fn test_invalid_target() {
        assert!(matches!(
            Countdown::parse("next christmas"),
            Err(InvitationError::Config(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_stops_after_target() {
        let countdown = Countdown::parse("2000-01-01T00:00:00Z").unwrap();
        let mut rx = countdown.spawn_ticker(CancellationToken::new());
        assert!(rx.borrow().finished);

        // The task exits after publishing the frozen display
        while rx.changed().await.is_ok() {}
        assert_eq!(*rx.borrow(), CountdownDisplay::finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_cancel() {
        let countdown = Countdown::parse("2999-01-01T00:00:00Z").unwrap();
        let cancel = CancellationToken::new();
        let mut rx = countdown.spawn_ticker(cancel.clone());

        rx.changed().await.unwrap();
        cancel.cancel();
        while rx.changed().await.is_ok() {}
        assert!(!rx.borrow().finished);
    }
}
