//! Hero background slider.
//!
//! Timing is expressed as a due instant rather than a running timer, so the
//! UI can `sleep_until(slider.due())` and call [`Slider::tick`].

use std::time::Duration;

use tokio::time::Instant;

use crate::gallery::wrap_index;

/// Time each slide stays up before auto-advancing.
pub const SLIDE_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Slider {
    count: usize,
    current: usize,
    due: Option<Instant>,
}

impl Slider {
    /// A slider over `count` slides, auto-advancing from `now`.
    /// With no slides the slider is inert.
    pub fn new(count: usize, now: Instant) -> Self {
        Self {
            count,
            current: 0,
            due: (count > 0).then(|| now + SLIDE_DURATION),
        }
    }

    pub fn is_inert(&self) -> bool {
        self.count == 0
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Index of the active slide and active dot.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Next auto-advance, `None` while paused or inert.
    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    pub fn is_paused(&self) -> bool {
        self.due.is_none() && !self.is_inert()
    }

    /// Previous-button press. Restarts the auto timer.
    pub fn prev(&mut self, now: Instant) {
        self.step(-1, now);
    }

    /// Next-button press. Restarts the auto timer.
    pub fn next(&mut self, now: Instant) {
        self.step(1, now);
    }

    /// Dot click. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.count {
            return false;
        }
        self.current = index;
        self.restart(now);
        true
    }

    /// Pointer entered the slider.
    pub fn pause(&mut self) {
        self.due = None;
    }

    /// Pointer left the slider.
    pub fn resume(&mut self, now: Instant) {
        self.restart(now);
    }

    /// Auto-advance if due. Returns whether the slide changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.current = wrap_index(self.current, 1, self.count);
                self.due = Some(due + SLIDE_DURATION);
                true
            }
            _ => false,
        }
    }

    fn step(&mut self, offset: isize, now: Instant) {
        if self.is_inert() {
            return;
        }
        self.current = wrap_index(self.current, offset, self.count);
        self.restart(now);
    }

    fn restart(&mut self, now: Instant) {
        if !self.is_inert() {
            self.due = Some(now + SLIDE_DURATION);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_wraps() {
        let mut slider = Slider::new(2, Instant::now());
        assert!(!slider.tick(Instant::now()));

        tokio::time::advance(SLIDE_DURATION).await;
        assert!(slider.tick(Instant::now()));
        assert_eq!(slider.current(), 1);

        tokio::time::advance(SLIDE_DURATION).await;
        assert!(slider.tick(Instant::now()));
        assert_eq!(slider.current(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_navigation_restarts_timer() {
        let mut slider = Slider::new(3, Instant::now());
        tokio::time::advance(Duration::from_secs(4)).await;
        slider.prev(Instant::now());
        assert_eq!(slider.current(), 2);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(!slider.tick(Instant::now()));
        tokio::time::advance(Duration::from_secs(3)).await;
        assert!(slider.tick(Instant::now()));
        assert_eq!(slider.current(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hover_pauses() {
        let mut slider = Slider::new(3, Instant::now());
        slider.pause();
        assert!(slider.is_paused());
        tokio::time::advance(SLIDE_DURATION * 3).await;
        assert!(!slider.tick(Instant::now()));

        slider.resume(Instant::now());
        assert_eq!(slider.due(), Some(Instant::now() + SLIDE_DURATION));
    }

    #[test]
    fn test_empty_slider_is_inert() {
        let now = Instant::now();
        let mut slider = Slider::new(0, now);
        slider.next(now);
        slider.resume(now);
        assert!(slider.is_inert());
        assert_eq!(slider.due(), None);
        assert!(!slider.go_to(0, now));
    }
}
