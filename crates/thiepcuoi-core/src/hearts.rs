//! Falling-hearts decoration.

use std::time::Duration;

use rand::Rng;
use tokio::time::Instant;
use tracing::trace;

/// Delay between page load and the first heart.
pub const START_DELAY: Duration = Duration::from_secs(1);

/// Extra time a heart stays in the tree after its animation.
pub const LINGER: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq)]
pub struct Heart {
    pub id: u64,
    /// Horizontal position, 0..100 %
    pub left_percent: f64,
    pub font_size_px: f64,
    pub duration: Duration,
    pub delay: Duration,
    pub spawned_at: Instant,
}

impl Heart {
    pub fn expires_at(&self) -> Instant {
        self.spawned_at + self.duration + LINGER
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; font-size: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left_percent,
            self.font_size_px,
            self.duration.as_secs_f64(),
            self.delay.as_secs_f64()
        )
    }
}

#[derive(Debug, Default)]
pub struct HeartRain {
    interval: Option<Duration>,
    next_spawn: Option<Instant>,
    hearts: Vec<Heart>,
    next_id: u64,
}

impl HeartRain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Spawn interval picked by the last start.
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn next_spawn(&self) -> Option<Instant> {
        self.next_spawn
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    /// Start spawning every `300 + rand·500` ms. No-op while running.
    pub fn start<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        if self.is_running() {
            return;
        }
        let interval = Duration::from_secs_f64((300.0 + rng.random_range(0.0..500.0)) / 1000.0);
        self.interval = Some(interval);
        self.next_spawn = Some(now + interval);
    }

    /// Stop spawning. Hearts already falling finish on their own.
    pub fn stop(&mut self) {
        self.interval = None;
        self.next_spawn = None;
    }

    /// Page visibility changed.
    pub fn set_visible<R: Rng + ?Sized>(&mut self, visible: bool, now: Instant, rng: &mut R) {
        if visible {
            self.start(now, rng);
        } else {
            self.stop();
        }
    }

    /// Spawn at most one due heart and drop expired ones. Returns whether a
    /// heart spawned.
    ///
    /// A stalled tick never bursts: the next spawn is scheduled one interval
    /// after `now`, not after the missed due instant.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        self.hearts.retain(|h| h.expires_at() > now);

        match (self.interval, self.next_spawn) {
            (Some(interval), Some(due)) if due <= now => {
                self.spawn(now, rng);
                self.next_spawn = Some(now + interval);
                true
            }
            _ => false,
        }
    }

    fn spawn<R: Rng + ?Sized>(&mut self, at: Instant, rng: &mut R) {
        let heart = Heart {
            id: self.next_id,
            left_percent: rng.random_range(0.0..100.0),
            font_size_px: 15.0 + rng.random_range(0.0..15.0),
            duration: Duration::from_secs_f64(3.0 + rng.random_range(0.0..3.0)),
            delay: Duration::from_secs_f64(rng.random_range(0.0..2.0)),
            spawned_at: at,
        };
        trace!(id = heart.id, "Heart spawned");
        self.next_id += 1;
        self.hearts.push(heart);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[tokio::test(start_paused = true)]
    async fn test_spawn_and_expire() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut rain = HeartRain::new();
        rain.start(Instant::now(), &mut rng);

        let interval = rain.interval().unwrap();
        assert!(interval >= Duration::from_millis(300) && interval < Duration::from_millis(800));

        assert!(!rain.tick(Instant::now(), &mut rng));
        for _ in 0..3 {
            tokio::time::advance(interval).await;
            assert!(rain.tick(Instant::now(), &mut rng));
        }
        assert_eq!(rain.hearts().len(), 3);

        for heart in rain.hearts() {
            assert!((0.0..100.0).contains(&heart.left_percent));
            assert!((15.0..30.0).contains(&heart.font_size_px));
            assert!(heart.duration >= Duration::from_secs(3));
            assert!(heart.delay < Duration::from_secs(2));
        }

        rain.stop();
        tokio::time::advance(Duration::from_secs(9)).await;
        assert!(!rain.tick(Instant::now(), &mut rng));
        assert!(rain.hearts().is_empty());
    }

    /// A long stall yields one heart, then the cadence resumes from the tick
    #[tokio::test(start_paused = true)]
    async fn test_stalled_tick_spawns_once() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut rain = HeartRain::new();
        rain.start(Instant::now(), &mut rng);
        let interval = rain.interval().unwrap();

        tokio::time::advance(interval * 10).await;
        let now = Instant::now();
        assert!(rain.tick(now, &mut rng));
        assert_eq!(rain.hearts().len(), 1);
        assert_eq!(rain.hearts()[0].spawned_at, now);
        assert_eq!(rain.next_spawn(), Some(now + interval));

        assert!(!rain.tick(now, &mut rng));
        assert_eq!(rain.hearts().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_visibility_toggles() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut rain = HeartRain::new();
        rain.set_visible(false, Instant::now(), &mut rng);
        assert!(!rain.is_running());

        rain.set_visible(true, Instant::now(), &mut rng);
        let first = rain.interval();
        rain.set_visible(true, Instant::now(), &mut rng);
        assert_eq!(rain.interval(), first);
    }
}
