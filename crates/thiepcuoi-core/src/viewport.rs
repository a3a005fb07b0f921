//! Viewport geometry and proximity detection.
//!
//! A [`ProximityObserver`] watches a set of elements and reports the ones
//! whose bounding box came near enough to the viewport. Each element is
//! reported at most once: it is unobserved as soon as it triggers.
//!
//! ```text
//!   ┌──────────── root margin ────────────┐
//!   │   ┌──────── viewport ────────┐       │
//!   │   │                          │       │
//!   │   └──────────────────────────┘       │
//!   │        ┌──────┐  <- triggers when    │
//!   └────────│ tile │─── ratio >= threshold┘
//!            └──────┘
//! ```

use std::hash::Hash;

/// An axis-aligned rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Overlap of two rectangles. Edge-adjacent rectangles overlap with
    /// zero area.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// Grow (or shrink, for negative values) each side by the margin.
    pub fn expand(&self, margin: &RootMargin) -> Rect {
        Rect::new(
            self.x - margin.left,
            self.y - margin.top,
            self.width + margin.left + margin.right,
            self.height + margin.top + margin.bottom,
        )
    }
}

/// Margin applied around the viewport before testing intersection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(px: f64) -> Self {
        Self::new(px, px, px, px)
    }
}

/// When an element counts as "near" the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityConfig {
    pub root_margin: RootMargin,
    /// Minimum visible fraction of the element, in `0.0..=1.0`
    pub threshold: f64,
}

impl ProximityConfig {
    /// Gallery images start loading 100px before they scroll into view.
    pub const fn lazy_load() -> Self {
        Self {
            root_margin: RootMargin::uniform(100.0),
            threshold: 0.01,
        }
    }

    /// Section animations fire once a tenth of the element is 50px above
    /// the bottom edge.
    pub const fn scroll_reveal() -> Self {
        Self {
            root_margin: RootMargin::new(0.0, 0.0, -50.0, 0.0),
            threshold: 0.1,
        }
    }

    /// Whether `target` is near enough to `viewport` to trigger.
    pub fn is_near(&self, target: &Rect, viewport: &Rect) -> bool {
        let root = viewport.expand(&self.root_margin);
        let Some(overlap) = target.intersection(&root) else {
            return false;
        };

        let ratio = if target.area() > 0.0 {
            overlap.area() / target.area()
        } else {
            // Zero-sized elements count as fully visible once they touch the root
            1.0
        };
        ratio > 0.0 && ratio >= self.threshold
    }
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self::lazy_load()
    }
}

/// Watches elements and reports each one once when it nears the viewport.
#[derive(Debug, Clone)]
pub struct ProximityObserver<K> {
    config: ProximityConfig,
    watched: Vec<K>,
    connected: bool,
}

impl<K: Copy + Eq + Hash> ProximityObserver<K> {
    pub fn new(config: ProximityConfig) -> Self {
        Self {
            config,
            watched: Vec::new(),
            connected: true,
        }
    }

    pub fn config(&self) -> &ProximityConfig {
        &self.config
    }

    /// Start watching `key`. Watching a key twice is a no-op.
    pub fn observe(&mut self, key: K) {
        if !self.connected || self.watched.contains(&key) {
            return;
        }
        self.watched.push(key);
    }

    pub fn unobserve(&mut self, key: &K) {
        self.watched.retain(|k| k != key);
    }

    pub fn is_observing(&self, key: &K) -> bool {
        self.watched.contains(key)
    }

    pub fn observed_count(&self) -> usize {
        self.watched.len()
    }

    /// Stop watching everything. Later `observe` calls are ignored.
    pub fn disconnect(&mut self) {
        self.watched.clear();
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Test every watched element against the viewport.
    ///
    /// Elements whose rectangle is unknown (`rect_of` returns `None`) stay
    /// watched. Triggered elements are returned in observation order and
    /// are no longer watched.
    pub fn check<F>(&mut self, viewport: &Rect, mut rect_of: F) -> Vec<K>
    where
        F: FnMut(&K) -> Option<Rect>,
    {
        let config = self.config;
        let mut triggered = Vec::new();
        self.watched.retain(|key| match rect_of(key) {
            Some(rect) if config.is_near(&rect, viewport) => {
                triggered.push(*key);
                false
            }
            _ => true,
        });
        triggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn element_inside_viewport_is_near() {
        let config = ProximityConfig::lazy_load();
        assert!(config.is_near(&Rect::new(10.0, 10.0, 100.0, 100.0), &viewport()));
    }

    #[test]
    fn element_within_margin_is_near() {
        let config = ProximityConfig::lazy_load();
        // 50px below the fold, inside the 100px margin
        assert!(config.is_near(&Rect::new(0.0, 650.0, 100.0, 100.0), &viewport()));
    }

    #[test]
    fn element_beyond_margin_is_not_near() {
        let config = ProximityConfig::lazy_load();
        assert!(!config.is_near(&Rect::new(0.0, 800.0, 100.0, 100.0), &viewport()));
    }

    #[test]
    fn negative_margin_shrinks_the_root() {
        let config = ProximityConfig::scroll_reveal();
        // Occupies the last 40px of the viewport, which the -50px margin cuts off
        assert!(!config.is_near(&Rect::new(0.0, 560.0, 100.0, 40.0), &viewport()));
        assert!(config.is_near(&Rect::new(0.0, 400.0, 100.0, 100.0), &viewport()));
    }

    #[test]
    fn observer_reports_each_key_once() {
        let mut observer = ProximityObserver::new(ProximityConfig::lazy_load());
        observer.observe(1u32);
        observer.observe(2u32);
        observer.observe(2u32);
        assert_eq!(observer.observed_count(), 2);

        let rects = |k: &u32| match k {
            1 => Some(Rect::new(0.0, 0.0, 10.0, 10.0)),
            _ => Some(Rect::new(0.0, 5000.0, 10.0, 10.0)),
        };
        assert_eq!(observer.check(&viewport(), rects), vec![1]);
        assert!(observer.check(&viewport(), rects).is_empty());
        assert!(observer.is_observing(&2));
    }

    #[test]
    fn disconnected_observer_ignores_new_keys() {
        let mut observer = ProximityObserver::new(ProximityConfig::lazy_load());
        observer.observe(1u32);
        observer.disconnect();
        observer.observe(2u32);
        assert_eq!(observer.observed_count(), 0);
        assert!(!observer.is_connected());
    }
}
