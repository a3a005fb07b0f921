//! Page chrome: navbar, anchor scrolling, parallax, scroll reveal, modals.

use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::viewport::{ProximityConfig, ProximityObserver, Rect};

/// Scroll distance after which the navbar turns solid.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Height kept clear above an anchor target for the fixed navbar.
pub const ANCHOR_OFFSET: f64 = 80.0;

pub const PARALLAX_FACTOR: f64 = 0.5;

/// Minimum spacing between parallax updates (~60 fps).
pub const PARALLAX_THROTTLE: Duration = Duration::from_millis(16);

/// Navbar and mobile menu state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavBar {
    scrolled: bool,
    menu_open: bool,
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > NAVBAR_SCROLL_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Any nav link click closes the mobile menu.
    pub fn link_clicked(&mut self) {
        self.menu_open = false;
    }
}

/// Scroll position for an in-page anchor whose target sits at `offset_top`.
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - ANCHOR_OFFSET
}

/// Hero parallax, throttled.
#[derive(Debug, Clone, Default)]
pub struct Parallax {
    last_update: Option<Instant>,
}

impl Parallax {
    pub fn new() -> Self {
        Self::default()
    }

    /// New hero `translateY` in px, or `None` to leave it unchanged.
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64, now: Instant) -> Option<f64> {
        if let Some(last) = self.last_update {
            if now.saturating_duration_since(last) < PARALLAX_THROTTLE {
                return None;
            }
        }
        self.last_update = Some(now);

        (scroll_y < viewport_height).then_some(scroll_y * PARALLAX_FACTOR)
    }
}

/// Entrance animation of a revealable section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    FadeInUp,
    SlideInLeft,
    SlideInRight,
}

impl RevealKind {
    pub fn class_name(self) -> &'static str {
        match self {
            RevealKind::FadeInUp => "fade-in-up",
            RevealKind::SlideInLeft => "slide-in-left",
            RevealKind::SlideInRight => "slide-in-right",
        }
    }
}

/// Adds `animated` to sections once they scroll into view.
#[derive(Debug, Clone)]
pub struct ScrollReveal {
    kinds: Vec<RevealKind>,
    animated: Vec<bool>,
    observer: Option<ProximityObserver<usize>>,
}

impl ScrollReveal {
    /// Watch `kinds.len()` sections. Without proximity detection every
    /// section is animated at once.
    pub fn new(kinds: Vec<RevealKind>, proximity_available: bool) -> Self {
        let count = kinds.len();
        let observer = proximity_available.then(|| {
            let mut observer = ProximityObserver::new(ProximityConfig::scroll_reveal());
            for index in 0..count {
                observer.observe(index);
            }
            observer
        });

        Self {
            kinds,
            animated: vec![!proximity_available; count],
            observer,
        }
    }

    pub fn kind(&self, index: usize) -> Option<RevealKind> {
        self.kinds.get(index).copied()
    }

    pub fn is_animated(&self, index: usize) -> bool {
        self.animated.get(index).copied().unwrap_or(false)
    }

    /// Class list for section `index`.
    pub fn classes(&self, index: usize) -> String {
        let Some(kind) = self.kind(index) else {
            return String::new();
        };
        let mut classes = kind.class_name().to_string();
        if self.observer.is_some() {
            classes.push_str(" animate-on-scroll");
        }
        if self.is_animated(index) {
            classes.push_str(" animated");
        }
        classes
    }

    /// Returns the sections that became animated.
    pub fn viewport_changed<F>(&mut self, viewport: &Rect, mut rect_of: F) -> Vec<usize>
    where
        F: FnMut(usize) -> Option<Rect>,
    {
        let Some(observer) = self.observer.as_mut() else {
            return Vec::new();
        };
        let entered = observer.check(viewport, |index| rect_of(*index));
        for &index in &entered {
            if let Some(flag) = self.animated.get_mut(index) {
                *flag = true;
            }
        }
        entered
    }

    pub fn disconnect(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer.disconnect();
        }
    }
}

/// The two dialogs on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    Wish,
    Confirm,
}

impl ModalId {
    pub fn element_id(self) -> &'static str {
        match self {
            ModalId::Wish => "wishModal",
            ModalId::Confirm => "confirmModal",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modals {
    wish: bool,
    confirm: bool,
    scroll_locked: bool,
}

impl Modals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        match id {
            ModalId::Wish => self.wish,
            ModalId::Confirm => self.confirm,
        }
    }

    /// Whether an open modal holds the page scroll.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn open(&mut self, id: ModalId) {
        *self.flag(id) = true;
        self.scroll_locked = true;
        debug!(modal = id.element_id(), "Modal opened");
    }

    pub fn close(&mut self, id: ModalId) {
        *self.flag(id) = false;
        self.scroll_locked = false;
    }

    /// Click on the dimmed area of a modal (not its content).
    pub fn backdrop_clicked(&mut self, id: ModalId) {
        self.close(id);
    }

    fn flag(&mut self, id: ModalId) -> &mut bool {
        match id {
            ModalId::Wish => &mut self.wish,
            ModalId::Confirm => &mut self.confirm,
        }
    }
}
