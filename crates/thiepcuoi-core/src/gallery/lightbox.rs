//! Lightbox viewer state.
//!
//! Two states, `Closed` and `Open`. The [`Gallery`](super::Gallery)
//! controller drives transitions; this type only holds what is on screen.

use super::lazy::Settle;
use super::registry::ImageDescriptor;

/// Alt text shown when the displayed image fails to load.
pub const FALLBACK_ALT: &str = "Image failed to load";

/// Opacity of the image while the next one is loading.
pub const LOADING_OPACITY: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePhase {
    Loading,
    Ready,
    Failed,
}

/// The image currently in the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedImage {
    pub source: String,
    pub alt: String,
    pub phase: ImagePhase,
}

impl DisplayedImage {
    pub fn opacity(&self) -> f32 {
        match self.phase {
            ImagePhase::Loading => LOADING_OPACITY,
            ImagePhase::Ready | ImagePhase::Failed => 1.0,
        }
    }
}

/// Counter text, e.g. `"2 / 3"`.
pub fn counter_text(index: usize, count: usize) -> String {
    format!("{} / {}", index + 1, count)
}

#[derive(Debug, Default)]
pub struct Lightbox {
    open: bool,
    image: Option<DisplayedImage>,
    counter: Option<String>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn image(&self) -> Option<&DisplayedImage> {
        self.image.as_ref()
    }

    pub fn counter(&self) -> Option<&str> {
        self.counter.as_deref()
    }

    pub(crate) fn show(&mut self) {
        self.open = true;
    }

    /// Returns whether the lightbox was open.
    pub(crate) fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Put `image` on screen in the loading phase and update the counter.
    pub(crate) fn render(&mut self, index: usize, count: usize, image: &ImageDescriptor) {
        self.image = Some(DisplayedImage {
            source: image.source().to_string(),
            alt: image.alt_text().to_string(),
            phase: ImagePhase::Loading,
        });
        self.counter = Some(counter_text(index, count));
    }

    /// Finish loading the displayed image. Outcomes for a source that is no
    /// longer displayed are ignored.
    pub(crate) fn settle(&mut self, source: &str, outcome: Settle) -> bool {
        let Some(image) = self.image.as_mut() else {
            return false;
        };
        if image.source != source || image.phase != ImagePhase::Loading {
            return false;
        }
        match outcome {
            Settle::Loaded => image.phase = ImagePhase::Ready,
            Settle::Failed => {
                image.phase = ImagePhase::Failed;
                image.alt = FALLBACK_ALT.to_string();
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_starts_loading() {
        let mut lightbox = Lightbox::new();
        lightbox.render(1, 3, &ImageDescriptor::new("b.jpg", "B"));

        let image = lightbox.image().unwrap();
        assert_eq!(image.phase, ImagePhase::Loading);
        assert_eq!(image.opacity(), LOADING_OPACITY);
        assert_eq!(lightbox.counter(), Some("2 / 3"));
    }

    #[test]
    fn failure_swaps_alt_text() {
        let mut lightbox = Lightbox::new();
        lightbox.render(0, 1, &ImageDescriptor::new("a.jpg", "A"));
        assert!(lightbox.settle("a.jpg", Settle::Failed));

        let image = lightbox.image().unwrap();
        assert_eq!(image.alt, FALLBACK_ALT);
        assert_eq!(image.opacity(), 1.0);
    }

    #[test]
    fn stale_settle_is_ignored() {
        let mut lightbox = Lightbox::new();
        lightbox.render(0, 2, &ImageDescriptor::new("a.jpg", "A"));
        lightbox.render(1, 2, &ImageDescriptor::new("b.jpg", "B"));
        assert!(!lightbox.settle("a.jpg", Settle::Failed));
        assert_eq!(lightbox.image().unwrap().alt, "B");
    }
}
