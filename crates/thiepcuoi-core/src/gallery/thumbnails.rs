//! Thumbnail strip under the lightbox image.

use tokio::sync::watch;
use tracing::debug;

use super::registry::ImageDescriptor;

/// One entry of the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    /// Index tag, the position of the image in the registry
    pub index: usize,
    pub source: String,
    pub alt: String,
    /// Hidden after the thumbnail itself failed to load
    pub hidden: bool,
}

impl Thumbnail {
    /// Value of the element's index tag.
    pub fn tag(&self) -> String {
        self.index.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

impl ScrollBehavior {
    pub fn as_str(self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
            ScrollBehavior::Instant => "instant",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    Nearest,
    Center,
    End,
}

impl ScrollAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            ScrollAlign::Nearest => "nearest",
            ScrollAlign::Center => "center",
            ScrollAlign::End => "end",
        }
    }
}

/// Bring the active thumbnail into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub index: usize,
    pub behavior: ScrollBehavior,
    pub block: ScrollAlign,
    pub inline: ScrollAlign,
}

impl ScrollRequest {
    pub fn smooth(index: usize) -> Self {
        Self {
            index,
            behavior: ScrollBehavior::Smooth,
            block: ScrollAlign::Nearest,
            inline: ScrollAlign::Center,
        }
    }

    /// Plain jump, for when smooth scrolling is not supported.
    pub fn fallback(self) -> Self {
        Self {
            index: self.index,
            behavior: ScrollBehavior::Instant,
            block: ScrollAlign::End,
            inline: ScrollAlign::Nearest,
        }
    }
}

/// Thumbnails for every registered image, with one active entry.
#[derive(Debug, Default)]
pub struct ThumbnailStrip {
    entries: Vec<Thumbnail>,
    active: Option<usize>,
    built: bool,
}

impl ThumbnailStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one thumbnail per image. Only the first non-empty build takes
    /// effect; the first entry starts active.
    pub fn render(&mut self, images: &[ImageDescriptor]) -> bool {
        if self.built || images.is_empty() {
            return false;
        }

        self.entries = images
            .iter()
            .enumerate()
            .map(|(index, img)| Thumbnail {
                index,
                source: img.source().to_string(),
                alt: img.alt_text().to_string(),
                hidden: false,
            })
            .collect();
        self.active = Some(0);
        self.built = true;
        debug!(count = self.entries.len(), "Thumbnail strip built");
        true
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn entries(&self) -> &[Thumbnail] {
        &self.entries
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Resolve a clicked element's index tag. Malformed or out-of-range
    /// tags resolve to `None`.
    pub fn index_for_tag(&self, tag: &str) -> Option<usize> {
        let index = tag.trim().parse::<usize>().ok()?;
        (index < self.entries.len()).then_some(index)
    }

    /// Move the active marker. Returns whether it moved.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.entries.len() || self.active == Some(index) {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// Apply the latest navigation index, if it changed.
    pub fn follow(&mut self, nav: &mut watch::Receiver<usize>) -> bool {
        if !nav.has_changed().unwrap_or(false) {
            return false;
        }
        let index = *nav.borrow_and_update();
        self.set_active(index)
    }

    /// Hide a thumbnail whose image is broken.
    pub fn mark_broken(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.hidden = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<ImageDescriptor> {
        (0..n)
            .map(|i| ImageDescriptor::new(format!("{i}.jpg"), format!("photo {i}")))
            .collect()
    }

    #[test]
    fn builds_once() {
        let mut strip = ThumbnailStrip::new();
        assert!(!strip.render(&[]));
        assert!(strip.render(&images(3)));
        assert!(!strip.render(&images(5)));
        assert_eq!(strip.entries().len(), 3);
        assert_eq!(strip.active(), Some(0));
    }

    #[test]
    fn resolves_tags() {
        let mut strip = ThumbnailStrip::new();
        strip.render(&images(3));
        assert_eq!(strip.index_for_tag("2"), Some(2));
        assert_eq!(strip.index_for_tag("3"), None);
        assert_eq!(strip.index_for_tag("-1"), None);
        assert_eq!(strip.index_for_tag("abc"), None);
    }

    #[test]
    fn follows_navigation() {
        let (tx, mut rx) = watch::channel(0usize);
        let mut strip = ThumbnailStrip::new();
        strip.render(&images(3));

        assert!(!strip.follow(&mut rx));
        tx.send_replace(2);
        assert!(strip.follow(&mut rx));
        assert_eq!(strip.active(), Some(2));
    }

    #[test]
    fn broken_thumbnail_is_hidden() {
        let mut strip = ThumbnailStrip::new();
        strip.render(&images(2));
        strip.mark_broken(1);
        assert!(strip.entries()[1].hidden);
        assert!(!strip.entries()[0].hidden);
    }

    #[test]
    fn fallback_scroll_is_instant() {
        let req = ScrollRequest::smooth(4).fallback();
        assert_eq!(req.index, 4);
        assert_eq!(req.behavior, ScrollBehavior::Instant);
    }
}
