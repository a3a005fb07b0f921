//! The gallery controller.
//!
//! One [`Gallery`] owns everything the photo section needs: the registry,
//! the lightbox and its navigation state, the thumbnail strip and the
//! lazy-load batcher. Every operation degrades to a no-op when its
//! preconditions fail (empty registry, missing anchor, lightbox closed).

use std::sync::Arc;

use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use super::lazy::{BatchConfig, LazyLoadBatcher, LoadState, RevealEvent, Settle, SettleSignal, TileId};
use super::lightbox::Lightbox;
use super::navigation::{Direction, NavigationState};
use super::registry::{ImageRegistry, TileMarkup};
use super::thumbnails::{ScrollRequest, ThumbnailStrip};
use crate::error::InvitationResult;
use crate::viewport::Rect;

/// A page element the gallery depends on, identified by its element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor(&'static str);

impl Anchor {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn id(&self) -> &'static str {
        self.0
    }
}

/// The page elements the gallery works with. A missing anchor turns the
/// matching feature into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryAnchors {
    pub container: Option<Anchor>,
    pub lightbox: Option<Anchor>,
    pub image: Option<Anchor>,
    pub counter: Option<Anchor>,
    pub previous: Option<Anchor>,
    pub next: Option<Anchor>,
    pub close: Option<Anchor>,
    pub thumbnails: Option<Anchor>,
}

impl GalleryAnchors {
    /// Every anchor present, with the ids the page uses.
    pub const fn standard() -> Self {
        Self {
            container: Some(Anchor::new("galleryContainer")),
            lightbox: Some(Anchor::new("galleryLightbox")),
            image: Some(Anchor::new("lightboxImage")),
            counter: Some(Anchor::new("lightboxCounter")),
            previous: Some(Anchor::new("lightboxPrev")),
            next: Some(Anchor::new("lightboxNext")),
            close: Some(Anchor::new("lightboxClose")),
            thumbnails: Some(Anchor::new("lightboxThumbnails")),
        }
    }

    pub const fn none() -> Self {
        Self {
            container: None,
            lightbox: None,
            image: None,
            counter: None,
            previous: None,
            next: None,
            close: None,
            thumbnails: None,
        }
    }
}

impl Default for GalleryAnchors {
    fn default() -> Self {
        Self::standard()
    }
}

/// Keys the lightbox reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl LightboxKey {
    /// Map a DOM key name (`"Escape"`, `"ArrowLeft"`, `"ArrowRight"`).
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Escape" => Some(Self::Escape),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }
}

/// Where a click inside the lightbox landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxClick {
    /// The dimmed area around the content
    Backdrop,
    /// The image, counter or strip
    Content,
    Previous,
    Next,
    Close,
}

/// Gallery controller: registry, lightbox, thumbnail strip and lazy reveal.
pub struct Gallery {
    anchors: GalleryAnchors,
    batch_config: BatchConfig,
    initialized: bool,
    registry: ImageRegistry,
    tile_flags: Vec<bool>,
    signals: Vec<SettleSignal>,
    nav: NavigationState,
    nav_rx: watch::Receiver<usize>,
    lightbox: Lightbox,
    strip: ThumbnailStrip,
    pending_scroll: Option<ScrollRequest>,
    batcher: Option<LazyLoadBatcher>,
    scroll_locked: bool,
}

impl Gallery {
    pub fn new(anchors: GalleryAnchors, batch_config: BatchConfig) -> Self {
        let nav = NavigationState::new();
        let nav_rx = nav.subscribe();
        Self {
            anchors,
            batch_config,
            initialized: false,
            registry: ImageRegistry::default(),
            tile_flags: Vec::new(),
            signals: Vec::new(),
            nav,
            nav_rx,
            lightbox: Lightbox::new(),
            strip: ThumbnailStrip::new(),
            pending_scroll: None,
            batcher: None,
            scroll_locked: false,
        }
    }

    /// Build the registry, start lazy reveal and build the thumbnail strip.
    ///
    /// Runs once: returns `Ok(false)` when already initialized. A failure
    /// leaves the gallery uninitialized so the call can be retried.
    pub fn init(&mut self, tiles: &[TileMarkup]) -> InvitationResult<bool> {
        if self.initialized {
            debug!("Gallery already initialized");
            return Ok(false);
        }
        self.initialized = true;

        if let Err(e) = self.wire(tiles) {
            warn!(error = %e, "Gallery initialization failed");
            self.reset();
            return Err(e);
        }

        info!(
            tiles = tiles.len(),
            images = self.registry.len(),
            "Gallery initialized"
        );
        Ok(true)
    }

    fn wire(&mut self, tiles: &[TileMarkup]) -> InvitationResult<()> {
        self.tile_flags = tiles.iter().map(TileMarkup::has_image).collect();
        self.registry = ImageRegistry::build(tiles);
        self.signals = (0..self.registry.len()).map(|_| SettleSignal::new()).collect();

        if self.anchors.container.is_some() && !self.registry.is_empty() {
            let batcher = LazyLoadBatcher::spawn(self.batch_config)?;
            for (index, signal) in self.signals.iter().enumerate() {
                batcher.observe(TileId(index), Arc::new(signal.clone()));
            }
            self.batcher = Some(batcher);
        }

        if self.anchors.thumbnails.is_some() {
            self.strip.render(self.registry.as_slice());
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.initialized = false;
        self.registry = ImageRegistry::default();
        self.tile_flags.clear();
        self.signals.clear();
        self.strip = ThumbnailStrip::new();
        if let Some(batcher) = self.batcher.take() {
            batcher.disconnect();
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn anchors(&self) -> &GalleryAnchors {
        &self.anchors
    }

    pub fn registry(&self) -> &ImageRegistry {
        &self.registry
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn strip(&self) -> &ThumbnailStrip {
        &self.strip
    }

    pub fn is_open(&self) -> bool {
        self.lightbox.is_open()
    }

    pub fn current_index(&self) -> usize {
        self.nav.current()
    }

    /// Whether the page behind the lightbox must not scroll.
    pub fn background_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Whether tile `index` (in markup order) holds an image.
    pub fn tile_has_image(&self, index: usize) -> bool {
        self.tile_flags.get(index).copied().unwrap_or(false)
    }

    pub fn subscribe_navigation(&self) -> watch::Receiver<usize> {
        self.nav.subscribe()
    }

    pub fn subscribe_reveals(&self) -> Option<broadcast::Receiver<RevealEvent>> {
        self.batcher.as_ref().map(LazyLoadBatcher::subscribe)
    }

    pub fn load_state(&self, index: usize) -> Option<LoadState> {
        self.batcher.as_ref()?.load_state(TileId(index))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Lightbox
    // ═══════════════════════════════════════════════════════════════════════

    /// Open the lightbox at `index`. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) -> bool {
        if self.registry.is_empty()
            || self.anchors.lightbox.is_none()
            || self.anchors.image.is_none()
        {
            return false;
        }
        if index >= self.registry.len() {
            debug!(index, "Ignoring out-of-range lightbox index");
            return false;
        }

        self.nav.set(index);
        self.render();
        self.lightbox.show();
        self.scroll_locked = true;
        true
    }

    /// Open at the image a gallery tile shows. Unknown sources are ignored.
    pub fn open_tile(&mut self, source: &str) -> bool {
        match self.registry.index_of(source) {
            Some(index) => self.open(index),
            None => false,
        }
    }

    pub fn close(&mut self) -> bool {
        if self.anchors.lightbox.is_none() || !self.lightbox.hide() {
            return false;
        }
        self.scroll_locked = false;
        true
    }

    pub fn navigate(&mut self, direction: Direction) -> bool {
        if !self.lightbox.is_open() || self.registry.is_empty() {
            return false;
        }
        self.nav.step(direction, self.registry.len());
        self.render();
        true
    }

    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.lightbox.is_open() {
            return false;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowLeft => self.navigate(Direction::Previous),
            LightboxKey::ArrowRight => self.navigate(Direction::Next),
        }
    }

    pub fn handle_click(&mut self, target: LightboxClick) -> bool {
        match target {
            LightboxClick::Backdrop if self.lightbox.is_open() => self.close(),
            LightboxClick::Backdrop | LightboxClick::Content => false,
            LightboxClick::Previous if self.anchors.previous.is_some() => {
                self.navigate(Direction::Previous)
            }
            LightboxClick::Next if self.anchors.next.is_some() => self.navigate(Direction::Next),
            LightboxClick::Close if self.anchors.close.is_some() => self.close(),
            LightboxClick::Previous | LightboxClick::Next | LightboxClick::Close => false,
        }
    }

    /// Delegated click on the thumbnail strip, carrying the index tag.
    pub fn thumbnail_clicked(&mut self, tag: &str) -> bool {
        match self.strip.index_for_tag(tag) {
            Some(index) => self.open(index),
            None => false,
        }
    }

    pub fn thumbnail_failed(&mut self, index: usize) {
        self.strip.mark_broken(index);
    }

    /// Load/error outcome of the lightbox image element.
    pub fn lightbox_image_settled(&mut self, source: &str, outcome: Settle) -> bool {
        self.lightbox.settle(source, outcome)
    }

    /// Scroll the strip should perform after the last render.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending_scroll.take()
    }

    fn render(&mut self) {
        if self.anchors.image.is_none() || self.anchors.counter.is_none() {
            return;
        }
        let index = self.nav.current();
        let Some(image) = self.registry.get(index) else {
            return;
        };
        self.lightbox.render(index, self.registry.len(), image);

        if self.strip.is_built() {
            self.strip.follow(&mut self.nav_rx);
            self.pending_scroll = Some(ScrollRequest::smooth(index));
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Lazy reveal
    // ═══════════════════════════════════════════════════════════════════════

    /// Load/error outcome of a gallery tile's image element.
    pub fn tile_settled(&self, index: usize, outcome: Settle) {
        if let Some(signal) = self.signals.get(index) {
            signal.settle(outcome);
        }
    }

    /// Feed the current viewport and tile rectangles to the batcher.
    pub fn viewport_changed<F>(&self, viewport: &Rect, mut rect_of: F) -> usize
    where
        F: FnMut(usize) -> Option<Rect>,
    {
        match &self.batcher {
            Some(batcher) => batcher.viewport_changed(viewport, |tile| rect_of(tile.0)),
            None => 0,
        }
    }

    /// Release background work. Called when the page goes away.
    pub fn shutdown(&mut self) {
        if let Some(batcher) = &self.batcher {
            batcher.disconnect();
        }
    }
}

impl Drop for Gallery {
    fn drop(&mut self) {
        self.shutdown();
    }
}
