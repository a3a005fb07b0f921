//! Photo gallery: registry, lightbox, thumbnail strip and lazy reveal.

mod controller;
pub mod lazy;
pub mod lightbox;
pub mod navigation;
pub mod registry;
pub mod thumbnails;

pub use controller::{Anchor, Gallery, GalleryAnchors, LightboxClick, LightboxKey};
pub use lazy::{
    BatchConfig, ImageResource, LazyLoadBatcher, LoadState, RevealEvent, Settle, SettleSignal,
    TileId, VisibilityMode, BATCH_DELAY, BATCH_SIZE,
};
pub use lightbox::{counter_text, DisplayedImage, ImagePhase, Lightbox, FALLBACK_ALT};
pub use navigation::{wrap_index, Direction, NavigationState};
pub use registry::{ImageDescriptor, ImageRegistry, TileImage, TileMarkup, DEFAULT_ALT};
pub use thumbnails::{ScrollAlign, ScrollBehavior, ScrollRequest, Thumbnail, ThumbnailStrip};
