//! Thiệp Cưới Core Library
//!
//! Behavior of a wedding-invitation page, independent of any UI toolkit.
//!
//! ## Overview
//!
//! The centerpiece is the photo [`gallery`]: an image registry built from
//! the page's tiles, a lightbox with wrap-around navigation and a thumbnail
//! strip, and a batcher that reveals tiles a few at a time as they approach
//! the viewport. Around it sit the smaller page features: countdown,
//! calendar and map links, guestbook wishes, RSVP confirmations, the hero
//! slider, falling hearts, background music and the page chrome.
//!
//! ## Quick Start
//!
//! ```ignore
//! use thiepcuoi_core::{Gallery, GalleryAnchors, InvitationConfig, LightboxKey};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = InvitationConfig::default();
//!     let mut gallery = Gallery::new(GalleryAnchors::standard(), config.batch_config());
//!     gallery.init(&config.gallery)?;
//!
//!     gallery.open(1);
//!     gallery.handle_key(LightboxKey::ArrowRight);
//!     println!("{}", gallery.lightbox().counter().unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod calendar;
pub mod config;
pub mod countdown;
pub mod error;
pub mod gallery;
pub mod hearts;
pub mod music;
pub mod notification;
pub mod page;
pub mod rsvp;
pub mod slider;
pub mod storage;
pub mod viewport;

// Re-exports
pub use calendar::{default_events, find_event, WeddingEvent};
pub use config::{config_path, InvitationConfig, CONFIG_FILE};
pub use countdown::{Countdown, CountdownDisplay};
pub use error::{InvitationError, InvitationResult, ValidationError};
pub use gallery::{
    Direction, Gallery, GalleryAnchors, ImageDescriptor, ImageRegistry, LightboxClick,
    LightboxKey, RevealEvent, Settle, TileImage, TileMarkup,
};
pub use hearts::HeartRain;
pub use music::{BackgroundMusic, Interaction, MusicState};
pub use notification::{NotificationCenter, NotificationKind};
pub use page::{Modals, ModalId, NavBar, Parallax, RevealKind, ScrollReveal};
pub use rsvp::{
    submit_confirmation, submit_wish, Confirmation, ConfirmationForm, FormSource,
    HttpWishSender, Wish, WishForm, WishSender,
};
pub use slider::Slider;
pub use storage::{ConfirmationStore, STORE_FILE};
pub use viewport::{ProximityConfig, Rect};
