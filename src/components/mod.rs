//! UI components for the invitation page.

mod countdown;
pub mod dom;
mod event_cards;
mod gallery;
mod guestbook;
mod hearts;
mod hero_slider;
mod lightbox;
mod modals;
mod music;
mod nav_bar;
mod notification_toast;

pub use countdown::CountdownPanel;
pub use event_cards::EventCards;
pub use gallery::GallerySection;
pub use guestbook::Guestbook;
pub use hearts::FallingHearts;
pub use hero_slider::HeroSlider;
pub use lightbox::{flush_scroll, LightboxView};
pub use modals::{ConfirmModal, WishModal};
pub use music::MusicPlayer;
pub use nav_bar::NavBar;
pub use notification_toast::Toasts;
