//! The invitation page: hero, countdown, ceremonies, album and guestbook.
//!
//! Scrolling drives the navbar state, the hero parallax, section entrance
//! animations and the gallery's lazy reveal from one page measurement.

use dioxus::prelude::*;
use thiepcuoi_core::page::{NavBar as NavState, Parallax, RevealKind, ScrollReveal};
use thiepcuoi_core::{Countdown, LightboxKey};
use tokio::time::Instant;

use crate::components::dom::measure_page;
use crate::components::{
    flush_scroll, ConfirmModal, CountdownPanel, EventCards, FallingHearts, GallerySection,
    Guestbook, HeroSlider, LightboxView, MusicPlayer, NavBar, Toasts, WishModal,
};
use crate::context::{use_config, use_gallery, use_modals};

/// Entrance animation of each revealable section, by `data-reveal-index`.
const SECTION_REVEALS: [RevealKind; 4] = [
    RevealKind::FadeInUp,
    RevealKind::SlideInLeft,
    RevealKind::FadeInUp,
    RevealKind::SlideInRight,
];

#[component]
pub fn Invitation() -> Element {
    let config = use_config();
    let mut gallery = use_gallery();
    let modals = use_modals();

    let mut nav = use_signal(NavState::new);
    let mut parallax = use_signal(Parallax::new);
    let mut hero_offset = use_signal(|| 0.0_f64);
    let mut reveal = use_signal(|| ScrollReveal::new(SECTION_REVEALS.to_vec(), true));

    let countdown = use_hook(|| match config.peek().countdown() {
        Ok(countdown) => countdown,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid countdown target, using default");
            Countdown::default()
        }
    });

    // Sections already in view at load
    use_effect(move || {
        spawn(async move {
            if let Some(metrics) = measure_page().await {
                reveal
                    .write()
                    .viewport_changed(&metrics.viewport(), |i| metrics.section_rect(i));
            }
        });
    });

    use_drop(move || {
        reveal.write().disconnect();
        gallery.write().shutdown();
    });

    let on_scroll = move |_: Event<ScrollData>| {
        spawn(async move {
            let Some(metrics) = measure_page().await else {
                return;
            };
            let viewport = metrics.viewport();

            nav.write().on_scroll(metrics.scroll_top);
            if let Some(offset) =
                parallax
                    .write()
                    .on_scroll(metrics.scroll_top, metrics.height, Instant::now())
            {
                hero_offset.set(offset);
            }

            let entered = reveal
                .write()
                .viewport_changed(&viewport, |i| metrics.section_rect(i));
            if !entered.is_empty() {
                tracing::trace!(?entered, "Sections animated");
            }

            gallery
                .peek()
                .viewport_changed(&viewport, |i| metrics.tile_rect(i));
        });
    };

    let on_key = move |e: KeyboardEvent| {
        let Some(key) = LightboxKey::from_key_name(&e.key().to_string()) else {
            return;
        };
        if gallery.write().handle_key(key) {
            e.prevent_default();
            flush_scroll(gallery);
        }
    };

    let cfg = config.read();
    let couple = cfg.couple();
    let groom = cfg.groom.clone();
    let bride = cfg.bride.clone();
    let locked = gallery.read().background_scroll_locked() || modals.read().scroll_locked();
    let [countdown_reveal, events_reveal, gallery_reveal, guestbook_reveal]: [String; 4] =
        std::array::from_fn(|i| reveal.read().classes(i));

    rsx! {
        div {
            id: "page",
            class: if locked { "page scroll-locked" } else { "page" },
            tabindex: "0",
            onscroll: on_scroll,
            onkeydown: on_key,

            NavBar { state: nav, couple: couple.clone() }

            section { id: "home", class: "hero",
                HeroSlider { slides: cfg.slides.clone() }
                div {
                    class: "hero-content",
                    style: "transform: translateY({hero_offset}px);",
                    p { class: "hero-subtitle", "Trân trọng kính mời" }
                    h1 { class: "hero-title",
                        span { "{groom}" }
                        span { class: "hero-amp", "&" }
                        span { "{bride}" }
                    }
                }
            }

            section {
                id: "countdown",
                class: "section countdown-section {countdown_reveal}",
                "data-reveal-index": "0",
                h2 { class: "section-title", "Đếm ngược đến ngày vui" }
                CountdownPanel { countdown }
            }

            section {
                id: "events",
                class: "section {events_reveal}",
                "data-reveal-index": "1",
                h2 { class: "section-title", "Sự kiện cưới" }
                EventCards { events: cfg.events.clone() }
            }

            section {
                id: "gallery",
                class: "section {gallery_reveal}",
                "data-reveal-index": "2",
                h2 { class: "section-title", "Album ảnh cưới" }
                GallerySection { tiles: cfg.gallery.clone() }
            }

            section {
                id: "guestbook",
                class: "section {guestbook_reveal}",
                "data-reveal-index": "3",
                h2 { class: "section-title", "Sổ lưu bút" }
                Guestbook {}
            }

            footer { class: "footer",
                p { "{couple}" }
                p { class: "footer-note", "Sự hiện diện của bạn là niềm vinh hạnh cho gia đình chúng tôi" }
            }

            LightboxView {}
            WishModal {}
            ConfirmModal {}
            Toasts {}
            MusicPlayer {}
            if cfg.falling_hearts {
                FallingHearts {}
            }
        }
    }
}
