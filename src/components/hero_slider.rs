//! Background slider behind the hero title.

use std::time::Duration;

use dioxus::prelude::*;
use thiepcuoi_core::Slider;
use tokio::time::Instant;

/// How often the auto-advance loop checks the slider while paused.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[component]
pub fn HeroSlider(slides: Vec<String>) -> Element {
    let count = slides.len();
    let mut slider = use_signal(move || Slider::new(count, Instant::now()));

    // Auto-advance
    use_effect(move || {
        spawn(async move {
            loop {
                let due = slider.peek().due();
                match due {
                    Some(due) => tokio::time::sleep_until(due).await,
                    None if slider.peek().is_inert() => break,
                    None => tokio::time::sleep(IDLE_POLL).await,
                }
                slider.write().tick(Instant::now());
            }
        });
    });

    if slider.read().is_inert() {
        return VNode::empty();
    }

    let current = slider.read().current();

    rsx! {
        div {
            class: "slider-container",
            onmouseenter: move |_| slider.write().pause(),
            onmouseleave: move |_| slider.write().resume(Instant::now()),

            for (i, src) in slides.iter().enumerate() {
                div {
                    key: "{i}",
                    class: if i == current { "slide active" } else { "slide" },
                    style: "background-image: url('{src}');",
                }
            }

            button {
                id: "prevBtn",
                class: "slider-btn slider-btn--prev",
                onclick: move |_| slider.write().prev(Instant::now()),
                "‹"
            }
            button {
                id: "nextBtn",
                class: "slider-btn slider-btn--next",
                onclick: move |_| slider.write().next(Instant::now()),
                "›"
            }

            div { id: "sliderDots", class: "slider-dots",
                for i in 0..count {
                    div {
                        key: "{i}",
                        class: if i == current { "slider-dot active" } else { "slider-dot" },
                        onclick: move |_| {
                            slider.write().go_to(i, Instant::now());
                        },
                    }
                }
            }
        }
    }
}
