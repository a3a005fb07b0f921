//! Days / hours / minutes / seconds until the ceremony.

use dioxus::prelude::*;
use thiepcuoi_core::{Countdown, CountdownDisplay};
use tokio_util::sync::CancellationToken;

#[component]
pub fn CountdownPanel(countdown: Countdown) -> Element {
    let mut display = use_signal(move || countdown.remaining());
    let cancel = use_hook(CancellationToken::new);

    {
        let cancel = cancel.clone();
        use_effect(move || {
            let mut ticks = countdown.spawn_ticker(cancel.clone());
            spawn(async move {
                while ticks.changed().await.is_ok() {
                    let next = ticks.borrow_and_update().clone();
                    display.set(next);
                }
            });
        });
    }

    // Stop the ticker when the page goes away
    use_drop(move || cancel.cancel());

    let CountdownDisplay { days, hours, minutes, seconds, .. } = display();

    rsx! {
        div { class: "countdown",
            CountdownCell { id: "days", value: days, label: "Ngày" }
            CountdownCell { id: "hours", value: hours, label: "Giờ" }
            CountdownCell { id: "minutes", value: minutes, label: "Phút" }
            CountdownCell { id: "seconds", value: seconds, label: "Giây" }
        }
    }
}

#[component]
fn CountdownCell(id: &'static str, value: String, label: &'static str) -> Element {
    rsx! {
        div { class: "countdown-item",
            span { id: "{id}", class: "countdown-number", "{value}" }
            span { class: "countdown-label", "{label}" }
        }
    }
}
