//! Corner toasts for the notification center.

use std::time::Duration;

use dioxus::prelude::*;
use thiepcuoi_core::notification::NotificationPhase;
use tokio::time::Instant;

use crate::context::use_notifications;

const PRUNE_INTERVAL: Duration = Duration::from_millis(100);

#[component]
pub fn Toasts() -> Element {
    let mut center = use_notifications();
    let mut now = use_signal(Instant::now);

    use_effect(move || {
        spawn(async move {
            let mut ticker = tokio::time::interval(PRUNE_INTERVAL);
            loop {
                ticker.tick().await;
                if center.peek().is_empty() {
                    continue;
                }
                let t = Instant::now();
                now.set(t);
                center.write().prune(t);
            }
        });
    });

    let now = now();
    let toasts: Vec<(u64, String, &'static str, String)> = center
        .read()
        .active()
        .iter()
        .map(|n| {
            let class = match n.phase_at(now) {
                NotificationPhase::Leaving => format!("{} leaving", n.kind.class_name()),
                _ => n.kind.class_name().to_string(),
            };
            (n.id, class, n.kind.color(), n.message.clone())
        })
        .collect();

    rsx! {
        div { class: "notification-stack",
            for (id, class, color, message) in toasts {
                div { key: "{id}", class: "{class}", style: "background: {color};", "{message}" }
            }
        }
    }
}
