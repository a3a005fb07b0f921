//! Ceremony cards with calendar and map buttons.

use dioxus::prelude::*;
use thiepcuoi_core::{NotificationKind, WeddingEvent};

use crate::context::{notify, open_external, use_notifications};

#[component]
pub fn EventCards(events: Vec<WeddingEvent>) -> Element {
    let notifications = use_notifications();

    rsx! {
        div { class: "events-grid",
            for event in events {
                {
                    let calendar_url = event.calendar_url();
                    let map_url = event.map_url();
                    let when = event.starts_at().format("%H:%M - %d/%m/%Y").to_string();
                    rsx! {
                        div { key: "{event.id}", class: "event-card",
                            h3 { class: "event-card__title", "{event.name}" }
                            p { class: "event-card__time", "🕐 {when}" }
                            p { class: "event-card__location", "📍 {event.location}" }

                            div { class: "event-card__actions",
                                button {
                                    class: "btn-primary",
                                    onclick: move |_| {
                                        if open_external(&calendar_url) {
                                            notify(notifications, "Đã mở Google Calendar!", NotificationKind::Success);
                                        }
                                    },
                                    "Thêm vào lịch"
                                }
                                button {
                                    class: "btn-secondary",
                                    onclick: move |_| {
                                        open_external(&map_url);
                                    },
                                    "Xem bản đồ"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
