//! Guestbook wishes, from the inline form or the wish modal.

use dioxus::prelude::*;
use thiepcuoi_core::page::{ModalId, Modals};
use thiepcuoi_core::rsvp::{GENERIC_ALERT, NETWORK_ALERT, VALIDATION_ALERT, WISH_THANKS};
use thiepcuoi_core::{
    submit_wish, FormSource, HttpWishSender, InvitationError, NotificationCenter,
    NotificationKind, WishForm,
};

use crate::context::{alert, notify, use_config, use_modals, use_notifications};

/// Validate and post the wish in `form`, then report the outcome.
pub fn send_wish(
    mut form: Signal<WishForm>,
    source: FormSource,
    endpoint: String,
    notifications: Signal<NotificationCenter>,
    mut modals: Signal<Modals>,
) {
    let snapshot = form.peek().clone();
    spawn(async move {
        let sender = HttpWishSender::new(endpoint);
        match submit_wish(&sender, &snapshot).await {
            Ok(wish) => {
                tracing::info!(name = %wish.name, ?source, "Wish sent");
                notify(notifications, WISH_THANKS, NotificationKind::Success);
                form.write().clear();
                if source == FormSource::Modal {
                    modals.write().close(ModalId::Wish);
                }
            }
            Err(InvitationError::Validation(e)) => {
                tracing::debug!(error = %e, "Wish rejected");
                alert(VALIDATION_ALERT);
            }
            Err(InvitationError::Network(_)) => alert(NETWORK_ALERT),
            Err(e) => {
                tracing::error!(error = %e, "Wish failed");
                alert(GENERIC_ALERT);
            }
        }
    });
}

/// Name and message inputs bound to a wish form.
#[component]
pub fn WishFields(mut form: Signal<WishForm>) -> Element {
    let WishForm { name, message } = form();

    rsx! {
        input {
            class: "form-input",
            r#type: "text",
            placeholder: "Tên của bạn",
            value: "{name}",
            oninput: move |e| form.write().name = e.value(),
        }
        textarea {
            class: "form-input form-textarea",
            placeholder: "Lời chúc gửi đến cô dâu chú rể",
            rows: "4",
            value: "{message}",
            oninput: move |e| form.write().message = e.value(),
        }
    }
}

#[component]
pub fn Guestbook() -> Element {
    let config = use_config();
    let notifications = use_notifications();
    let mut modals = use_modals();
    let form = use_signal(WishForm::default);

    rsx! {
        form {
            id: "wishForm",
            class: "guestbook-form",
            onsubmit: move |e| {
                e.prevent_default();
                let endpoint = config.read().wish_endpoint.clone();
                send_wish(form, FormSource::Guestbook, endpoint, notifications, modals);
            },
            WishFields { form }
            button { class: "btn-primary", r#type: "submit", "Gửi lời chúc" }
        }

        div { class: "guestbook-actions",
            button {
                class: "btn-secondary",
                onclick: move |_| modals.write().open(ModalId::Wish),
                "💌 Gửi lời chúc"
            }
            button {
                class: "btn-secondary",
                onclick: move |_| modals.write().open(ModalId::Confirm),
                "✅ Xác nhận tham dự"
            }
        }
    }
}
