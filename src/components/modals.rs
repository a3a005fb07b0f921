//! Wish and attendance modals.

use dioxus::prelude::*;
use thiepcuoi_core::rsvp::{CONFIRM_THANKS, GENERIC_ALERT, VALIDATION_ALERT};
use thiepcuoi_core::{
    submit_confirmation, ConfirmationForm, FormSource, InvitationError, ModalId,
    NotificationKind, WishForm,
};

use super::guestbook::{send_wish, WishFields};
use crate::context::{alert, notify, use_config, use_modals, use_notifications, use_store};

/// Dimmed overlay; a click outside the content closes it.
#[component]
fn ModalFrame(id: ModalId, title: &'static str, children: Element) -> Element {
    let mut modals = use_modals();
    let open = modals.read().is_open(id);

    rsx! {
        div {
            id: id.element_id(),
            class: if open { "modal active" } else { "modal" },
            onclick: move |_| modals.write().backdrop_clicked(id),

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "modal-close",
                    onclick: move |_| modals.write().close(id),
                    "×"
                }
                h3 { class: "modal-title", "{title}" }
                {children}
            }
        }
    }
}

#[component]
pub fn WishModal() -> Element {
    let config = use_config();
    let notifications = use_notifications();
    let modals = use_modals();
    let form = use_signal(WishForm::default);

    rsx! {
        ModalFrame { id: ModalId::Wish, title: "Gửi lời chúc",
            form {
                class: "modal-form",
                onsubmit: move |e| {
                    e.prevent_default();
                    let endpoint = config.read().wish_endpoint.clone();
                    send_wish(form, FormSource::Modal, endpoint, notifications, modals);
                },
                WishFields { form }
                button { class: "btn-primary", r#type: "submit", "Gửi" }
            }
        }
    }
}

#[component]
pub fn ConfirmModal() -> Element {
    let store = use_store();
    let notifications = use_notifications();
    let mut modals = use_modals();
    let mut form = use_signal(ConfirmationForm::default);

    let mut confirm = move || {
        let Some(store) = store.read().0.clone() else {
            tracing::error!("Confirmation store unavailable");
            alert(GENERIC_ALERT);
            return;
        };
        let snapshot = form.peek().clone();
        match submit_confirmation(&store, &snapshot) {
            Ok(_) => {
                form.write().clear();
                modals.write().close(ModalId::Confirm);
                notify(notifications, CONFIRM_THANKS, NotificationKind::Success);
            }
            Err(InvitationError::Validation(e)) => {
                tracing::debug!(error = %e, "Confirmation rejected");
                alert(VALIDATION_ALERT);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save confirmation");
                alert(GENERIC_ALERT);
            }
        }
    };

    let ConfirmationForm { name, guests } = form();

    rsx! {
        ModalFrame { id: ModalId::Confirm, title: "Xác nhận tham dự",
            form {
                class: "modal-form",
                onsubmit: move |e| {
                    e.prevent_default();
                    confirm();
                },
                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Tên của bạn",
                    value: "{name}",
                    oninput: move |e| form.write().name = e.value(),
                }
                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Số người tham dự",
                    value: "{guests}",
                    oninput: move |e| form.write().guests = e.value(),
                }
                button { class: "btn-primary", r#type: "submit", "Xác nhận" }
            }
        }
    }
}
