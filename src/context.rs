//! Shared page state for the invitation.
//!
//! Provides config, the confirmation store, notifications and modal state to
//! all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_config();
//! let mut toasts = use_notifications();
//! toasts.write().show("Xin chào", NotificationKind::Info);
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use thiepcuoi_core::page::Modals;
use thiepcuoi_core::{ConfirmationStore, Gallery, InvitationConfig, NotificationCenter, NotificationKind};

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

pub fn get_config_path() -> PathBuf {
    crate::get_config_path()
}

/// Store handle, `None` when the store could not be opened.
#[derive(Clone)]
pub struct SharedStore(pub Option<ConfirmationStore>);

pub fn use_config() -> Signal<InvitationConfig> {
    use_context::<Signal<InvitationConfig>>()
}

pub fn use_store() -> Signal<SharedStore> {
    use_context::<Signal<SharedStore>>()
}

pub fn use_notifications() -> Signal<NotificationCenter> {
    use_context::<Signal<NotificationCenter>>()
}

pub fn use_modals() -> Signal<Modals> {
    use_context::<Signal<Modals>>()
}

pub fn use_gallery() -> Signal<Gallery> {
    use_context::<Signal<Gallery>>()
}

/// Show a toast.
pub fn notify(mut center: Signal<NotificationCenter>, message: &str, kind: NotificationKind) {
    center.write().show(message, kind);
}

/// Blocking alert for validation and connection problems.
pub fn alert(message: &'static str) {
    spawn(async move {
        rfd::AsyncMessageDialog::new()
            .set_title("Thiệp Cưới")
            .set_description(message)
            .set_level(rfd::MessageLevel::Warning)
            .show()
            .await;
    });
}

/// Open a link in the system browser.
pub fn open_external(url: &str) -> bool {
    match webbrowser::open(url) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(error = %e, %url, "Failed to open link");
            false
        }
    }
}
