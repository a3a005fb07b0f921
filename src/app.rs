use dioxus::prelude::*;
use thiepcuoi_core::page::Modals;
use thiepcuoi_core::{
    ConfirmationStore, Gallery, GalleryAnchors, InvitationConfig, NotificationCenter, STORE_FILE,
};

use crate::context::{get_config_path, get_data_dir, SharedStore};
use crate::pages::Invitation;
use crate::theme::GLOBAL_STYLES;

fn load_config() -> InvitationConfig {
    let path = get_config_path();
    match InvitationConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "Failed to load config, using defaults");
            InvitationConfig::default()
        }
    }
}

fn open_store() -> SharedStore {
    let path = get_data_dir().join(STORE_FILE);
    match ConfirmationStore::open(&path) {
        Ok(store) => SharedStore(Some(store)),
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "Failed to open confirmation store");
            SharedStore(None)
        }
    }
}

/// Root application component.
///
/// Provides global styles and the shared page state.
#[component]
pub fn App() -> Element {
    let config: Signal<InvitationConfig> = use_signal(load_config);
    let store: Signal<SharedStore> = use_signal(open_store);
    let notifications: Signal<NotificationCenter> = use_signal(NotificationCenter::new);
    let modals: Signal<Modals> = use_signal(Modals::new);
    let gallery: Signal<Gallery> =
        use_signal(|| Gallery::new(GalleryAnchors::standard(), config.peek().batch_config()));

    use_context_provider(|| config);
    use_context_provider(|| store);
    use_context_provider(|| notifications);
    use_context_provider(|| modals);
    use_context_provider(|| gallery);

    rsx! {
        style { {GLOBAL_STYLES} }
        Invitation {}
    }
}
