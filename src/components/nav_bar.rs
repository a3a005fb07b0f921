//! Fixed navigation bar with mobile menu and smooth anchor scrolling.

use dioxus::prelude::*;
use thiepcuoi_core::page::{anchor_scroll_top, NavBar as NavState};

use super::dom::{offset_top, scroll_page_to};

const LINKS: [(&str, &str); 5] = [
    ("home", "Trang chủ"),
    ("countdown", "Đếm ngược"),
    ("events", "Sự kiện"),
    ("gallery", "Album"),
    ("guestbook", "Sổ lưu bút"),
];

#[component]
pub fn NavBar(mut state: Signal<NavState>, couple: String) -> Element {
    let mut go_to = move |target: &'static str| {
        state.write().link_clicked();
        spawn(async move {
            if let Some(top) = offset_top(target).await {
                scroll_page_to(anchor_scroll_top(top));
            }
        });
    };

    let scrolled = state.read().is_scrolled();
    let menu_open = state.read().is_menu_open();

    rsx! {
        nav {
            id: "navbar",
            class: if scrolled { "navbar scrolled" } else { "navbar" },

            div { class: "nav-brand", "{couple}" }

            button {
                id: "navToggle",
                class: "nav-toggle",
                onclick: move |_| state.write().toggle_menu(),
                "☰"
            }

            ul {
                id: "navMenu",
                class: if menu_open { "nav-menu active" } else { "nav-menu" },
                for (target, label) in LINKS {
                    li { key: "{target}",
                        a {
                            class: "nav-link",
                            href: "#{target}",
                            onclick: move |e| {
                                e.prevent_default();
                                go_to(target);
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
