//! Full-screen photo viewer with counter and thumbnail strip.

use dioxus::prelude::*;
use thiepcuoi_core::{Gallery, LightboxClick, Settle};

use super::dom::scroll_thumbnail;
use crate::context::use_gallery;

/// One listener on the strip reports the index tag of whichever thumbnail
/// was clicked, or an empty tag for clicks between thumbnails.
const THUMBNAIL_CLICK_SCRIPT: &str = r#"
const strip = document.getElementById('lightboxThumbnails');
if (strip) {
    strip.addEventListener('click', (e) => {
        const thumb = e.target.closest('[data-thumb-index]');
        dioxus.send(thumb ? thumb.dataset.thumbIndex : '');
    });
}
await new Promise(() => {});
"#;

/// Run the thumbnail scroll the last render asked for.
pub fn flush_scroll(mut gallery: Signal<Gallery>) {
    if let Some(request) = gallery.write().take_scroll_request() {
        spawn(scroll_thumbnail(request));
    }
}

#[component]
pub fn LightboxView() -> Element {
    let mut gallery = use_gallery();

    use_effect(move || {
        spawn(async move {
            let mut clicks = document::eval(THUMBNAIL_CLICK_SCRIPT);
            while let Ok(tag) = clicks.recv::<String>().await {
                gallery.write().thumbnail_clicked(&tag);
                flush_scroll(gallery);
            }
            tracing::debug!("Thumbnail strip clicks unavailable");
        });
    });

    let mut click = move |target: LightboxClick| {
        gallery.write().handle_click(target);
        flush_scroll(gallery);
    };

    let (open, image, counter, thumbnails, active) = {
        let g = gallery.read();
        (
            g.is_open(),
            g.lightbox().image().cloned(),
            g.lightbox().counter().unwrap_or_default().to_string(),
            g.strip().entries().to_vec(),
            g.strip().active(),
        )
    };

    rsx! {
        div {
            id: "galleryLightbox",
            class: if open { "lightbox active" } else { "lightbox" },
            onclick: move |_| click(LightboxClick::Backdrop),

            button {
                id: "lightboxClose",
                class: "lightbox-close",
                onclick: move |e| {
                    e.stop_propagation();
                    click(LightboxClick::Close);
                },
                "×"
            }

            button {
                id: "lightboxPrev",
                class: "lightbox-nav lightbox-prev",
                onclick: move |e| {
                    e.stop_propagation();
                    click(LightboxClick::Previous);
                },
                "‹"
            }

            div {
                class: "lightbox-content",
                onclick: move |e| e.stop_propagation(),

                if let Some(image) = image {
                    {
                        let loaded_src = image.source.clone();
                        let failed_src = image.source.clone();
                        rsx! {
                            img {
                                id: "lightboxImage",
                                src: "{image.source}",
                                alt: "{image.alt}",
                                style: "opacity: {image.opacity()};",
                                onload: move |_| {
                                    gallery.write().lightbox_image_settled(&loaded_src, Settle::Loaded);
                                },
                                onerror: move |_| {
                                    tracing::warn!(src = %failed_src, "Lightbox image failed to load");
                                    gallery.write().lightbox_image_settled(&failed_src, Settle::Failed);
                                },
                            }
                        }
                    }
                }

                div { id: "lightboxCounter", class: "lightbox-counter", "{counter}" }

                div { id: "lightboxThumbnails", class: "lightbox-thumbnails",
                    for thumb in thumbnails {
                        {
                            let tag = thumb.tag();
                            let index = thumb.index;
                            rsx! {
                                img {
                                    key: "{tag}",
                                    class: if active == Some(index) { "lightbox-thumbnail active" } else { "lightbox-thumbnail" },
                                    style: if thumb.hidden { "display: none;" } else { "" },
                                    src: "{thumb.source}",
                                    alt: "{thumb.alt}",
                                    loading: "lazy",
                                    "data-thumb-index": "{tag}",
                                    onerror: move |_| gallery.write().thumbnail_failed(index),
                                }
                            }
                        }
                    }
                }
            }

            button {
                id: "lightboxNext",
                class: "lightbox-nav lightbox-next",
                onclick: move |e| {
                    e.stop_propagation();
                    click(LightboxClick::Next);
                },
                "›"
            }
        }
    }
}
