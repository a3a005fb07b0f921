//! Photo grid. Tiles fade in as the lazy-reveal batches release them.

use std::collections::HashSet;

use dioxus::prelude::*;
use thiepcuoi_core::{Settle, TileMarkup};
use tokio::sync::broadcast::error::RecvError;

use super::dom::measure_page;
use super::lightbox::flush_scroll;
use crate::context::use_gallery;

/// A tile as rendered: the markup plus its registry index when it holds a
/// usable picture.
#[derive(Debug, Clone, PartialEq)]
struct GridTile {
    slot: usize,
    index: Option<usize>,
    source: Option<String>,
    alt: String,
    has_image: bool,
}

fn grid_tiles(markup: &[TileMarkup]) -> Vec<GridTile> {
    let mut next_index = 0;
    markup
        .iter()
        .enumerate()
        .map(|(slot, tile)| {
            let source = tile
                .image
                .as_ref()
                .and_then(|image| image.resolved_source())
                .map(str::to_string);
            let index = source.as_ref().map(|_| {
                let index = next_index;
                next_index += 1;
                index
            });
            let alt = tile
                .image
                .as_ref()
                .and_then(|image| image.alt.clone())
                .unwrap_or_default();
            GridTile {
                slot,
                index,
                source,
                alt,
                has_image: tile.has_image(),
            }
        })
        .collect()
}

#[component]
pub fn GallerySection(tiles: Vec<TileMarkup>) -> Element {
    let mut gallery = use_gallery();
    let mut revealed = use_signal(HashSet::<usize>::new);

    let init_tiles = tiles.clone();
    use_hook(move || {
        if let Err(e) = gallery.write().init(&init_tiles) {
            tracing::error!(error = %e, "Failed to initialize gallery");
        }
    });

    // Follow reveal events from the batcher
    use_effect(move || {
        let Some(mut reveals) = gallery.peek().subscribe_reveals() else {
            return;
        };
        spawn(async move {
            loop {
                match reveals.recv().await {
                    Ok(event) => {
                        revealed.write().insert(event.tile.0);
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Missed gallery reveal events");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
    });

    // Tiles already on screen at load
    use_effect(move || {
        spawn(async move {
            if let Some(metrics) = measure_page().await {
                let queued = gallery
                    .peek()
                    .viewport_changed(&metrics.viewport(), |i| metrics.tile_rect(i));
                tracing::debug!(queued, "Initial gallery measurement");
            }
        });
    });

    let grid = grid_tiles(&tiles);
    let revealed_now = revealed.read().clone();

    rsx! {
        div { id: "galleryContainer", class: "gallery-grid",
            for tile in grid {
                {
                    let loaded = tile.index.is_some_and(|i| revealed_now.contains(&i));
                    let mut class = String::from("gallery-item");
                    if tile.has_image {
                        class.push_str(" has-image");
                    }
                    if loaded {
                        class.push_str(" loaded");
                    }
                    let clicked = tile.source.clone();
                    rsx! {
                        div {
                            key: "{tile.slot}",
                            class: "{class}",
                            "data-gallery-index": tile.index.map(|i| i.to_string()),
                            onclick: move |_| {
                                if let Some(source) = &clicked {
                                    gallery.write().open_tile(source);
                                    flush_scroll(gallery);
                                }
                            },
                            if let (Some(index), Some(source)) = (tile.index, tile.source.clone()) {
                                img {
                                    src: "{source}",
                                    alt: "{tile.alt}",
                                    class: if loaded { "image-loaded" } else { "" },
                                    onload: move |_| gallery.read().tile_settled(index, Settle::Loaded),
                                    onerror: move |_| {
                                        tracing::warn!(index, "Gallery image failed to load");
                                        gallery.read().tile_settled(index, Settle::Failed);
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
