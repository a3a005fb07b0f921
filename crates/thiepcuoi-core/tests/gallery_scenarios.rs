//! End-to-end gallery scenarios: markup in, lightbox and reveals out.

use std::time::Duration;

use thiepcuoi_core::gallery::{BatchConfig, LoadState, BATCH_DELAY};
use thiepcuoi_core::{
    Gallery, GalleryAnchors, LightboxClick, LightboxKey, Rect, Settle, TileImage, TileMarkup,
};
use tokio::time::Instant;

fn markup() -> Vec<TileMarkup> {
    vec![
        TileMarkup::with_image(TileImage::new("a.jpg").with_alt("Áo dài")),
        TileMarkup::empty(),
        TileMarkup::with_image(TileImage {
            src: None,
            src_attribute: Some("b.jpg".to_string()),
            alt: None,
        }),
        TileMarkup::with_image(TileImage::new("   ")),
        TileMarkup::with_image(TileImage::new("c.jpg").with_alt("Nhẫn cưới")),
    ]
}

#[tokio::test]
async fn test_registry_from_markup() {
    let mut gallery = Gallery::new(GalleryAnchors::standard(), BatchConfig::default());
    gallery.init(&markup()).unwrap();

    let sources: Vec<&str> = gallery.registry().iter().map(|d| d.source()).collect();
    assert_eq!(sources, vec!["a.jpg", "b.jpg", "c.jpg"]);
    assert_eq!(gallery.registry().get(1).unwrap().alt_text(), "Gallery Image");

    assert!(gallery.tile_has_image(0));
    assert!(!gallery.tile_has_image(1));
    assert_eq!(gallery.strip().entries().len(), 3);
}

#[tokio::test]
async fn test_click_navigate_and_close() {
    let mut gallery = Gallery::new(GalleryAnchors::standard(), BatchConfig::default());
    gallery.init(&markup()).unwrap();

    assert!(gallery.open_tile("b.jpg"));
    assert_eq!(gallery.lightbox().counter(), Some("2 / 3"));

    gallery.handle_click(LightboxClick::Next);
    assert_eq!(gallery.lightbox().counter(), Some("3 / 3"));
    gallery.handle_key(LightboxKey::ArrowRight);
    assert_eq!(gallery.lightbox().counter(), Some("1 / 3"));
    gallery.handle_key(LightboxKey::ArrowLeft);
    assert_eq!(gallery.lightbox().counter(), Some("3 / 3"));

    gallery.handle_click(LightboxClick::Backdrop);
    assert!(!gallery.is_open());
    assert!(!gallery.background_scroll_locked());
}

#[tokio::test(start_paused = true)]
async fn test_fallback_reveals_all_tiles_in_batches() {
    let _ = tracing_subscriber::fmt::try_init();

    let mut gallery = Gallery::new(GalleryAnchors::standard(), BatchConfig::without_proximity());
    let tiles: Vec<TileMarkup> = (0..5)
        .map(|i| TileMarkup::with_image(TileImage::new(format!("{i}.jpg"))))
        .collect();
    gallery.init(&tiles).unwrap();
    let mut reveals = gallery.subscribe_reveals().unwrap();

    for i in 0..5 {
        gallery.tile_settled(i, if i == 2 { Settle::Failed } else { Settle::Loaded });
    }

    let start = Instant::now();
    let mut seen = Vec::new();
    while seen.len() < 5 {
        let event = reveals.recv().await.unwrap();
        seen.push((event.tile.0, event.outcome, Instant::now() - start));
    }

    let order: Vec<usize> = seen.iter().map(|(tile, _, _)| *tile).collect();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
    assert_eq!(seen[2].1, Settle::Failed);
    assert!(seen[3].2 >= BATCH_DELAY);
    assert!((0..5).all(|i| gallery.load_state(i) == Some(LoadState::Revealed)));
}

#[tokio::test(start_paused = true)]
async fn test_scrolling_reveals_nearby_tiles() {
    let _ = tracing_subscriber::fmt::try_init();

    let mut gallery = Gallery::new(GalleryAnchors::standard(), BatchConfig::default());
    let tiles: Vec<TileMarkup> = (0..6)
        .map(|i| TileMarkup::with_image(TileImage::new(format!("{i}.jpg"))))
        .collect();
    gallery.init(&tiles).unwrap();
    let mut reveals = gallery.subscribe_reveals().unwrap();

    // One 300px tile every 350px
    let rect_of = |i: usize| Some(Rect::new(0.0, i as f64 * 350.0, 300.0, 300.0));
    let viewport = |top: f64| Rect::new(0.0, top, 1000.0, 700.0);

    // Tile 2 starts at 700, inside the 100px margin
    assert_eq!(gallery.viewport_changed(&viewport(0.0), rect_of), 3);
    // Scrolling further brings tiles 3 and 4 near
    assert_eq!(gallery.viewport_changed(&viewport(900.0), rect_of), 2);

    for i in (0..5).rev() {
        gallery.tile_settled(i, Settle::Loaded);
    }

    let mut order = Vec::new();
    while order.len() < 5 {
        order.push(reveals.recv().await.unwrap().tile.0);
    }
    order.sort_unstable();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(gallery.load_state(5), Some(LoadState::Pending));

    gallery.shutdown();
}
