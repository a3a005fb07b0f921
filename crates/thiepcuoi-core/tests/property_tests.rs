//! Property-based tests for gallery navigation
//!
//! Uses proptest to check the lightbox index and the thumbnail strip's
//! active marker under arbitrary interaction sequences.

use proptest::prelude::*;
use thiepcuoi_core::gallery::{wrap_index, BatchConfig, Direction, Gallery, GalleryAnchors};
use thiepcuoi_core::{LightboxClick, LightboxKey, TileImage, TileMarkup};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Interactions a guest can perform on the gallery
#[derive(Debug, Clone)]
enum GalleryOp {
    Open(usize),
    Key(LightboxKey),
    Click(LightboxClick),
    Thumbnail(usize),
}

fn key_strategy() -> impl Strategy<Value = LightboxKey> {
    prop_oneof![
        Just(LightboxKey::Escape),
        Just(LightboxKey::ArrowLeft),
        Just(LightboxKey::ArrowRight),
    ]
}

fn click_strategy() -> impl Strategy<Value = LightboxClick> {
    prop_oneof![
        Just(LightboxClick::Backdrop),
        Just(LightboxClick::Content),
        Just(LightboxClick::Previous),
        Just(LightboxClick::Next),
        Just(LightboxClick::Close),
    ]
}

fn ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<GalleryOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => (0..12usize).prop_map(GalleryOp::Open),
            3 => key_strategy().prop_map(GalleryOp::Key),
            2 => click_strategy().prop_map(GalleryOp::Click),
            1 => (0..12usize).prop_map(GalleryOp::Thumbnail),
        ],
        0..max_ops,
    )
}

/// A gallery without lazy loading, so no runtime is needed
fn gallery(count: usize) -> Gallery {
    let anchors = GalleryAnchors {
        container: None,
        ..GalleryAnchors::standard()
    };
    let tiles: Vec<TileMarkup> = (0..count)
        .map(|i| TileMarkup::with_image(TileImage::new(format!("{i}.jpg"))))
        .collect();

    let mut gallery = Gallery::new(anchors, BatchConfig::default());
    gallery.init(&tiles).unwrap();
    gallery
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Stepping forward `count` times returns to the start
    #[test]
    fn full_cycle_returns_home(count in 1..50usize, start in 0..50usize) {
        let start = start % count;
        let mut index = start;
        for _ in 0..count {
            index = wrap_index(index, Direction::Next.offset(), count);
        }
        prop_assert_eq!(index, start);
    }

    /// Previous undoes next
    #[test]
    fn previous_inverts_next(count in 1..50usize, start in 0..50usize) {
        let start = start % count;
        let next = wrap_index(start, 1, count);
        prop_assert!(next < count);
        prop_assert_eq!(wrap_index(next, -1, count), start);
    }

    /// The index stays in range and the strip marks exactly the current image
    #[test]
    fn index_and_active_marker_agree(count in 1..8usize, ops in ops_strategy(40)) {
        let mut gallery = gallery(count);

        for op in ops {
            match op {
                GalleryOp::Open(i) => { gallery.open(i); }
                GalleryOp::Key(key) => { gallery.handle_key(key); }
                GalleryOp::Click(target) => { gallery.handle_click(target); }
                GalleryOp::Thumbnail(i) => { gallery.thumbnail_clicked(&i.to_string()); }
            }

            prop_assert!(gallery.current_index() < count);
            prop_assert_eq!(gallery.strip().active(), Some(gallery.current_index()));
            prop_assert_eq!(gallery.background_scroll_locked(), gallery.is_open());

            if gallery.is_open() {
                let expected = format!("{} / {}", gallery.current_index() + 1, count);
                prop_assert_eq!(gallery.lightbox().counter(), Some(expected.as_str()));
            }
        }
    }
}
