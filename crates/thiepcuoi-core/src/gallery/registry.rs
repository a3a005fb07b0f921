//! Gallery image registry.
//!
//! Builds the ordered list of images the lightbox navigates over. The order
//! is the document order of the tiles and is the index used everywhere else.

use serde::{Deserialize, Serialize};

/// Alt text used when a tile image has none.
pub const DEFAULT_ALT: &str = "Gallery Image";

/// The image element inside a gallery tile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TileImage {
    /// Resolved (live) source of the element
    #[serde(default)]
    pub src: Option<String>,
    /// Raw `src` attribute as written in the markup
    #[serde(default)]
    pub src_attribute: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

impl TileImage {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            ..Default::default()
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Live source, falling back to the attribute. Blank values count as
    /// absent.
    pub fn resolved_source(&self) -> Option<&str> {
        fn non_blank(s: &Option<String>) -> Option<&str> {
            s.as_deref().map(str::trim).filter(|s| !s.is_empty())
        }
        non_blank(&self.src).or_else(|| non_blank(&self.src_attribute))
    }
}

/// One gallery cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TileMarkup {
    pub image: Option<TileImage>,
}

impl TileMarkup {
    pub fn with_image(image: TileImage) -> Self {
        Self { image: Some(image) }
    }

    pub fn empty() -> Self {
        Self { image: None }
    }

    /// Tiles holding a picture get the `has-image` styling.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// An image the lightbox can show.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageDescriptor {
    source: String,
    alt_text: String,
}

impl ImageDescriptor {
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }
}

/// Ordered, immutable list of gallery images.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRegistry {
    images: Vec<ImageDescriptor>,
}

impl ImageRegistry {
    /// Scan tiles in order, keeping every image with a non-blank source.
    pub fn build(tiles: &[TileMarkup]) -> Self {
        let images = tiles
            .iter()
            .filter_map(|tile| tile.image.as_ref())
            .filter_map(|image| {
                let source = image.resolved_source()?;
                let alt = image
                    .alt
                    .as_deref()
                    .filter(|a| !a.is_empty())
                    .unwrap_or(DEFAULT_ALT);
                Some(ImageDescriptor::new(source, alt))
            })
            .collect();

        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageDescriptor> {
        self.images.get(index)
    }

    /// Index of the first image with this resolved source.
    pub fn index_of(&self, source: &str) -> Option<usize> {
        let source = source.trim();
        self.images.iter().position(|img| img.source == source)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageDescriptor> {
        self.images.iter()
    }

    pub fn as_slice(&self) -> &[ImageDescriptor] {
        &self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_document_order_and_skips_blank_sources() {
        let tiles = vec![
            TileMarkup::with_image(TileImage::new("a.jpg").with_alt("A")),
            TileMarkup::empty(),
            TileMarkup::with_image(TileImage::new("   ")),
            TileMarkup::with_image(TileImage::new("b.jpg")),
        ];

        let registry = ImageRegistry::build(&tiles);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(0), Some(&ImageDescriptor::new("a.jpg", "A")));
        assert_eq!(
            registry.get(1),
            Some(&ImageDescriptor::new("b.jpg", DEFAULT_ALT))
        );
    }

    #[test]
    fn falls_back_to_src_attribute() {
        let image = TileImage {
            src: Some(String::new()),
            src_attribute: Some("photos/c.jpg".into()),
            alt: None,
        };
        assert_eq!(image.resolved_source(), Some("photos/c.jpg"));

        let registry = ImageRegistry::build(&[TileMarkup::with_image(image)]);
        assert_eq!(registry.index_of("photos/c.jpg"), Some(0));
    }

    #[test]
    fn resolved_source_is_trimmed() {
        let image = TileImage {
            src: Some("  live.jpg \n".into()),
            src_attribute: Some("attr.jpg".into()),
            alt: None,
        };
        assert_eq!(image.resolved_source(), Some("live.jpg"));
        assert_eq!(TileImage::default().resolved_source(), None);
    }

    #[test]
    fn index_of_returns_first_match() {
        let tiles = vec![
            TileMarkup::with_image(TileImage::new("dup.jpg")),
            TileMarkup::with_image(TileImage::new("dup.jpg")),
        ];
        let registry = ImageRegistry::build(&tiles);
        assert_eq!(registry.index_of("dup.jpg"), Some(0));
        assert_eq!(registry.index_of("missing.jpg"), None);
    }
}
