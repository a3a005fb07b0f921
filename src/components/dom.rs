//! Small bridges to the webview for what Dioxus events do not carry:
//! element geometry and scrolling.

use dioxus::prelude::*;
use serde::Deserialize;
use thiepcuoi_core::gallery::ScrollRequest;
use thiepcuoi_core::Rect;

/// `[index, x, y, width, height]` in viewport coordinates
type IndexedRect = (usize, f64, f64, f64, f64);

/// Geometry of the page at one scroll position.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMetrics {
    pub scroll_top: f64,
    pub width: f64,
    pub height: f64,
    tiles: Vec<IndexedRect>,
    sections: Vec<IndexedRect>,
}

impl PageMetrics {
    pub fn viewport(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn tile_rect(&self, index: usize) -> Option<Rect> {
        find_rect(&self.tiles, index)
    }

    pub fn section_rect(&self, index: usize) -> Option<Rect> {
        find_rect(&self.sections, index)
    }
}

fn find_rect(rects: &[IndexedRect], index: usize) -> Option<Rect> {
    rects
        .iter()
        .find(|(i, ..)| *i == index)
        .map(|&(_, x, y, w, h)| Rect::new(x, y, w, h))
}

const MEASURE_SCRIPT: &str = r#"
const page = document.getElementById('page');
if (!page) { return null; }
const collect = (selector, key) => Array.from(document.querySelectorAll(selector)).map((el) => {
    const r = el.getBoundingClientRect();
    return [Number(el.dataset[key]), r.x, r.y, r.width, r.height];
});
return {
    scroll_top: page.scrollTop,
    width: window.innerWidth,
    height: window.innerHeight,
    tiles: collect('[data-gallery-index]', 'galleryIndex'),
    sections: collect('[data-reveal-index]', 'revealIndex'),
};
"#;

/// Measure the page. `None` before the page is mounted.
pub async fn measure_page() -> Option<PageMetrics> {
    match document::eval(MEASURE_SCRIPT).join::<Option<PageMetrics>>().await {
        Ok(metrics) => metrics,
        Err(e) => {
            tracing::debug!(error = ?e, "Page measurement failed");
            None
        }
    }
}

/// `offsetTop` of the element with `id`.
pub async fn offset_top(id: &str) -> Option<f64> {
    let script = format!(
        "const el = document.getElementById({id:?}); return el ? el.offsetTop : null;"
    );
    document::eval(&script).join::<Option<f64>>().await.ok().flatten()
}

pub fn scroll_page_to(top: f64) {
    let script = format!(
        "const page = document.getElementById('page'); if (page) {{ page.scrollTo({{ top: {top}, behavior: 'smooth' }}); }}"
    );
    let _ = document::eval(&script);
}

fn scroll_into_view_script(request: &ScrollRequest) -> String {
    format!(
        "const el = document.querySelector('[data-thumb-index=\"{}\"]'); if (!el) {{ return false; }} el.scrollIntoView({{ behavior: '{}', block: '{}', inline: '{}' }}); return true;",
        request.index,
        request.behavior.as_str(),
        request.block.as_str(),
        request.inline.as_str(),
    )
}

/// Bring a thumbnail into view, retrying with a plain jump when smooth
/// scrolling throws.
pub async fn scroll_thumbnail(request: ScrollRequest) {
    let smooth = document::eval(&scroll_into_view_script(&request))
        .join::<bool>()
        .await;
    if smooth.is_err() {
        let _ = document::eval(&scroll_into_view_script(&request.fallback()))
            .join::<bool>()
            .await;
    }
}
