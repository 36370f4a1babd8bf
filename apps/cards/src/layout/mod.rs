// Card layout: font metrics, word-wrap, page geometry and cell text fitting.
// Everything here is pure computation; drawing lives in `render`.

pub mod font_metrics;
pub mod geometry;
pub mod page_config;
pub mod text_fit;
pub mod wrap;

// Re-export the public API consumed by the renderer and driver.
pub use font_metrics::{FontFace, StandardMetrics, TextMeasure};
pub use geometry::{PageGeometry, Rect};
pub use page_config::{Color, LayoutConfig};
pub use text_fit::fit_text;
