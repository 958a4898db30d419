//! Consumer-side helpers for influence fields: observed value ranges and
//! two-color heat-map shading.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod heatmap;

pub use heatmap::{map_range, shade, Rgb, ValueRange};
