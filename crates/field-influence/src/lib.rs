//! Decayed multi-source influence diffusion over territory adjacency graphs.
//!
//! Each seed territory carries an initial value that spreads outward as a
//! breadth-first wave, losing a fixed fraction per hop; waves from different
//! seeds are merged by summation. The result is a per-territory scalar field
//! suitable for AI heuristics ("how valuable/threatening is this territory")
//! and heat-map rendering.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod map;
pub mod setup;
pub mod territory;

pub use map::{InfluenceError, InfluenceMap};
pub use setup::InfluenceMapSetup;
pub use territory::{FieldId, FieldTerritory};

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub use map::build_all;
