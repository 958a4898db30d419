//! Territory identity and adjacency seams for influence fields.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod territory;

pub use adjacency::{Adjacency, AdjacencyError, FnAdjacency, TerritoryGraph};
pub use territory::TerritoryId;
