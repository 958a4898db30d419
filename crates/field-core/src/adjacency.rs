use std::collections::{BTreeMap, BTreeSet};
use std::marker::PhantomData;

use thiserror::Error;

use crate::TerritoryId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdjacencyError {
    #[error("territory {territory} is not part of the map")]
    UnknownTerritory { territory: String },
}

/// Neighbor lookup over an implicit territory graph.
///
/// Implementations must be pure for the duration of one map build: the same
/// territory always yields the same neighbors, and a territory is never its
/// own neighbor. Isolated territories yield an empty list.
pub trait Adjacency {
    type Territory: TerritoryId;

    fn neighbors(&self, territory: &Self::Territory)
        -> Result<Vec<Self::Territory>, AdjacencyError>;
}

/// Closure-backed adjacency, for callers whose graph lives elsewhere.
pub struct FnAdjacency<T, F> {
    lookup: F,
    _marker: PhantomData<fn(&T) -> Vec<T>>,
}

impl<T, F> FnAdjacency<T, F>
where
    T: TerritoryId,
    F: Fn(&T) -> Vec<T>,
{
    pub fn new(lookup: F) -> Self {
        Self {
            lookup,
            _marker: PhantomData,
        }
    }
}

impl<T, F> Adjacency for FnAdjacency<T, F>
where
    T: TerritoryId,
    F: Fn(&T) -> Vec<T>,
{
    type Territory = T;

    fn neighbors(&self, territory: &T) -> Result<Vec<T>, AdjacencyError> {
        Ok((self.lookup)(territory))
    }
}

/// Edge-list territory graph.
///
/// Neighbor order is the territories' sort order, independent of insertion
/// order. A permissive graph treats unknown territories as isolated; a
/// `strict()` graph reports them as [`AdjacencyError::UnknownTerritory`].
#[derive(Debug, Clone, Default)]
pub struct TerritoryGraph<T> {
    edges: BTreeMap<T, BTreeSet<T>>,
    strict: bool,
}

impl<T: TerritoryId> TerritoryGraph<T> {
    pub fn new() -> Self {
        Self {
            edges: BTreeMap::new(),
            strict: false,
        }
    }

    /// Register territories up front, so isolated ones still count as known.
    pub fn with_territories(territories: impl IntoIterator<Item = T>) -> Self {
        let mut graph = Self::new();
        for territory in territories {
            graph.edges.entry(territory).or_default();
        }
        graph
    }

    /// Error on lookups of territories this graph has never seen.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Add a symmetric edge between `a` and `b`. Self-edges are ignored.
    pub fn link(&mut self, a: T, b: T) {
        if a == b {
            return;
        }
        self.edges.entry(a.clone()).or_default().insert(b.clone());
        self.edges.entry(b).or_default().insert(a);
    }

    /// Add a one-directional edge from `from` to `to`. Self-edges are ignored.
    pub fn link_directed(&mut self, from: T, to: T) {
        if from == to {
            return;
        }
        self.edges.entry(to.clone()).or_default();
        self.edges.entry(from).or_default().insert(to);
    }

    pub fn contains(&self, territory: &T) -> bool {
        self.edges.contains_key(territory)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn territories(&self) -> impl Iterator<Item = &T> {
        self.edges.keys()
    }

    /// Directed edges whose reverse edge is missing.
    ///
    /// A healthy wargame map is symmetric; asymmetric edges usually mean a
    /// mis-entered map file rather than intent.
    pub fn asymmetric_edges(&self) -> Vec<(T, T)> {
        let mut out = Vec::new();
        for (from, neighbors) in &self.edges {
            for to in neighbors {
                let reversed = self
                    .edges
                    .get(to)
                    .is_some_and(|back| back.contains(from));
                if !reversed {
                    out.push((from.clone(), to.clone()));
                }
            }
        }
        out
    }
}

impl<T: TerritoryId> Adjacency for TerritoryGraph<T> {
    type Territory = T;

    fn neighbors(&self, territory: &T) -> Result<Vec<T>, AdjacencyError> {
        match self.edges.get(territory) {
            Some(neighbors) => Ok(neighbors.iter().cloned().collect()),
            None if self.strict => Err(AdjacencyError::UnknownTerritory {
                territory: format!("{territory:?}"),
            }),
            None => Ok(Vec::new()),
        }
    }
}
