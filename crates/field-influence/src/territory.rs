use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of a territory record inside an influence map's arena.
///
/// Discovered adjacency is stored as indices rather than record-to-record
/// references, so the traversed graph stays cycle-free in ownership terms
/// even though the territory graph itself is cyclic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldId(pub(crate) u32);

impl FieldId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One territory's accumulated diffusion state.
///
/// Records are canonicalized: an influence map holds exactly one record per
/// territory identity, shared by every seed's wave.
#[derive(Debug, Clone)]
pub struct FieldTerritory<T> {
    territory: T,
    value: i64,
    distance: Option<u32>,
    links: BTreeSet<FieldId>,
}

impl<T> FieldTerritory<T> {
    pub(crate) fn new(territory: T) -> Self {
        Self {
            territory,
            value: 0,
            distance: None,
            links: BTreeSet::new(),
        }
    }

    pub fn territory(&self) -> &T {
        &self.territory
    }

    /// Sum of every seed wave that reached this territory before its cutoff.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Minimum hop distance at which any seed's wave credited this territory.
    ///
    /// Seeds are distance 0. `None` means the territory was discovered as a
    /// neighbor but no wave reached it before decaying out.
    pub fn distance(&self) -> Option<u32> {
        self.distance
    }

    /// Adjacency links traversed out of this territory, in arena-index order.
    ///
    /// Only edges the waves actually expanded are recorded, not the full
    /// neighbor set of the underlying graph.
    pub fn links(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.links.iter().copied()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub(crate) fn add_value(&mut self, amount: i64) {
        self.value = self.value.saturating_add(amount);
    }

    pub(crate) fn record_distance(&mut self, distance: u32) {
        self.distance = Some(match self.distance {
            Some(existing) => existing.min(distance),
            None => distance,
        });
    }

    pub(crate) fn link(&mut self, other: FieldId) {
        self.links.insert(other);
    }
}
