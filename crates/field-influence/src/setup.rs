use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use field_core::TerritoryId;

/// Named diffusion configuration: decay rate plus seed values.
///
/// Setups are plain data, built once by the caller (typically one per unit
/// type or objective) and reused across rounds; the influence map itself is
/// rebuilt fresh from the setup whenever the world changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InfluenceMapSetup<T: Ord> {
    name: String,
    diffuse_rate: f64,
    seeds: BTreeMap<T, i64>,
    visit_budget: Option<u64>,
}

impl<T: TerritoryId> InfluenceMapSetup<T> {
    /// `diffuse_rate` is the fraction of value retained per hop; it is
    /// validated when the map is built, not here.
    pub fn new(name: impl Into<String>, diffuse_rate: f64) -> Self {
        Self {
            name: name.into(),
            diffuse_rate,
            seeds: BTreeMap::new(),
            visit_budget: None,
        }
    }

    /// Add a seed territory with its initial value. Re-seeding the same
    /// territory replaces the earlier value.
    pub fn seed(mut self, territory: T, value: i64) -> Self {
        self.seeds.insert(territory, value);
        self
    }

    pub fn seeds(mut self, seeds: impl IntoIterator<Item = (T, i64)>) -> Self {
        self.seeds.extend(seeds);
        self
    }

    /// Cap the total number of node visits across all seed waves.
    ///
    /// A guard against generative or mis-wired adjacency backends; finite
    /// well-formed graphs never need one.
    pub fn visit_budget(mut self, budget: u64) -> Self {
        self.visit_budget = Some(budget);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn diffuse_rate(&self) -> f64 {
        self.diffuse_rate
    }

    pub fn seed_values(&self) -> &BTreeMap<T, i64> {
        &self.seeds
    }

    pub fn budget(&self) -> Option<u64> {
        self.visit_budget
    }
}
