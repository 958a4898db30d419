use std::collections::{BTreeMap, BTreeSet, VecDeque};

use thiserror::Error;

use field_core::{Adjacency, AdjacencyError, TerritoryId};

use crate::{FieldId, FieldTerritory, InfluenceMapSetup};

#[derive(Debug, Error)]
pub enum InfluenceError {
    /// Rates at or below zero cannot propagate; rates above one grow per hop.
    #[error("diffuse rate {rate} is outside (0, 1]")]
    InvalidDiffuseRate { rate: f64 },
    #[error("adjacency lookup failed")]
    Adjacency(#[from] AdjacencyError),
    #[error("visit budget of {budget} exhausted before diffusion settled")]
    VisitBudgetExceeded { budget: u64 },
}

/// A finalized influence field over a territory graph.
///
/// Built once from an [`InfluenceMapSetup`], then read-only: every territory
/// discovered by at least one seed's wave, with its accumulated value and the
/// adjacency links the waves traversed. Construction is all-or-nothing; no
/// partially diffused map is ever observable.
#[derive(Debug, Clone)]
pub struct InfluenceMap<T: Ord> {
    name: String,
    diffuse_rate: f64,
    records: Vec<FieldTerritory<T>>,
    index: BTreeMap<T, FieldId>,
}

impl<T: TerritoryId> InfluenceMap<T> {
    /// Diffuse every seed in `setup` across `adjacency` and merge the waves.
    ///
    /// Each seed runs an independent breadth-first wave: all territories at
    /// the same hop distance receive the same value, the value loses
    /// `1 - diffuse_rate` of itself (with integer truncation) per distance
    /// step, and a wave stops once its value truncates below 1. Waves from
    /// different seeds are summed into the shared accumulators, so seed
    /// order cannot affect the result.
    pub fn build<A>(setup: &InfluenceMapSetup<T>, adjacency: &A) -> Result<Self, InfluenceError>
    where
        A: Adjacency<Territory = T>,
    {
        let rate = setup.diffuse_rate();
        if !(rate > 0.0 && rate <= 1.0) {
            return Err(InfluenceError::InvalidDiffuseRate { rate });
        }

        let mut builder = Builder {
            records: Vec::new(),
            index: BTreeMap::new(),
            visits: 0,
            budget: setup.budget(),
        };
        for (territory, &value) in setup.seed_values() {
            builder.diffuse(territory, value, rate, adjacency)?;
            tracing::trace!(
                name = %setup.name(),
                seed = ?territory,
                value,
                "seed wave settled"
            );
        }
        tracing::debug!(
            name = %setup.name(),
            seeds = setup.seed_values().len(),
            territories = builder.records.len(),
            visits = builder.visits,
            "influence map built"
        );

        Ok(Self {
            name: setup.name().to_owned(),
            diffuse_rate: rate,
            records: builder.records,
            index: builder.index,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn diffuse_rate(&self) -> f64 {
        self.diffuse_rate
    }

    /// Number of discovered territories.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, territory: &T) -> bool {
        self.index.contains_key(territory)
    }

    pub fn get(&self, territory: &T) -> Option<&FieldTerritory<T>> {
        self.index
            .get(territory)
            .map(|id| &self.records[id.index()])
    }

    /// Accumulated value, or 0 for territories no wave discovered.
    pub fn value(&self, territory: &T) -> i64 {
        self.get(territory).map_or(0, FieldTerritory::value)
    }

    pub fn id_of(&self, territory: &T) -> Option<FieldId> {
        self.index.get(territory).copied()
    }

    /// Resolve an arena index obtained from [`FieldTerritory::links`].
    pub fn resolve(&self, id: FieldId) -> Option<&FieldTerritory<T>> {
        self.records.get(id.index())
    }

    /// All discovered territories in identity order.
    pub fn territories(&self) -> impl Iterator<Item = &FieldTerritory<T>> {
        self.index.values().map(|id| &self.records[id.index()])
    }

    /// Records of the links traversed out of `territory`.
    pub fn linked(&self, territory: &T) -> impl Iterator<Item = &FieldTerritory<T>> {
        self.get(territory)
            .into_iter()
            .flat_map(|record| record.links())
            .map(|id| &self.records[id.index()])
    }
}

/// Build one influence map per setup over a shared adjacency backend.
///
/// Builds are independent (each owns its arena), so they fan out across the
/// rayon pool; the first failure aborts the batch.
#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub fn build_all<T, A>(
    setups: &[InfluenceMapSetup<T>],
    adjacency: &A,
) -> Result<Vec<InfluenceMap<T>>, InfluenceError>
where
    T: TerritoryId + Send + Sync,
    A: Adjacency<Territory = T> + Sync,
{
    use rayon::prelude::*;

    setups
        .par_iter()
        .map(|setup| InfluenceMap::build(setup, adjacency))
        .collect()
}

/// Canonicalize-or-create registry, alive only while a map is under
/// construction.
struct Builder<T> {
    records: Vec<FieldTerritory<T>>,
    index: BTreeMap<T, FieldId>,
    visits: u64,
    budget: Option<u64>,
}

impl<T: TerritoryId> Builder<T> {
    fn canonical(&mut self, territory: &T) -> FieldId {
        if let Some(&id) = self.index.get(territory) {
            return id;
        }
        let id = FieldId(self.records.len() as u32);
        self.records.push(FieldTerritory::new(territory.clone()));
        self.index.insert(territory.clone(), id);
        id
    }

    /// Single-source decayed breadth-first wave.
    ///
    /// `last_of_distance` marks the final node of the current wavefront;
    /// passing it is the only point where the value decays and the wave may
    /// stop. An empty queue at that boundary ends the wave unconditionally.
    fn diffuse<A>(
        &mut self,
        seed: &T,
        initial: i64,
        rate: f64,
        adjacency: &A,
    ) -> Result<(), InfluenceError>
    where
        A: Adjacency<Territory = T>,
    {
        let seed_id = self.canonical(seed);

        let mut queue = VecDeque::new();
        // Scoped to this wave: a later seed's wave revisits everything.
        let mut seen = BTreeSet::new();
        let mut diffused = initial;
        let mut distance: u32 = 0;
        let mut last_of_distance = seed_id;

        seen.insert(seed_id);
        queue.push_back(seed_id);

        while let Some(current) = queue.pop_front() {
            self.spend_visit()?;

            let territory = {
                let record = &mut self.records[current.index()];
                record.add_value(diffused);
                record.record_distance(distance);
                record.territory().clone()
            };

            for neighbor in adjacency.neighbors(&territory)? {
                if neighbor == territory {
                    continue;
                }
                let neighbor_id = self.canonical(&neighbor);
                self.records[current.index()].link(neighbor_id);
                if seen.insert(neighbor_id) {
                    queue.push_back(neighbor_id);
                }
            }

            if current == last_of_distance {
                let Some(&tail) = queue.back() else {
                    break;
                };
                last_of_distance = tail;
                distance += 1;
                diffused = (diffused as f64 * rate).floor() as i64;
                if diffused < 1 {
                    // Anything still queued stays discovered but uncredited.
                    break;
                }
            }
        }

        Ok(())
    }

    fn spend_visit(&mut self) -> Result<(), InfluenceError> {
        self.visits += 1;
        if let Some(budget) = self.budget {
            if self.visits > budget {
                return Err(InfluenceError::VisitBudgetExceeded { budget });
            }
        }
        Ok(())
    }
}
