//! Map-file format: territories, edges, and named field specs.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use field_core::TerritoryGraph;
use field_influence::InfluenceMapSetup;

#[derive(Debug, Deserialize)]
pub struct MapFile {
    /// Territories with no edges still belong to the map.
    #[serde(default)]
    pub territories: Vec<String>,

    /// Symmetric edges unless listed in `one_way`.
    #[serde(default)]
    pub edges: Vec<(String, String)>,

    #[serde(default)]
    pub one_way: Vec<(String, String)>,

    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub diffuse_rate: f64,
    pub seeds: BTreeMap<String, i64>,

    #[serde(default)]
    pub visit_budget: Option<u64>,
}

impl MapFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading map file {}", path.display()))?;
        let map: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&raw)
                .with_context(|| format!("parsing {} as JSON", path.display()))?,
            _ => serde_yaml::from_str(&raw)
                .with_context(|| format!("parsing {} as YAML", path.display()))?,
        };
        if map.fields.is_empty() {
            bail!("map file {} defines no fields", path.display());
        }
        Ok(map)
    }

    pub fn graph(&self) -> TerritoryGraph<String> {
        let mut graph = TerritoryGraph::with_territories(self.territories.iter().cloned());
        for (a, b) in &self.edges {
            graph.link(a.clone(), b.clone());
        }
        for (from, to) in &self.one_way {
            graph.link_directed(from.clone(), to.clone());
        }
        graph
    }

    pub fn setups(&self) -> Vec<InfluenceMapSetup<String>> {
        self.fields
            .iter()
            .map(|spec| {
                let mut setup = InfluenceMapSetup::new(&spec.name, spec.diffuse_rate)
                    .seeds(spec.seeds.iter().map(|(t, &v)| (t.clone(), v)));
                if let Some(budget) = spec.visit_budget {
                    setup = setup.visit_budget(budget);
                }
                setup
            })
            .collect()
    }
}
