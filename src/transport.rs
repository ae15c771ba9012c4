//! The transport graph: non-walking links between tiles.

use std::collections::HashMap;

use serde::Deserialize;

use crate::world::WorldTile;

/// Directed links from a source tile to the tiles it leads to.
///
/// Iteration order is deterministic: sources in the order they were first
/// linked, and each source's destinations in insertion order. The transport
/// label in the scene is built from this order, so it must not depend on
/// hashing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportGraph {
    entries: Vec<(WorldTile, Vec<WorldTile>)>,
    index: HashMap<WorldTile, usize>,
}

impl TransportGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a link. Returns `false` if it was already present.
    pub fn link(&mut self, source: WorldTile, destination: WorldTile) -> bool {
        let slot = *self.index.entry(source).or_insert_with(|| {
            self.entries.push((source, Vec::new()));
            self.entries.len() - 1
        });
        let destinations = &mut self.entries[slot].1;
        if destinations.contains(&destination) {
            return false;
        }
        destinations.push(destination);
        true
    }

    pub fn destinations(&self, source: &WorldTile) -> &[WorldTile] {
        self.index
            .get(source)
            .map(|&slot| self.entries[slot].1.as_slice())
            .unwrap_or(&[])
    }

    /// Iterates `(source, destinations)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&WorldTile, &[WorldTile])> {
        self.entries.iter().map(|(s, d)| (s, d.as_slice()))
    }

    /// Number of sources with at least one link.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of links across all sources.
    pub fn link_count(&self) -> usize {
        self.entries.iter().map(|(_, d)| d.len()).sum()
    }
}

impl FromIterator<(WorldTile, WorldTile)> for TransportGraph {
    fn from_iter<I: IntoIterator<Item = (WorldTile, WorldTile)>>(iter: I) -> Self {
        let mut graph = TransportGraph::new();
        for (source, destination) in iter {
            graph.link(source, destination);
        }
        graph
    }
}

/// One link as it appears in a JSON transport list.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct TransportLink {
    pub from: WorldTile,
    pub to: WorldTile,
}

impl TransportGraph {
    /// Builds a graph from a JSON array of `{ "from": .., "to": .. }` links.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let links: Vec<TransportLink> = serde_json::from_str(json)?;
        Ok(links.into_iter().map(|l| (l.from, l.to)).collect())
    }
}
