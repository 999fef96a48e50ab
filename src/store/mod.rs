//! In-memory record store.
//!
//! Records keep insertion order until [`PlanetStore::sort_by_name`] is called.
//! Names act as a de facto key: lookup and deletion only ever touch the first
//! record with a matching name.

use std::slice;

use crate::models::Planet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetStore {
    planets: Vec<Planet>,
}

impl PlanetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Planet> {
        self.planets.iter()
    }

    pub fn into_vec(self) -> Vec<Planet> {
        self.planets
    }

    // ============================================================
    // Mutations
    // ============================================================

    /// Append a planet. Duplicate names are accepted.
    pub fn insert(&mut self, planet: Planet) {
        tracing::debug!(name = planet.name(), "inserting planet");
        self.planets.push(planet);
    }

    /// Remove the first planet named exactly `name`.
    ///
    /// Returns `false` when nothing matched; the store is then unchanged.
    pub fn delete_by_name(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.planets.remove(index);
                tracing::debug!(name, index, "deleted planet");
                true
            }
            None => {
                tracing::debug!(name, "delete found no planet");
                false
            }
        }
    }

    /// Order planets ascending by name (byte-wise, case-sensitive).
    ///
    /// The sort is stable so records sharing a name keep their relative order,
    /// which keeps "first match" lookups meaningful after sorting.
    pub fn sort_by_name(&mut self) {
        self.planets.sort_by(|a, b| a.name().cmp(b.name()));
        tracing::debug!(count = self.planets.len(), "sorted planets by name");
    }

    // ============================================================
    // Queries
    // ============================================================

    /// First planet whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.name() == name)
    }

    /// All planets in current order, or `None` when the store is empty.
    pub fn list_all(&self) -> Option<&[Planet]> {
        if self.planets.is_empty() {
            None
        } else {
            Some(&self.planets)
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.planets.iter().position(|p| p.name() == name)
    }
}

impl From<Vec<Planet>> for PlanetStore {
    fn from(planets: Vec<Planet>) -> Self {
        Self { planets }
    }
}

impl<'a> IntoIterator for &'a PlanetStore {
    type Item = &'a Planet;
    type IntoIter = slice::Iter<'a, Planet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
