//! WorldState - ordered plate container
//!
//! Insertion order is the evaluation order of every tick and the drawing
//! order for observers, so plates are kept in a `Vec` with an id index on
//! the side rather than in a hash map.

use geo_types::Polygon;
use std::collections::HashMap;

use crate::core::error::{PlateError, Result};
use crate::core::types::PlateId;
use crate::plates::plate::Plate;

/// Ordered mapping from plate id to plate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldState {
    plates: Vec<Plate>,
    index: HashMap<PlateId, usize>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a world from plates in the given order, rejecting duplicate ids
    pub fn from_plates(plates: impl IntoIterator<Item = Plate>) -> Result<Self> {
        let mut world = Self::new();
        for plate in plates {
            world.insert(plate)?;
        }
        Ok(world)
    }

    /// Append a plate at the end of the evaluation order
    pub fn insert(&mut self, plate: Plate) -> Result<()> {
        if self.index.contains_key(&plate.id) {
            return Err(PlateError::DuplicatePlate(plate.id));
        }
        self.index.insert(plate.id, self.plates.len());
        self.plates.push(plate);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.plates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    pub fn get(&self, id: PlateId) -> Option<&Plate> {
        self.index.get(&id).map(|&i| &self.plates[i])
    }

    /// Plates in evaluation order
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plate> {
        self.plates.iter()
    }

    pub fn ids(&self) -> Vec<PlateId> {
        self.plates.iter().map(|p| p.id).collect()
    }

    /// Replace a plate's polygon, returning the previous one
    pub fn update_polygon(&mut self, id: PlateId, polygon: Polygon<f64>) -> Option<Polygon<f64>> {
        let slot = *self.index.get(&id)?;
        Some(self.plates[slot].set_polygon(polygon))
    }

    pub(crate) fn set_polygon_at(&mut self, slot: usize, polygon: Polygon<f64>) {
        self.plates[slot].set_polygon(polygon);
    }

    /// Same plates, evaluation order reversed
    pub fn reversed(&self) -> Self {
        let plates: Vec<Plate> = self.plates.iter().rev().cloned().collect();
        let index = plates.iter().enumerate().map(|(i, p)| (p.id, i)).collect();
        Self { plates, index }
    }

    /// One-line description for logs
    pub fn summary(&self) -> String {
        let names: Vec<&str> = self.plates.iter().map(|p| p.name.as_str()).collect();
        format!("{} plates [{}]", self.plates.len(), names.join(", "))
    }
}

impl<'a> IntoIterator for &'a WorldState {
    type Item = &'a Plate;
    type IntoIter = std::slice::Iter<'a, Plate>;

    fn into_iter(self) -> Self::IntoIter {
        self.plates.iter()
    }
}
