//! Entity storage
//!
//! Positions and velocities live in two parallel arrays. An entity is just
//! its index; both arrays always have the same length and `positions[i]`
//! and `velocities[i]` belong to the same ball.

use std::collections::BTreeSet;

use glam::Vec2;

/// Entity identifier: index into the component arrays
pub type Entity = usize;

/// Position component (viewport pixels, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Velocity component (units per second)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub vx: f32,
    pub vy: f32,
}

impl Velocity {
    pub const fn new(vx: f32, vy: f32) -> Self {
        Self { vx, vy }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.vx, self.vy)
    }
}

impl From<Vec2> for Velocity {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Paired component storage
///
/// The arrays are private so nothing can grow or shrink one without the
/// other. Systems mutate components through [`EntityStore::iter_mut`].
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    positions: Vec<Position>,
    velocities: Vec<Velocity>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entity and return its index
    pub fn create(&mut self, position: Position, velocity: Velocity) -> Entity {
        let entity = self.positions.len();
        self.positions.push(position);
        self.velocities.push(velocity);
        entity
    }

    /// Remove every listed entity in a single filtering pass.
    ///
    /// Survivors keep their relative order and are re-indexed densely.
    /// Indices past the end are ignored. Returns how many were removed.
    pub fn remove_all(&mut self, indices: &BTreeSet<Entity>) -> usize {
        if indices.is_empty() {
            return 0;
        }

        let before = self.positions.len();

        let mut index = 0;
        self.positions.retain(|_| {
            let keep = !indices.contains(&index);
            index += 1;
            keep
        });

        let mut index = 0;
        self.velocities.retain(|_| {
            let keep = !indices.contains(&index);
            index += 1;
            keep
        });

        debug_assert_eq!(self.positions.len(), self.velocities.len());
        before - self.positions.len()
    }

    /// Remove every entity
    pub fn clear(&mut self) {
        self.positions.clear();
        self.velocities.clear();
    }

    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Velocity] {
        &self.velocities
    }

    pub fn get(&self, entity: Entity) -> Option<(Position, Velocity)> {
        Some((*self.positions.get(entity)?, *self.velocities.get(entity)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Position, &Velocity)> {
        self.positions.iter().zip(self.velocities.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&mut Position, &mut Velocity)> {
        self.positions.iter_mut().zip(self.velocities.iter_mut())
    }

    /// Owned copy of all positions (for presenters)
    pub fn snapshot(&self) -> Vec<Position> {
        self.positions.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn store_with(n: usize) -> EntityStore {
        let mut store = EntityStore::new();
        for i in 0..n {
            let f = i as f32;
            store.create(Position::new(f, f * 2.0), Velocity::new(-f, f));
        }
        store
    }

    #[test]
    fn test_create_returns_sequential_indices() {
        let mut store = EntityStore::new();
        assert_eq!(store.create(Position::new(1.0, 2.0), Velocity::new(3.0, 4.0)), 0);
        assert_eq!(store.create(Position::new(5.0, 6.0), Velocity::new(7.0, 8.0)), 1);
        assert_eq!(store.count(), 2);
        assert_eq!(
            store.get(1),
            Some((Position::new(5.0, 6.0), Velocity::new(7.0, 8.0)))
        );
    }

    #[test]
    fn test_remove_all_keeps_survivor_order() {
        let mut store = store_with(6);
        let removed = store.remove_all(&BTreeSet::from([1, 3, 4]));
        assert_eq!(removed, 3);

        // Survivors were 0, 2, 5 - now densely packed with components still paired
        let xs: Vec<f32> = store.positions().iter().map(|p| p.x).collect();
        let vxs: Vec<f32> = store.velocities().iter().map(|v| v.vx).collect();
        assert_eq!(xs, vec![0.0, 2.0, 5.0]);
        assert_eq!(vxs, vec![-0.0, -2.0, -5.0]);
    }

    #[test]
    fn test_remove_all_ignores_out_of_range() {
        let mut store = store_with(2);
        assert_eq!(store.remove_all(&BTreeSet::from([7])), 0);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_remove_all_empty_set_is_noop() {
        let mut store = store_with(3);
        assert_eq!(store.remove_all(&BTreeSet::new()), 0);
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_snapshot_is_detached_copy() {
        let mut store = store_with(3);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.as_slice(), store.positions());

        store.clear();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[2], Position::new(2.0, 4.0));
    }

    #[test]
    fn test_clear() {
        let mut store = store_with(4);
        store.clear();
        assert!(store.is_empty());
        assert!(store.velocities().is_empty());
    }

    proptest! {
        #[test]
        fn remove_all_keeps_arrays_paired(
            n in 0usize..40,
            marks in prop::collection::btree_set(0usize..50, 0..20),
        ) {
            let mut store = store_with(n);
            let expected_removed = marks.iter().filter(|&&i| i < n).count();

            let removed = store.remove_all(&marks);

            prop_assert_eq!(removed, expected_removed);
            prop_assert_eq!(store.positions().len(), store.velocities().len());
            prop_assert_eq!(store.count(), n - expected_removed);
            // Every survivor still carries its own velocity (vx == -x by construction)
            for (pos, vel) in store.iter() {
                prop_assert_eq!(vel.vx, -pos.x);
                prop_assert_eq!(pos.y, pos.x * 2.0);
            }
        }
    }
}
