//! Collision detection and removal
//!
//! Balls that touch annihilate: every entity that overlaps at least one other
//! entity is removed at the end of the scan. There is no bounce.

use std::collections::BTreeSet;

use super::store::{Entity, EntityStore};

/// Find every entity overlapping at least one other entity.
///
/// Two balls overlap when the squared distance between their centers is
/// strictly less than `(2 * radius)^2`. All unordered pairs are checked.
pub fn detect(store: &EntityStore, radius: f32) -> BTreeSet<Entity> {
    let positions = store.positions();
    let threshold_sq = (2.0 * radius) * (2.0 * radius);
    let mut marked = BTreeSet::new();

    for i in 0..positions.len() {
        let a = positions[i].as_vec2();
        for (j, other) in positions.iter().enumerate().skip(i + 1) {
            if a.distance_squared(other.as_vec2()) < threshold_sq {
                marked.insert(i);
                marked.insert(j);
            }
        }
    }

    marked
}

/// Remove every colliding entity in one batch. Returns how many were removed.
pub fn detect_and_remove(store: &mut EntityStore, radius: f32) -> usize {
    let marked = detect(store, radius);
    if marked.is_empty() {
        return 0;
    }

    let removed = store.remove_all(&marked);
    log::trace!("Collision removed {} balls ({} left)", removed, store.count());
    removed
}
