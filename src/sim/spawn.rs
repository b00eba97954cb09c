//! Spawn system: a new ball every `interval_ms`

use rand::Rng;
use rand_pcg::Pcg32;

use super::motion::Bounds;
use super::store::{Entity, EntityStore, Position, Velocity};

/// Source of spawn randomness.
///
/// Production uses a seeded [`Pcg32`]; tests plug in scripted values.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`
    fn next_unit(&mut self) -> f32;

    /// Uniform index in `[0, len)`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Tracks when the last ball was spawned
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnTimer {
    /// Host timestamp of the last spawn (milliseconds)
    pub last_spawn_ms: f64,
    /// Minimum time between spawns (milliseconds)
    pub interval_ms: f64,
}

impl SpawnTimer {
    pub fn new(start_ms: f64, interval_ms: f64) -> Self {
        Self {
            last_spawn_ms: start_ms,
            interval_ms,
        }
    }

    /// True once at least `interval_ms` has passed since the last spawn
    pub fn is_due(&self, now_ms: f64) -> bool {
        now_ms - self.last_spawn_ms >= self.interval_ms
    }
}

/// Create one ball at a random spot at least `radius` away from every wall.
///
/// Speed is drawn from `speed_options` and applied as `(speed, -speed)`, so
/// new balls always head up and to the right.
pub fn spawn_ball(
    store: &mut EntityStore,
    bounds: Bounds,
    radius: f32,
    speed_options: &[f32],
    rng: &mut impl RandomSource,
) -> Entity {
    let speed = match speed_options.len() {
        0 => 0.0,
        len => speed_options[rng.next_index(len).min(len - 1)],
    };

    let x = rng.next_unit() * (bounds.width - 2.0 * radius) + radius;
    let y = rng.next_unit() * (bounds.height - 2.0 * radius) + radius;

    store.create(Position::new(x, y), Velocity::new(speed, -speed))
}

/// Spawn a ball if the interval has elapsed (inclusive) and restart the timer.
pub fn maybe_spawn(
    store: &mut EntityStore,
    now_ms: f64,
    timer: &mut SpawnTimer,
    bounds: Bounds,
    radius: f32,
    speed_options: &[f32],
    rng: &mut impl RandomSource,
) -> Option<Entity> {
    if !timer.is_due(now_ms) {
        return None;
    }

    let entity = spawn_ball(store, bounds, radius, speed_options, rng);
    timer.last_spawn_ms = now_ms;
    Some(entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    /// Replays fixed samples; indices and units cycle independently
    struct ScriptedRandom {
        units: Vec<f32>,
        indices: Vec<usize>,
        unit_pos: usize,
        index_pos: usize,
    }

    impl ScriptedRandom {
        fn new(units: &[f32], indices: &[usize]) -> Self {
            Self {
                units: units.to_vec(),
                indices: indices.to_vec(),
                unit_pos: 0,
                index_pos: 0,
            }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn next_unit(&mut self) -> f32 {
            let v = self.units[self.unit_pos % self.units.len()];
            self.unit_pos += 1;
            v
        }

        fn next_index(&mut self, len: usize) -> usize {
            let v = self.indices[self.index_pos % self.indices.len()];
            self.index_pos += 1;
            v % len
        }
    }

    const R: f32 = 5.0;
    const SPEEDS: [f32; 3] = [50.0, 100.0, 150.0];

    #[test]
    fn test_spawn_ball_maps_samples() {
        let mut store = EntityStore::new();
        let mut rng = ScriptedRandom::new(&[0.0, 0.5], &[2]);

        let e = spawn_ball(&mut store, Bounds::new(110.0, 210.0), R, &SPEEDS, &mut rng);

        let (pos, vel) = store.get(e).unwrap();
        assert_eq!(pos, Position::new(R, 105.0));
        assert_eq!(vel, Velocity::new(150.0, -150.0));
    }

    #[test]
    fn test_spawn_at_exact_interval() {
        let mut store = EntityStore::new();
        let mut rng = ScriptedRandom::new(&[0.5], &[0]);
        let mut timer = SpawnTimer::new(1000.0, 5000.0);

        let spawned = maybe_spawn(
            &mut store,
            6000.0,
            &mut timer,
            Bounds::new(100.0, 100.0),
            R,
            &SPEEDS,
            &mut rng,
        );

        assert_eq!(spawned, Some(0));
        assert_eq!(store.count(), 1);
        assert_eq!(timer.last_spawn_ms, 6000.0);
    }

    #[test]
    fn test_no_spawn_one_ms_early() {
        let mut store = EntityStore::new();
        let mut rng = ScriptedRandom::new(&[0.5], &[0]);
        let mut timer = SpawnTimer::new(1000.0, 5000.0);

        let spawned = maybe_spawn(
            &mut store,
            5999.0,
            &mut timer,
            Bounds::new(100.0, 100.0),
            R,
            &SPEEDS,
            &mut rng,
        );

        assert_eq!(spawned, None);
        assert!(store.is_empty());
        assert_eq!(timer.last_spawn_ms, 1000.0);
    }

    #[test]
    fn test_seeded_spawns_stay_inside_bounds() {
        let mut store = EntityStore::new();
        let mut rng = Pcg32::seed_from_u64(42);
        let bounds = Bounds::new(640.0, 480.0);

        for _ in 0..200 {
            spawn_ball(&mut store, bounds, R, &SPEEDS, &mut rng);
        }

        for (pos, vel) in store.iter() {
            assert!(pos.x >= R && pos.x <= bounds.width - R);
            assert!(pos.y >= R && pos.y <= bounds.height - R);
            assert!(SPEEDS.contains(&vel.vx));
            assert_eq!(vel.vy, -vel.vx);
        }
    }

    #[test]
    fn test_seeded_source_is_deterministic() {
        let mut a = Pcg32::seed_from_u64(7);
        let mut b = Pcg32::seed_from_u64(7);
        for _ in 0..16 {
            assert_eq!(a.next_unit(), b.next_unit());
            assert_eq!(a.next_index(3), b.next_index(3));
        }
    }

    #[test]
    fn test_empty_speed_list_spawns_at_rest() {
        let mut store = EntityStore::new();
        let mut rng = ScriptedRandom::new(&[0.25], &[0]);
        let e = spawn_ball(&mut store, Bounds::new(100.0, 100.0), R, &[], &mut rng);
        assert_eq!(store.get(e).unwrap().1, Velocity::new(0.0, 0.0));
    }
}
