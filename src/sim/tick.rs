//! Per-frame pipeline
//!
//! One call per host frame: clock -> motion -> collision -> spawn.
//! Drawing happens afterwards in the host, from the resulting state.

use super::collision::detect_and_remove;
use super::motion::{Bounds, update};
use super::spawn::maybe_spawn;
use super::state::SimState;
use super::store::Entity;

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    /// Elapsed time applied to motion (seconds)
    pub dt: f32,
    /// Balls annihilated this frame
    pub removed: usize,
    /// Ball created this frame, if the spawn interval elapsed
    pub spawned: Option<Entity>,
    /// Balls alive after the frame
    pub population: usize,
    /// Published FPS value
    pub fps: u32,
}

/// Advance the simulation to host time `now_ms` on a surface of `bounds`
pub fn tick(state: &mut SimState, now_ms: f64, bounds: Bounds) -> FrameStats {
    if !state.is_running() {
        return FrameStats {
            population: state.store.count(),
            fps: state.fps(),
            ..Default::default()
        };
    }

    let raw_dt = state.clock.tick(now_ms);
    let dt = match state.config.max_frame_dt {
        Some(max) => raw_dt.min(max),
        None => raw_dt,
    };

    let radius = state.config.ball_radius;

    update(&mut state.store, dt, bounds, radius);

    let removed = detect_and_remove(&mut state.store, radius);

    let spawned = maybe_spawn(
        &mut state.store,
        now_ms,
        &mut state.spawner,
        bounds,
        radius,
        &state.config.speed_options,
        &mut state.rng,
    );

    if removed > 0 {
        log::debug!(
            "{} balls annihilated, {} remaining",
            removed,
            state.store.count()
        );
    }
    if let Some(entity) = spawned {
        log::debug!("Spawned ball {} ({} total)", entity, state.store.count());
    }

    FrameStats {
        dt,
        removed,
        spawned,
        population: state.store.count(),
        fps: state.fps(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{SimConfig, SimPhase};
    use crate::sim::store::{Position, Velocity};

    const BOUNDS: Bounds = Bounds::new(100.0, 100.0);

    fn running(config: SimConfig) -> SimState {
        let mut state = SimState::new(12345, SimConfig {
            initial_balls: 0,
            ..config
        });
        state.start(0.0, BOUNDS);
        state
    }

    #[test]
    fn test_idle_tick_does_nothing() {
        let mut state = SimState::new(12345, SimConfig::default());
        let stats = tick(&mut state, 10_000.0, BOUNDS);
        assert_eq!(state.phase, SimPhase::Idle);
        assert_eq!(stats.population, 0);
        assert_eq!(stats.spawned, None);
        assert_eq!(state.clock.fps_counter, 0);
    }

    #[test]
    fn test_empty_store_frame() {
        let mut state = running(SimConfig::default());
        let stats = tick(&mut state, 16.0, BOUNDS);
        assert!((stats.dt - 0.016).abs() < 1e-6);
        assert_eq!(stats.removed, 0);
        assert_eq!(stats.spawned, None);
        assert_eq!(stats.population, 0);
    }

    #[test]
    fn test_pipeline_order_moves_then_removes_then_spawns() {
        let mut state = running(SimConfig::default());
        // Two balls converging; after 1s they overlap
        state
            .store
            .create(Position::new(30.0, 50.0), Velocity::new(10.0, 0.0));
        state
            .store
            .create(Position::new(70.0, 50.0), Velocity::new(-10.0, 0.0));

        let stats = tick(&mut state, 1000.0, BOUNDS);
        assert_eq!(stats.removed, 0);
        assert_eq!(stats.population, 2);

        let stats = tick(&mut state, 2000.0, BOUNDS);
        assert_eq!(stats.removed, 2);
        assert_eq!(stats.population, 0);

        // Spawn interval (5000ms) reached: the new ball survives its first frame
        let stats = tick(&mut state, 5000.0, BOUNDS);
        assert_eq!(stats.spawned, Some(0));
        assert_eq!(stats.population, 1);
    }

    #[test]
    fn test_population_only_grows_at_spawn() {
        let mut state = running(SimConfig {
            spawn_interval_ms: 500.0,
            ..Default::default()
        });
        let bounds = Bounds::new(200.0, 200.0);

        let mut last = state.store.count();
        for frame in 1..=600 {
            let stats = tick(&mut state, frame as f64 * 16.0, bounds);
            assert_eq!(state.store.positions().len(), state.store.velocities().len());
            if stats.population > last {
                assert!(stats.spawned.is_some());
                assert_eq!(stats.population, last - stats.removed + 1);
            }
            last = stats.population;
        }
    }

    #[test]
    fn test_large_dt_passes_through_by_default() {
        let mut state = running(SimConfig::default());
        let stats = tick(&mut state, 30_000.0, BOUNDS);
        assert_eq!(stats.dt, 30.0);
    }

    #[test]
    fn test_max_frame_dt_clamps_when_configured() {
        let mut state = running(SimConfig {
            max_frame_dt: Some(0.1),
            ..Default::default()
        });
        state
            .store
            .create(Position::new(50.0, 50.0), Velocity::new(10.0, 0.0));

        let stats = tick(&mut state, 30_000.0, BOUNDS);
        assert_eq!(stats.dt, 0.1);
        assert_eq!(state.store.positions()[0], Position::new(51.0, 50.0));
    }

    #[test]
    fn test_fps_reported_in_stats() {
        let mut state = running(SimConfig::default());
        let mut stats = FrameStats::default();
        for frame in 1..=60 {
            stats = tick(&mut state, frame as f64 * (1000.0 / 60.0 + 0.0001), BOUNDS);
        }
        assert_eq!(stats.fps, 60);
    }

    #[test]
    fn test_determinism() {
        let config = SimConfig {
            initial_balls: 4,
            spawn_interval_ms: 250.0,
            ..Default::default()
        };
        let bounds = Bounds::new(320.0, 240.0);
        let mut a = SimState::new(99999, config.clone());
        let mut b = SimState::new(99999, config);
        a.start(0.0, bounds);
        b.start(0.0, bounds);

        for frame in 1..=300 {
            let now = frame as f64 * 16.0;
            assert_eq!(tick(&mut a, now, bounds), tick(&mut b, now, bounds));
        }
        assert_eq!(a.store.positions(), b.store.positions());
    }
}
