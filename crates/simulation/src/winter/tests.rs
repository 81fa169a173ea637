//! Unit tests for the winter state.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::pointer::OFF_SURFACE;
    use crate::sim_rng::SimRng;
    use crate::surface::SurfaceSize;
    use crate::winter::systems::advance_snowflake;
    use crate::winter::types::{Snowflake, FREEZE_DURATION_MS, FREEZE_RADIUS};

    fn fixed_flake(x: f32, y: f32) -> Snowflake {
        Snowflake {
            x,
            y,
            radius: 3.0,
            speed: 1.0,
            frozen: false,
            frozen_at_ms: 0.0,
        }
    }

    // -------------------------------------------------------------------------
    // Spawn distribution
    // -------------------------------------------------------------------------

    #[test]
    fn test_spawn_distribution_bounds() {
        let mut rng = SimRng::from_seed_u64(9);
        let surface = SurfaceSize::default();
        for _ in 0..200 {
            let flake = Snowflake::spawn(&mut rng, &surface);
            assert!((0.0..surface.width).contains(&flake.x));
            assert!(flake.y >= -surface.height - 10.0 && flake.y <= -10.0);
            assert!((2.0..4.0).contains(&flake.radius));
            assert!((0.5..1.5).contains(&flake.speed));
            assert!(!flake.frozen);
        }
    }

    // -------------------------------------------------------------------------
    // Freeze / thaw
    // -------------------------------------------------------------------------

    #[test]
    fn test_pointer_proximity_freezes_and_timestamps() {
        let mut flake = fixed_flake(100.0, 100.0);
        advance_snowflake(&mut flake, Vec2::new(110.0, 100.0), 500.0, &[]);
        assert!(flake.frozen);
        assert_eq!(flake.frozen_at_ms, 500.0);
        assert_eq!(flake.y, 100.0, "a flake frozen this tick must not move");
    }

    #[test]
    fn test_pointer_outside_freeze_radius_keeps_falling() {
        let mut flake = fixed_flake(100.0, 100.0);
        let far = Vec2::new(100.0 + FREEZE_RADIUS + 1.0, 100.0);
        advance_snowflake(&mut flake, far, 0.0, &[]);
        assert!(!flake.frozen);
        assert_eq!(flake.y, 101.0);
    }

    #[test]
    fn test_frozen_flake_is_immobile_until_duration_elapses() {
        let mut flake = fixed_flake(100.0, 100.0);
        flake.frozen = true;
        flake.frozen_at_ms = 0.0;
        advance_snowflake(&mut flake, OFF_SURFACE, FREEZE_DURATION_MS - 1.0, &[]);
        assert!(flake.frozen);
        assert_eq!(flake.y, 100.0);
    }

    #[test]
    fn test_flake_thaws_after_duration() {
        let mut flake = fixed_flake(100.0, 100.0);
        flake.frozen = true;
        flake.frozen_at_ms = 0.0;
        advance_snowflake(&mut flake, OFF_SURFACE, FREEZE_DURATION_MS + 1.0, &[]);
        assert!(!flake.frozen);
        assert_eq!(flake.y, 101.0, "a thawed flake resumes falling immediately");
    }

    #[test]
    fn test_thawed_flake_can_refreeze_near_pointer() {
        let mut flake = fixed_flake(100.0, 100.0);
        flake.frozen = true;
        flake.frozen_at_ms = 0.0;
        let pointer = Vec2::new(100.0, 100.0);
        let later = FREEZE_DURATION_MS + 10.0;
        advance_snowflake(&mut flake, pointer, later, &[]);
        // Thawed this tick; the next tick re-triggers the freeze.
        advance_snowflake(&mut flake, pointer, later + 16.0, &[]);
        assert!(flake.frozen);
        assert_eq!(flake.frozen_at_ms, later + 16.0);
    }

    // -------------------------------------------------------------------------
    // Avoidance nudge
    // -------------------------------------------------------------------------

    #[test]
    fn test_overlap_with_frozen_flake_nudges_away() {
        let mut flake = fixed_flake(100.0, 100.0);
        // Frozen neighbor down-left of where the flake lands after falling.
        let frozen = [(98.0, 99.0, 3.0)];
        advance_snowflake(&mut flake, OFF_SURFACE, 0.0, &frozen);
        // Fell to y=101; separation (2, 2) with distance ~2.83 < 6.
        assert!(flake.x > 100.0, "nudged away on x");
        assert!(flake.y > 101.0, "nudged away on y");
    }

    #[test]
    fn test_no_nudge_without_overlap() {
        let mut flake = fixed_flake(100.0, 100.0);
        let frozen = [(200.0, 200.0, 3.0)];
        advance_snowflake(&mut flake, OFF_SURFACE, 0.0, &frozen);
        assert_eq!(flake.x, 100.0);
        assert_eq!(flake.y, 101.0);
    }

    #[test]
    fn test_frozen_flake_ignores_neighbors() {
        let mut flake = fixed_flake(100.0, 100.0);
        flake.frozen = true;
        flake.frozen_at_ms = 0.0;
        let frozen = [(100.0, 100.0, 3.0)];
        advance_snowflake(&mut flake, OFF_SURFACE, 100.0, &frozen);
        assert_eq!((flake.x, flake.y), (100.0, 100.0));
    }
}
