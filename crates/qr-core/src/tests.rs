//! Unit tests for qr-core.

use crate::{Arena, EvaderId, EvaderRng, Rect, SessionClock, SessionConfig, Vec2};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

mod vec2 {
    use super::*;

    #[test]
    fn zero_vector_normalizes_to_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
        // Sub-epsilon vectors count as zero too — no NaN leaks.
        let tiny = Vec2::new(1e-20, -1e-20).normalized();
        assert_eq!(tiny, Vec2::ZERO);
    }

    #[test]
    fn normalized_is_unit_length() {
        let v = Vec2::new(3.0, -4.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.x - 0.6).abs() < 1e-6);
        assert!((v.y + 0.8).abs() < 1e-6);
    }

    #[test]
    fn perp_is_ccw_rotation() {
        let v = Vec2::new(1.0, 0.0).perp();
        assert_eq!(v, Vec2::new(0.0, 1.0));
        // Perpendicularity holds for arbitrary vectors.
        let w = Vec2::new(2.5, -7.0);
        assert!(w.dot(w.perp()).abs() < 1e-6);
    }

    #[test]
    fn clamp_length_caps_but_preserves_short_vectors() {
        let long = Vec2::new(30.0, 40.0).clamp_length(10.0);
        assert!((long.length() - 10.0).abs() < 1e-4);
        let short = Vec2::new(1.0, 2.0);
        assert_eq!(short.clamp_length(10.0), short);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, -2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(5.0, -1.0));
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

mod rect {
    use super::*;

    #[test]
    fn min_max_corners() {
        let r = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(2.0, 3.0));
        assert_eq!(r.min(), Vec2::new(8.0, 17.0));
        assert_eq!(r.max(), Vec2::new(12.0, 23.0));
    }

    #[test]
    fn overlap_and_touching() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let b = Rect::new(Vec2::new(1.5, 0.0), Vec2::new(1.0, 1.0));
        let c = Rect::new(Vec2::new(2.0, 0.0), Vec2::new(1.0, 1.0));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c)); // exactly touching edges do not overlap
    }

    #[test]
    fn contains_boundary_point() {
        let r = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(1.0, 1.0));
        assert!(r.contains(Vec2::new(6.0, 5.0)));
        assert!(!r.contains(Vec2::new(6.01, 5.0)));
    }
}

// ── Arena ─────────────────────────────────────────────────────────────────────

mod arena {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(Arena::new(0.0, 100.0).is_err());
        assert!(Arena::new(100.0, -1.0).is_err());
        assert!(Arena::new(f32::NAN, 100.0).is_err());
        assert!(Arena::new(800.0, 600.0).is_ok());
    }

    #[test]
    fn clamp_center_keeps_rect_inside() {
        let arena = Arena::new(100.0, 50.0).unwrap();
        let half = Vec2::new(5.0, 5.0);
        let c = arena.clamp_center(Vec2::new(-10.0, 60.0), half);
        assert_eq!(c, Vec2::new(5.0, 45.0));
    }

    #[test]
    fn edge_distance_at_center_and_edge() {
        let arena = Arena::new(100.0, 60.0).unwrap();
        assert_eq!(arena.edge_distance(arena.center()), 30.0);
        assert_eq!(arena.edge_distance(Vec2::new(0.0, 30.0)), 0.0);
    }
}

// ── SessionClock ──────────────────────────────────────────────────────────────

mod clock {
    use super::*;

    #[test]
    fn clamps_large_and_negative_deltas() {
        let mut clock = SessionClock::new(0.1);
        assert!((clock.advance(5.0) - 0.1).abs() < 1e-6);
        assert_eq!(clock.advance(-1.0), 0.0);
        assert!((clock.elapsed_secs() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn accumulates_and_resets() {
        let mut clock = SessionClock::new(1.0);
        for _ in 0..10 {
            clock.advance(0.5);
        }
        assert!((clock.elapsed_secs() - 5.0).abs() < 1e-5);
        clock.reset();
        assert_eq!(clock.elapsed_secs(), 0.0);
    }

    #[test]
    fn config_default_makes_clock() {
        let clock = SessionConfig::default().make_clock();
        assert_eq!(clock.elapsed_secs(), 0.0);
    }
}

// ── RNG ───────────────────────────────────────────────────────────────────────

mod rng {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = EvaderRng::new(42, EvaderId(7));
        let mut b = EvaderRng::new(42, EvaderId(7));
        for _ in 0..16 {
            assert_eq!(a.gen_range(0u32..1000), b.gen_range(0u32..1000));
        }
    }

    #[test]
    fn different_ids_diverge() {
        let mut a = EvaderRng::new(42, EvaderId(0));
        let mut b = EvaderRng::new(42, EvaderId(1));
        let sa: Vec<u32> = (0..8).map(|_| a.gen_range(0..1_000_000)).collect();
        let sb: Vec<u32> = (0..8).map(|_| b.gen_range(0..1_000_000)).collect();
        assert_ne!(sa, sb);
    }

    #[test]
    fn gen_angle_in_range() {
        let mut rng = EvaderRng::new(1, EvaderId(2));
        for _ in 0..100 {
            let a = rng.gen_angle();
            assert!((0.0..std::f32::consts::TAU).contains(&a));
        }
    }
}
