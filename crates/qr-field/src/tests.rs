//! Unit tests for qr-field.

use qr_core::{Arena, EvaderId, Vec2};

use crate::{HeatField, HeatTuning, SectorAllocator, SectorTuning};

fn arena() -> Arena {
    Arena::new(480.0, 480.0).unwrap()
}

// ── HeatField ─────────────────────────────────────────────────────────────────

mod heat {
    use super::*;

    #[test]
    fn untouched_field_samples_zero() {
        let field = HeatField::new(&arena(), HeatTuning::default()).unwrap();
        assert_eq!(field.sample(Vec2::new(10.0, 10.0)), 0.0);
        assert_eq!(field.total(), 0.0);
    }

    #[test]
    fn rejects_bad_tuning() {
        let bad_cell = HeatTuning { cell_size: 0.0, ..HeatTuning::default() };
        assert!(HeatField::new(&arena(), bad_cell).is_err());
        let bad_decay = HeatTuning { decay_per_sec: 1.0, ..HeatTuning::default() };
        assert!(HeatField::new(&arena(), bad_decay).is_err());
    }

    #[test]
    fn deposit_lands_in_pursuer_cell_only() {
        let mut field = HeatField::new(&arena(), HeatTuning::default()).unwrap();
        let pos = Vec2::new(100.0, 100.0);
        field.tick(1.0 / 60.0, pos);
        assert!(field.sample(pos) > 0.0);
        // A far cell stays cold.
        assert_eq!(field.sample(Vec2::new(400.0, 400.0)), 0.0);
    }

    #[test]
    fn decay_shrinks_toward_zero_but_never_negative() {
        let mut field = HeatField::new(&arena(), HeatTuning::default()).unwrap();
        let hot = Vec2::new(50.0, 50.0);
        field.tick(0.1, hot);
        let before = field.sample(hot);

        // Park the pursuer elsewhere so the hot cell only decays.
        let mut value = before;
        for _ in 0..100 {
            field.tick(0.1, Vec2::new(400.0, 400.0));
            let now = field.sample(hot);
            assert!(now >= 0.0);
            assert!(now <= value);
            value = now;
        }
        assert!(value < before * 0.01);
    }

    #[test]
    fn decay_rate_matches_per_second_contract() {
        let tuning = HeatTuning::default();
        let decay = tuning.decay_per_sec;
        let mut field = HeatField::new(&arena(), tuning).unwrap();
        let hot = Vec2::new(50.0, 50.0);
        field.tick(0.1, hot);
        let before = field.sample(hot);
        // One second of decay in ten 0.1 s steps, pursuer far away.
        for _ in 0..10 {
            field.tick(0.1, Vec2::new(400.0, 400.0));
        }
        let expected = before * decay;
        assert!((field.sample(hot) - expected).abs() < expected * 0.01);
    }

    #[test]
    fn sample_clamps_outside_points() {
        let mut field = HeatField::new(&arena(), HeatTuning::default()).unwrap();
        field.tick(0.1, Vec2::new(1.0, 1.0));
        // A point far off the top-left clamps into the corner cell.
        assert_eq!(field.sample(Vec2::new(-100.0, -100.0)), field.sample(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn rebuild_on_resize_resets_cells() {
        let mut field = HeatField::new(&arena(), HeatTuning::default()).unwrap();
        field.tick(0.1, Vec2::new(10.0, 10.0));
        assert!(field.total() > 0.0);

        let bigger = Arena::new(960.0, 480.0).unwrap();
        field.rebuild_if_resized(&bigger);
        assert_eq!(field.total(), 0.0);
        let (cols, _) = field.dims();
        assert_eq!(cols, (960.0_f32 / 48.0).ceil() as usize);

        // Same dimensions: no reset.
        field.tick(0.1, Vec2::new(10.0, 10.0));
        field.rebuild_if_resized(&bigger);
        assert!(field.total() > 0.0);
    }
}

// ── SectorAllocator ───────────────────────────────────────────────────────────

mod sector {
    use super::*;

    fn ids(n: u32) -> Vec<EvaderId> {
        (0..n).map(EvaderId).collect()
    }

    #[test]
    fn assign_once_is_idempotent() {
        let mut alloc = SectorAllocator::new(SectorTuning::default());
        alloc.assign_once(&ids(4));
        assert!(alloc.is_assigned());
        let first = alloc.sector_of(EvaderId(2)).unwrap();

        // A second call with a different list must not reshuffle anything.
        alloc.assign_once(&ids(8));
        assert_eq!(alloc.sector_of(EvaderId(2)).unwrap(), first);
        assert!(alloc.sector_of(EvaderId(6)).is_none());
    }

    #[test]
    fn empty_list_does_not_consume_the_assignment() {
        let mut alloc = SectorAllocator::new(SectorTuning::default());
        alloc.assign_once(&[]);
        assert!(!alloc.is_assigned());
        alloc.assign_once(&ids(2));
        assert!(alloc.is_assigned());
    }

    #[test]
    fn ring_points_sit_on_the_ring() {
        let tuning = SectorTuning::default();
        let ratio = tuning.ring_ratio;
        let mut alloc = SectorAllocator::new(tuning);
        let a = arena();
        alloc.assign_once(&ids(4));

        let expected_r = a.min_extent() * ratio;
        for id in ids(4) {
            let p = alloc.point_for(id, 0.0, &a).unwrap();
            let r = p.distance(a.center());
            assert!((r - expected_r).abs() < 1e-3);
        }
    }

    #[test]
    fn four_sectors_are_evenly_spread() {
        let mut alloc = SectorAllocator::new(SectorTuning::default());
        let a = arena();
        alloc.assign_once(&ids(4));
        let p0 = alloc.point_for(EvaderId(0), 0.0, &a).unwrap();
        let p2 = alloc.point_for(EvaderId(2), 0.0, &a).unwrap();
        // Opposite sectors are diametrically opposed through the center.
        let mid = (p0 + p2) * 0.5;
        assert!(mid.distance(a.center()) < 1e-3);
    }

    #[test]
    fn ring_rotates_with_session_time() {
        let tuning = SectorTuning::default();
        let speed = tuning.rotation_speed;
        let mut alloc = SectorAllocator::new(tuning);
        let a = arena();
        alloc.assign_once(&ids(1));

        let p0 = alloc.point_for(EvaderId(0), 0.0, &a).unwrap();
        let p1 = alloc.point_for(EvaderId(0), 1.0, &a).unwrap();
        let r = a.min_extent() * 0.32;
        // Chord length for a rotation of `speed` radians.
        let expected_chord = 2.0 * r * (speed * 0.5).sin();
        assert!((p0.distance(p1) - expected_chord).abs() < 1e-2);
    }

    #[test]
    fn unassigned_agents_have_no_home() {
        let mut alloc = SectorAllocator::new(SectorTuning::default());
        let a = arena();
        alloc.assign_once(&ids(2));
        assert!(alloc.point_for(EvaderId(99), 0.0, &a).is_none());
    }

    #[test]
    fn reset_allows_reassignment() {
        let mut alloc = SectorAllocator::new(SectorTuning::default());
        alloc.assign_once(&ids(3));
        alloc.reset();
        assert!(!alloc.is_assigned());
        assert!(alloc.sector_of(EvaderId(0)).is_none());
        alloc.assign_once(&ids(5));
        assert!(alloc.sector_of(EvaderId(4)).is_some());
    }
}
