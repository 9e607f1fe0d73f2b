//! Integration tests for plate drift: collisions, wrap, ordering, cancellation

use plate_drift::core::config::{AxisBox, IntRange, MotionConfig};
use plate_drift::geometry::{self, polygon_from_ring};
use plate_drift::simulation::{NoopObserver, RunOutcome};
use plate_drift::{Plate, PlateFactory, PlateId, SimulationEngine, TickReport, WorldState};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::ops::ControlFlow;

fn square_plate(id: u32, x: f64, y: f64, size: f64) -> Plate {
    Plate::new(
        PlateId(id),
        PlateId(id).default_name(),
        polygon_from_ring(&[[x, y], [x + size, y], [x + size, y + size], [x, y + size]]),
        [0, 0, 0],
    )
}

fn fixed_engine(step: i32) -> SimulationEngine {
    SimulationEngine::new(
        MotionConfig {
            step_range: IntRange::new(step, step),
        },
        AxisBox::GLOBE,
    )
    .unwrap()
}

fn min_corner(world: &WorldState, id: u32) -> (f64, f64) {
    let b = geometry::bounds(world.get(PlateId(id)).unwrap().polygon()).unwrap();
    (b.min_x, b.min_y)
}

#[test]
fn test_generate_then_run_keeps_plates_valid() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let mut world = PlateFactory::default().generate(3, &mut rng).unwrap();
    let names_before: Vec<String> = world.iter().map(|p| p.name.clone()).collect();

    let mut ticks_seen = 0;
    let mut observer = |_: &TickReport, w: &WorldState| {
        ticks_seen += 1;
        assert_eq!(w.len(), 3);
        ControlFlow::Continue(())
    };
    let summary = SimulationEngine::default().run(&mut world, 10, &mut rng, &mut observer);

    assert_eq!(summary.ticks_completed, 10);
    assert_eq!(ticks_seen, 10);
    assert_eq!(world.len(), 3);
    let names_after: Vec<String> = world.iter().map(|p| p.name.clone()).collect();
    assert_eq!(names_before, names_after);
    for plate in world.iter() {
        assert!(plate.is_valid(), "{} lost validity", plate.name);
    }
}

#[test]
fn test_long_run_stays_valid_and_near_domain() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut world = PlateFactory::default().generate(6, &mut rng).unwrap();
    SimulationEngine::default().run(&mut world, 500, &mut rng, &mut NoopObserver);

    for plate in world.iter() {
        assert!(plate.is_valid());
        let b = geometry::bounds(plate.polygon()).unwrap();
        // After wrapping, no plate can sit entirely past an edge by more than one step
        assert!(b.min_x <= 180.0 + 4.0 && b.max_x >= -180.0 - 4.0, "{} at {:?}", plate.name, b);
        assert!(b.min_y <= 90.0 + 4.0 && b.max_y >= -90.0 - 4.0, "{} at {:?}", plate.name, b);
    }
}

#[test]
fn test_wrap_moves_min_x_200_to_minus_160() {
    let mut world = WorldState::from_plates(vec![square_plate(1, 196.0, 0.0, 10.0)]).unwrap();
    let report = fixed_engine(4).tick(&mut world, &mut ChaCha8Rng::seed_from_u64(1));

    assert_eq!(min_corner(&world, 1), (-160.0, 4.0));
    assert_eq!(report.get(PlateId(1)).unwrap().wrap.dx, -360.0);
}

#[test]
fn test_wrap_on_latitude_uses_full_height() {
    let mut world = WorldState::from_plates(vec![square_plate(1, 0.0, -104.0, 10.0)]).unwrap();
    fixed_engine(-4).tick(&mut world, &mut ChaCha8Rng::seed_from_u64(1));

    // max_y = -98 after the move, past -90, so the plate jumps up by 180
    assert_eq!(min_corner(&world, 1), (-4.0, -108.0 + 180.0));
}

#[test]
fn test_overlapping_plates_both_reverse() {
    // Two large plates overlapping by most of their area: any move of
    // either one within +-4 still intersects the other.
    for seed in 0..20 {
        let mut world = WorldState::from_plates(vec![
            square_plate(1, 0.0, 0.0, 40.0),
            square_plate(2, 10.0, 10.0, 40.0),
        ])
        .unwrap();
        let report = SimulationEngine::default().tick(&mut world, &mut ChaCha8Rng::seed_from_u64(seed));

        for id in [1, 2] {
            let m = report.get(PlateId(id)).unwrap();
            assert_eq!(m.applied, m.drawn.negated(), "seed {} plate {}", seed, id);
            assert!(m.collided_with.is_some());
        }
    }
}

#[test]
fn test_first_collision_wins() {
    // Plate 1 would hit both 2 and 3; only the first in world order is reported
    let mut world = WorldState::from_plates(vec![
        square_plate(1, 0.0, 0.0, 10.0),
        square_plate(3, 0.0, 12.0, 10.0),
        square_plate(2, 12.0, 0.0, 10.0),
    ])
    .unwrap();
    let report = fixed_engine(3).tick(&mut world, &mut ChaCha8Rng::seed_from_u64(1));

    assert_eq!(report.get(PlateId(1)).unwrap().collided_with, Some(PlateId(3)));
    assert_eq!(min_corner(&world, 1), (-3.0, -3.0));
}

#[test]
fn test_order_dependency_is_pinned() {
    // Plate 2 sits two units right of plate 1 and both move (+3, +3).
    let world = WorldState::from_plates(vec![
        square_plate(1, 0.0, 0.0, 10.0),
        square_plate(2, 12.0, 0.0, 10.0),
    ])
    .unwrap();

    // Canonical order: plate 1 moves first, sees plate 2 still in place and backs off.
    let mut canonical = world.clone();
    let report = fixed_engine(3).tick(&mut canonical, &mut ChaCha8Rng::seed_from_u64(1));
    assert_eq!(report.collision_count(), 1);
    assert_eq!(min_corner(&canonical, 1), (-3.0, -3.0));
    assert_eq!(min_corner(&canonical, 2), (15.0, 3.0));

    // Reversed order: plate 2 moves away first, so plate 1 is free to follow.
    let mut reversed = world.reversed();
    let report = fixed_engine(3).tick(&mut reversed, &mut ChaCha8Rng::seed_from_u64(1));
    assert_eq!(report.collision_count(), 0);
    assert_eq!(min_corner(&reversed, 1), (3.0, 3.0));
    assert_eq!(min_corner(&reversed, 2), (15.0, 3.0));
}

#[test]
fn test_reversed_order_is_reproducible() {
    let base = PlateFactory::default()
        .generate(5, &mut ChaCha8Rng::seed_from_u64(12))
        .unwrap()
        .reversed();

    let mut a = base.clone();
    let mut b = base.clone();
    SimulationEngine::default().run(&mut a, 50, &mut ChaCha8Rng::seed_from_u64(3), &mut NoopObserver);
    SimulationEngine::default().run(&mut b, 50, &mut ChaCha8Rng::seed_from_u64(3), &mut NoopObserver);
    assert_eq!(a, b);
}

#[test]
fn test_same_seed_same_trajectory() {
    let world = PlateFactory::default()
        .generate(4, &mut ChaCha8Rng::seed_from_u64(8))
        .unwrap();

    let mut reports_a = Vec::new();
    let mut a = world.clone();
    SimulationEngine::default().run(&mut a, 20, &mut ChaCha8Rng::seed_from_u64(9), &mut |r: &TickReport, _: &WorldState| {
        reports_a.push(r.clone());
        ControlFlow::Continue(())
    });

    let mut reports_b = Vec::new();
    let mut b = world.clone();
    SimulationEngine::default().run(&mut b, 20, &mut ChaCha8Rng::seed_from_u64(9), &mut |r: &TickReport, _: &WorldState| {
        reports_b.push(r.clone());
        ControlFlow::Continue(())
    });

    assert_eq!(a, b);
    assert_eq!(reports_a, reports_b);
}

#[test]
fn test_cancellation_leaves_completed_tick_state() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let start = PlateFactory::default().generate(4, &mut rng).unwrap();

    // Reference: exactly five ticks, uninterrupted
    let mut expected = start.clone();
    SimulationEngine::default().run(&mut expected, 5, &mut ChaCha8Rng::seed_from_u64(22), &mut NoopObserver);

    let mut world = start.clone();
    let mut engine = SimulationEngine::default();
    let stop = engine.stop_signal();
    let mut observer = |report: &TickReport, _: &WorldState| {
        if report.tick == 5 {
            stop.raise();
        }
        ControlFlow::Continue(())
    };
    let summary = engine.run(&mut world, 100, &mut ChaCha8Rng::seed_from_u64(22), &mut observer);

    assert_eq!(summary.outcome, RunOutcome::Cancelled);
    assert_eq!(summary.ticks_completed, 5);
    assert_eq!(world, expected);
}

#[test]
fn test_signal_raised_before_run_does_nothing() {
    let mut world = WorldState::from_plates(vec![square_plate(1, 0.0, 0.0, 5.0)]).unwrap();
    let before = world.clone();
    let mut engine = SimulationEngine::default();
    engine.stop_signal().raise();

    let summary = engine.run(&mut world, 10, &mut ChaCha8Rng::seed_from_u64(1), &mut NoopObserver);

    assert_eq!(summary.ticks_completed, 0);
    assert_eq!(summary.outcome, RunOutcome::Cancelled);
    assert_eq!(world, before);
}

proptest! {
    #[test]
    fn prop_inside_plates_never_wrap(x in -180i32..=170, y in -90i32..=80, size in 1i32..=10) {
        let (x, y, size) = (x as f64, y as f64, size as f64);
        let size = size.min(180.0 - x).min(90.0 - y);
        let poly = square_plate(1, x, y, size).polygon().clone();
        let (wrapped, shift) = plate_drift::simulation::wrap_polygon(&poly, &AxisBox::GLOBE);
        prop_assert!(shift.is_none());
        prop_assert_eq!(wrapped, poly);
    }

    #[test]
    fn prop_east_exit_lands_inside(min_x in 181i32..=540, y in -80i32..=80) {
        let poly = square_plate(1, min_x as f64, y as f64, 5.0).polygon().clone();
        let (wrapped, shift) = plate_drift::simulation::wrap_polygon(&poly, &AxisBox::GLOBE);
        prop_assert_eq!(shift.dx, -360.0);
        let b = geometry::bounds(&wrapped).unwrap();
        prop_assert_eq!(b.min_x, min_x as f64 - 360.0);
        prop_assert!(b.min_x > -180.0);
    }

    #[test]
    fn prop_translate_round_trips(
        x in -500i32..500, y in -500i32..500,
        dx in -1000i32..1000, dy in -1000i32..1000,
    ) {
        let poly = square_plate(1, x as f64, y as f64, 7.0).polygon().clone();
        let moved = geometry::translate(&poly, dx as f64, dy as f64);
        let back = geometry::translate(&moved, -dx as f64, -dy as f64);
        prop_assert_eq!(back, poly);
        prop_assert!(geometry::is_valid(&moved));
    }
}
