// Wrap invariants under randomized input sequences.

mod common;

use common::*;
use marquee_core::DeltaMode;
use rand::prelude::*;

#[test]
fn extra_is_always_a_multiple_of_strip_width() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut m = strip();

    for step in 0..5000 {
        match rng.gen_range(0..10) {
            0 => m.wheel(rng.gen_range(-400.0..400.0), DeltaMode::Pixel),
            1 => m.pointer_down(rng.gen_range(0.0..800.0)),
            2 => m.pointer_move(rng.gen_range(0.0..800.0)),
            3 => m.pointer_up(),
            4 => m.set_hovered(rng.gen_bool(0.5)),
            _ => {}
        }
        let locked = rng.gen_bool(0.1);
        m.tick(locked);

        for (i, item) in m.items.iter().enumerate() {
            let turns = item.extra / STRIP_SPAN;
            assert_eq!(
                turns,
                turns.round(),
                "step {}: item {} extra {} is not a whole number of strips",
                step,
                i,
                item.extra
            );
            assert!(
                !(item.is_before && item.is_after),
                "step {}: item {} flagged on both edges",
                step,
                i
            );
        }
    }
}

#[test]
fn an_item_wraps_at_most_once_per_tick() {
    let mut m = still_strip();
    // Jump far enough that several wraps would be needed to catch up.
    m.scroll.target = 10.0 * STRIP_SPAN;
    m.scroll.ease = 1.0;

    let before: Vec<f64> = m.items.iter().map(|i| i.extra).collect();
    m.tick(false);
    for (item, prev) in m.items.iter().zip(before) {
        assert!((item.extra - prev).abs() <= STRIP_SPAN);
    }
}

#[test]
fn items_catch_up_after_a_large_jump() {
    let mut m = still_strip();
    m.scroll.target = 10.0 * STRIP_SPAN + 50.0;
    m.scroll.ease = 1.0;
    m.tick(false);
    // Keep moving upward by a pixel per tick so wrapping can continue.
    for _ in 0..20 {
        m.scroll.target += 1.0;
        m.tick(false);
    }
    for item in m.items.iter() {
        let edge = item.edge_offset();
        assert!(edge >= 0.0 && edge <= 2.0 * STRIP_SPAN, "edge {}", edge);
    }
}
