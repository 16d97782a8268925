// Host-side tests for the inline style helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use style::*;

#[test]
fn translate_is_floored_to_whole_pixels() {
    assert_eq!(translate3d(12.7), "translate3d(12px, 0, 0)");
    assert_eq!(translate3d(-0.3), "translate3d(-1px, 0, 0)");
    assert_eq!(translate3d(0.0), "translate3d(0px, 0, 0)");
}

#[test]
fn translate_y_keeps_fraction() {
    assert_eq!(translate_y(74.0), "translateY(74px)");
    assert_eq!(translate_y(37.5), "translateY(37.5px)");
}

#[test]
fn skew_sets_all_four_corners() {
    let props = skew_properties(18.0, 82.0);
    assert_eq!(
        props,
        [
            (TOP_LEFT_Y, "18%".to_string()),
            (TOP_RIGHT_Y, "18%".to_string()),
            (BOTTOM_RIGHT_Y, "82%".to_string()),
            (BOTTOM_LEFT_Y, "82%".to_string()),
        ]
    );
}

#[test]
fn resting_skew_is_a_full_rectangle() {
    let props = skew_properties(0.0, 100.0);
    assert_eq!(props[0].1, "0%");
    assert_eq!(props[2].1, "100%");
}
