// Shared fixtures for host-side marquee tests.
#![allow(dead_code)]

use marquee_core::{ItemGeometry, Marquee, MarqueeConfig};

pub const ITEM_WIDTH: f32 = 100.0;
pub const ITEM_COUNT: usize = 5;
pub const STRIP_WIDTH: f32 = ITEM_WIDTH * ITEM_COUNT as f32;
// Strip width in the scroll model's units.
pub const STRIP_SPAN: f64 = STRIP_WIDTH as f64;

pub fn strip_geometry(count: usize, width: f32) -> Vec<ItemGeometry> {
    (0..count)
        .map(|i| ItemGeometry {
            left: i as f32 * width,
            width,
        })
        .collect()
}

pub fn strip_with(config: MarqueeConfig) -> Marquee {
    let mut m = Marquee::new(
        config,
        &strip_geometry(ITEM_COUNT, ITEM_WIDTH),
        STRIP_WIDTH,
    )
    .expect("valid strip");
    m.enable();
    m
}

pub fn strip() -> Marquee {
    strip_with(MarqueeConfig::default())
}

pub fn still_strip() -> Marquee {
    strip_with(MarqueeConfig {
        velocity: 0.0,
        ..Default::default()
    })
}
