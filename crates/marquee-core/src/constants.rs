// Default tuning for the marquee. `MarqueeConfig::default()` is built from these.

// Scroll model
pub const SCROLL_EASE: f32 = 0.1; // fraction of the remaining distance covered per tick
pub const IDLE_VELOCITY: f32 = 0.5; // px added to the target per tick while autoplaying

// Gestures
pub const DRAG_FACTOR: f32 = 2.0; // px of scroll per px of pointer travel
pub const WHEEL_FACTOR: f32 = 0.5; // px of scroll per normalized wheel px

// Wheel delta normalization (DOM_DELTA_LINE / DOM_DELTA_PAGE)
pub const WHEEL_LINE_HEIGHT: f32 = 40.0;
pub const WHEEL_PAGE_HEIGHT: f32 = 800.0;

// Distortion field
pub const DISTORTION_RANGE: f32 = 200.0; // px from item center where distortion fades to 0
pub const DISTORTION_MAX: f32 = 18.0; // clip-path skew (percent) at the item center
pub const DISTORTION_EASE: f32 = 0.1;

// Preview sync
pub const PREVIEW_THRESHOLD: f32 = 10.0; // rendered left edge (px) below which an item becomes focal
pub const PREVIEW_INSET: f32 = 60.0; // px of preview container height not used by the index readout
pub const PREVIEW_LABEL_DIGITS: usize = 3;
