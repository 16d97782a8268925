use crate::constants::{WHEEL_LINE_HEIGHT, WHEEL_PAGE_HEIGHT};

/// `WheelEvent.deltaMode` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaMode {
    Pixel,
    Line,
    Page,
}

impl DeltaMode {
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => DeltaMode::Line,
            2 => DeltaMode::Page,
            _ => DeltaMode::Pixel,
        }
    }
}

/// Vertical wheel delta in pixels regardless of the device's reporting unit.
#[inline]
pub fn normalize_wheel(delta_y: f32, mode: DeltaMode) -> f32 {
    match mode {
        DeltaMode::Pixel => delta_y,
        DeltaMode::Line => delta_y * WHEEL_LINE_HEIGHT,
        DeltaMode::Page => delta_y * WHEEL_PAGE_HEIGHT,
    }
}
