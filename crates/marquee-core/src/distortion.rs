use crate::math::{clamp, map_range};

/// Skew target for an item whose center is `distance` px away from the pointer.
///
/// Falls linearly from `max` at distance 0 to 0 at `range` and beyond.
pub fn distortion_target(distance: f32, range: f32, max: f32) -> f32 {
    let value = range - clamp(-range, range, distance.abs());
    map_range(0.0, range, 0.0, max, value)
}

/// Clip-path corner offsets (percent) derived from an item's distortion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClipSkew {
    pub top: f32,
    pub bottom: f32,
}

impl ClipSkew {
    pub fn from_distortion(current: f32) -> Self {
        Self {
            top: current,
            bottom: 100.0 - current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_peaks_at_center() {
        assert_eq!(distortion_target(0.0, 200.0, 18.0), 18.0);
        assert_eq!(distortion_target(100.0, 200.0, 18.0), 9.0);
        assert_eq!(distortion_target(-100.0, 200.0, 18.0), 9.0);
    }

    #[test]
    fn skew_mirrors_bottom_corners() {
        let s = ClipSkew::from_distortion(12.0);
        assert_eq!(s.top, 12.0);
        assert_eq!(s.bottom, 88.0);
    }
}
