/// Linear interpolation: moves `current` towards `target` by `ease` of the gap.
#[inline]
pub fn lerp(current: f32, target: f32, ease: f32) -> f32 {
    current + (target - current) * ease
}

#[inline]
pub fn clamp(min: f32, max: f32, value: f32) -> f32 {
    value.max(min).min(max)
}

/// Maps `value` from `[in_min, in_max]` onto `[out_min, out_max]` without clamping.
#[inline]
pub fn map_range(in_min: f32, in_max: f32, out_min: f32, out_max: f32, value: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + (value - in_min) / span * (out_max - out_min)
}
