// Inline style values written by the view layer.

pub const TRANSFORM: &str = "transform";

// Clip-path corner variables consumed by the item stylesheet
pub const TOP_LEFT_Y: &str = "--top-left-y";
pub const TOP_RIGHT_Y: &str = "--top-right-y";
pub const BOTTOM_RIGHT_Y: &str = "--bottom-right-y";
pub const BOTTOM_LEFT_Y: &str = "--bottom-left-y";

#[inline]
pub fn translate3d(x: f32) -> String {
    format!("translate3d({}px, 0, 0)", x.floor())
}

#[inline]
pub fn translate_y(y: f32) -> String {
    format!("translateY({}px)", y)
}

#[inline]
pub fn percent(value: f32) -> String {
    format!("{}%", value)
}

/// The four clip-path corner properties for a skew of `top` / `bottom` percent.
pub fn skew_properties(top: f32, bottom: f32) -> [(&'static str, String); 4] {
    let top = percent(top);
    let bottom = percent(bottom);
    [
        (TOP_LEFT_Y, top.clone()),
        (TOP_RIGHT_Y, top),
        (BOTTOM_RIGHT_Y, bottom.clone()),
        (BOTTOM_LEFT_Y, bottom),
    ]
}
