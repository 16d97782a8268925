use marquee_core::DeltaMode;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer x in client px for mouse and touch events (first touch point).
///
/// Touch events are recognised by type name so browsers without a
/// `TouchEvent` constructor never hit an `instanceof` check.
#[inline]
pub fn client_x(ev: &web::Event) -> Option<f32> {
    if ev.type_().starts_with("touch") {
        let touch_ev: &web::TouchEvent = ev.unchecked_ref();
        return touch_ev.touches().get(0).map(|t| t.client_x() as f32);
    }
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| m.client_x() as f32)
}

#[inline]
pub fn wheel_delta(ev: &web::Event) -> Option<(f32, DeltaMode)> {
    ev.dyn_ref::<web::WheelEvent>()
        .map(|w| (w.delta_y() as f32, DeltaMode::from_dom(w.delta_mode())))
}
