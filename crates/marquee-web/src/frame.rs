use crate::elements::GalleryElements;
use crate::loop_slot::LoopSlot;
use crate::view;
use marquee_core::Marquee;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct FrameContext {
    pub marquee: Rc<RefCell<Marquee>>,
    pub elements: Rc<GalleryElements>,
    pub running: Rc<Cell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Autoplay pauses whenever the gallery is not the active view.
        let locked = !self.elements.is_active();
        let (frame, inset) = {
            let mut m = self.marquee.borrow_mut();
            (m.update(locked), m.config.preview_inset)
        };
        if let Some(frame) = frame {
            view::apply_frame(&self.elements, &frame, inset);
        }
    }
}

/// Runs `FrameContext::frame` on every display refresh until `running` is cleared.
///
/// Once stopped, the loop closure is released from a later task so the
/// context it holds (marquee, DOM handles) can be freed.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: LoopSlot<Closure<dyn FnMut()>> = LoopSlot::new();
    let tick_inner = tick.clone();
    let running = frame_ctx.borrow().running.clone();
    tick.fill(Closure::wrap(Box::new(move || {
        if !running.get() {
            log::info!("[frame] loop stopped");
            let slot = tick_inner.clone();
            spawn_local(async move {
                slot.release();
            });
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_inner);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &LoopSlot<Closure<dyn FnMut()>>) {
    let Some(w) = web::window() else {
        return;
    };
    tick.with(|cb| {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    });
}
