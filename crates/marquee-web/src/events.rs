use crate::constants::DRAGGING_CLASS;
use crate::elements::GalleryElements;
use crate::input;
use crate::listener::Listener;
use crate::view;
use marquee_core::Marquee;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct Wiring {
    pub marquee: Rc<RefCell<Marquee>>,
    pub elements: Rc<GalleryElements>,
}

/// Drag, wheel, distortion, click and resize listeners. Live until dropped.
pub fn wire_input_handlers(w: &Wiring) -> anyhow::Result<Vec<Listener>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut listeners = Vec::new();
    for event in ["mousedown", "touchstart"] {
        listeners.push(wire_pointerdown(w, event));
    }
    for event in ["mousemove", "touchmove"] {
        listeners.push(wire_pointermove(w, event));
    }
    for event in ["mouseup", "touchend"] {
        listeners.push(wire_pointerup(w, event));
    }
    listeners.push(wire_wheel(w, &document));
    listeners.extend(wire_distortion(w));
    listeners.extend(wire_item_clicks(w));
    listeners.push(wire_resize(w, &window));
    Ok(listeners)
}

/// Hover tracking on the list; attached while the marquee is enabled.
pub fn wire_hover(w: &Wiring) -> Vec<Listener> {
    let enter = {
        let marquee = w.marquee.clone();
        Listener::passive(&w.elements.list, "mouseenter", move |_| {
            marquee.borrow_mut().set_hovered(true);
        })
    };
    let leave = {
        let marquee = w.marquee.clone();
        Listener::passive(&w.elements.list, "mouseleave", move |_| {
            marquee.borrow_mut().set_hovered(false);
        })
    };
    vec![enter, leave]
}

fn wire_pointerdown(w: &Wiring, event: &'static str) -> Listener {
    let w = w.clone();
    let list = w.elements.list.clone();
    Listener::passive(&list, event, move |ev| {
        _ = w.elements.list.class_list().add_1(DRAGGING_CLASS);
        if let Some(x) = input::client_x(&ev) {
            w.marquee.borrow_mut().pointer_down(x);
        }
    })
}

fn wire_pointermove(w: &Wiring, event: &'static str) -> Listener {
    let w = w.clone();
    let list = w.elements.list.clone();
    Listener::passive(&list, event, move |ev| {
        if let Some(x) = input::client_x(&ev) {
            w.marquee.borrow_mut().pointer_move(x);
        }
    })
}

fn wire_pointerup(w: &Wiring, event: &'static str) -> Listener {
    let w = w.clone();
    let list = w.elements.list.clone();
    Listener::passive(&list, event, move |_| {
        _ = w.elements.list.class_list().remove_1(DRAGGING_CLASS);
        w.marquee.borrow_mut().pointer_up();
    })
}

fn wire_wheel(w: &Wiring, document: &web::Document) -> Listener {
    let marquee = w.marquee.clone();
    Listener::passive(document, "wheel", move |ev| {
        if let Some((delta_y, mode)) = input::wheel_delta(&ev) {
            marquee.borrow_mut().wheel(delta_y, mode);
        }
    })
}

fn wire_distortion(w: &Wiring) -> [Listener; 2] {
    let over = {
        let marquee = w.marquee.clone();
        Listener::passive(&w.elements.list, "mousemove", move |ev| {
            if let Some(x) = input::client_x(&ev) {
                marquee.borrow_mut().pointer_over(x);
            }
        })
    };
    let leave = {
        let marquee = w.marquee.clone();
        Listener::passive(&w.elements.list, "mouseleave", move |_| {
            marquee.borrow_mut().pointer_leave();
        })
    };
    [over, leave]
}

fn wire_item_clicks(w: &Wiring) -> Vec<Listener> {
    w.elements
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let w = w.clone();
            Listener::new(item, "click", move |ev| {
                ev.prevent_default();
                let (update, inset) = {
                    let m = w.marquee.borrow();
                    (m.select(i), m.config.preview_inset)
                };
                if let Some(update) = update {
                    log::info!("[click] preview item {}", i);
                    view::apply_preview(&w.elements, &update, inset);
                }
            })
        })
        .collect()
}

fn wire_resize(w: &Wiring, window: &web::Window) -> Listener {
    let w = w.clone();
    Listener::passive(window, "resize", move |_| {
        if let Err(e) = resize(&w) {
            log::error!("[resize] {}", e);
        }
    })
}

/// Clears transforms, re-measures the strip and resets the scroll model.
pub fn resize(w: &Wiring) -> anyhow::Result<()> {
    view::reset_transforms(&w.elements);
    let (geometry, total_width) = w.elements.measure();
    w.marquee.borrow_mut().resize(&geometry, total_width)?;
    Ok(())
}
