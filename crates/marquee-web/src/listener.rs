use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that unsubscribes itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new<F>(target: &web::EventTarget, event: &'static str, handler: F) -> Self
    where
        F: FnMut(web::Event) + 'static,
    {
        Self::attach(target, event, handler, false)
    }

    /// Passive listener: the handler never calls `prevent_default`.
    pub fn passive<F>(target: &web::EventTarget, event: &'static str, handler: F) -> Self
    where
        F: FnMut(web::Event) + 'static,
    {
        Self::attach(target, event, handler, true)
    }

    fn attach<F>(target: &web::EventTarget, event: &'static str, handler: F, passive: bool) -> Self
    where
        F: FnMut(web::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            log::error!("[listener] failed to add {}: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
