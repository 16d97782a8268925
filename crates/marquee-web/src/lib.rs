#![cfg(target_arch = "wasm32")]
use marquee_core::Marquee;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod elements;
mod events;
mod frame;
mod input;
mod listener;
mod loop_slot;
mod settings;
mod style;
mod view;

use elements::GalleryElements;
use listener::Listener;

/// A mounted gallery: core state, DOM handles and the listeners that feed it.
struct App {
    wiring: events::Wiring,
    running: Rc<Cell<bool>>,
    input_listeners: Vec<Listener>,
    hover_listeners: Vec<Listener>,
}

impl App {
    fn enable(&mut self) {
        self.wiring.marquee.borrow_mut().enable();
        if self.hover_listeners.is_empty() {
            self.hover_listeners = events::wire_hover(&self.wiring);
        }
    }

    // Hover listeners stay attached so the flag is still correct on re-enable.
    fn disable(&mut self) {
        let (reset, inset) = {
            let mut m = self.wiring.marquee.borrow_mut();
            (m.disable(), m.config.preview_inset)
        };
        view::apply_frame(&self.wiring.elements, &reset, inset);
    }

    fn teardown(&mut self) {
        self.running.set(false);
        self.hover_listeners.clear();
        self.input_listeners.clear();
        log::info!("[marquee] torn down");
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn with_app(f: impl FnOnce(&mut App)) {
    APP.with(|slot| match slot.borrow_mut().as_mut() {
        Some(app) => f(app),
        None => log::warn!("[marquee] not mounted"),
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("marquee-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let elements = GalleryElements::query(&document)?;

    // Measure after the first layout pass
    dom::next_animation_frame().await?;

    let config = elements.read_config();
    let (geometry, total_width) = elements.measure();
    let marquee = Marquee::new(config, &geometry, total_width)?;
    log::info!(
        "[marquee] mounted: {} items, strip width {:.0}px",
        marquee.len(),
        total_width
    );

    let wiring = events::Wiring {
        marquee: Rc::new(RefCell::new(marquee)),
        elements: Rc::new(elements),
    };
    let running = Rc::new(Cell::new(true));
    let mut app = App {
        input_listeners: events::wire_input_handlers(&wiring)?,
        hover_listeners: Vec::new(),
        running: running.clone(),
        wiring: wiring.clone(),
    };
    app.enable();

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        marquee: wiring.marquee.clone(),
        elements: wiring.elements.clone(),
        running,
    }));
    frame::start_loop(frame_ctx);

    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

/// Resumes scrolling and hover tracking.
#[wasm_bindgen]
pub fn marquee_enable() {
    with_app(App::enable);
}

/// Freezes the strip at its layout position; scroll state is kept.
#[wasm_bindgen]
pub fn marquee_disable() {
    with_app(App::disable);
}

#[wasm_bindgen]
pub fn marquee_resize() {
    with_app(|app| {
        if let Err(e) = events::resize(&app.wiring) {
            log::error!("[resize] {}", e);
        }
    });
}

/// Stops the frame loop and removes every listener, including the document wheel listener.
#[wasm_bindgen]
pub fn marquee_destroy() {
    with_app(App::teardown);
    APP.with(|slot| slot.borrow_mut().take());
}
