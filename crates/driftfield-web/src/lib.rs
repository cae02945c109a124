#![cfg(target_arch = "wasm32")]
use driftfield_core::{Field, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod theme;

thread_local! {
    static LOOP: RefCell<Option<frame::LoopHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("driftfield starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the background animation. The last painted frame stays on screen.
#[wasm_bindgen]
pub fn stop() {
    LOOP.with(|l| {
        if let Some(handle) = l.borrow_mut().take() {
            handle.stop();
            log::info!("[frame] loop stopped");
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, constants::CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;

    let (width, height) = dom::viewport_size(&window);
    dom::set_canvas_size(&canvas, width, height);
    let field = Field::from_entropy(width, height, dom::field_params(&canvas))?;
    log::info!(
        "[field] {} shapes for {}x{}",
        field.shapes().len(),
        width,
        height
    );
    let sim = Rc::new(RefCell::new(Simulation::new(field)));

    events::wire_pointer_handlers(&window, sim.clone());
    events::wire_resize(&window, &canvas, sim.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        sim,
        canvas::CanvasSurface::new(ctx),
        window,
        document,
    )));
    let handle = frame::start_loop(frame_ctx);
    LOOP.with(|l| *l.borrow_mut() = Some(handle));
    Ok(())
}
