use crate::dom;
use driftfield_core::Simulation;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store at window size and queue a field rebuild.
/// The rebuild itself happens at the next frame boundary.
pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    sim: Rc<RefCell<Simulation>>,
) {
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else {
            return;
        };
        let (width, height) = dom::viewport_size(&w);
        dom::set_canvas_size(&canvas_resize, width, height);
        sim.borrow_mut().request_resize(width, height);
        log::debug!("[resize] {}x{}", width, height);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
