use driftfield_core::Simulation;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed mouse and touch input into the simulation's pointer tracker. All
/// listeners sit on `window`; coordinates are client (CSS) pixels, which match
/// the full-window canvas.
pub fn wire_pointer_handlers(window: &web::Window, sim: Rc<RefCell<Simulation>>) {
    wire_mousemove(window, sim.clone());
    wire_touchmove(window, sim.clone());
    wire_release(window, "mouseleave", sim.clone());
    wire_release(window, "touchend", sim);
}

fn wire_mousemove(window: &web::Window, sim: Rc<RefCell<Simulation>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        sim.borrow_mut()
            .pointer_mut()
            .set_target(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchmove(window: &web::Window, sim: Rc<RefCell<Simulation>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // First touch only; extra fingers are ignored.
        if let Some(touch) = ev.touches().get(0) {
            sim.borrow_mut()
                .pointer_mut()
                .set_target(touch.client_x() as f32, touch.client_y() as f32);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_release(window: &web::Window, event: &str, sim: Rc<RefCell<Simulation>>) {
    let closure = Closure::wrap(Box::new(move || {
        sim.borrow_mut().pointer_mut().clear_target();
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
