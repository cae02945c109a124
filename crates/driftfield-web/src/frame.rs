use crate::canvas::CanvasSurface;
use crate::constants::FPS_REPORT_INTERVAL_SEC;
use crate::theme;
use driftfield_core::Simulation;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub surface: CanvasSurface,
    pub window: web::Window,
    pub document: web::Document,

    pub report_since: Instant,
    pub report_frames: u32,
}

impl FrameContext {
    pub fn new(
        sim: Rc<RefCell<Simulation>>,
        surface: CanvasSurface,
        window: web::Window,
        document: web::Document,
    ) -> Self {
        Self {
            sim,
            surface,
            window,
            document,
            report_since: Instant::now(),
            report_frames: 0,
        }
    }

    pub fn frame(&mut self) {
        // Theme is re-read every frame so toggles land on the next paint.
        let theme = theme::current_theme(&self.window, &self.document);
        self.sim.borrow_mut().frame(&mut self.surface, theme);
        self.report();
    }

    fn report(&mut self) {
        self.report_frames += 1;
        let elapsed = self.report_since.elapsed().as_secs_f32();
        if elapsed < FPS_REPORT_INTERVAL_SEC {
            return;
        }
        let sim = self.sim.borrow();
        log::debug!(
            "[frame] {:.1} fps, {} shapes, t={:.2}",
            self.report_frames as f32 / elapsed,
            sim.field().shapes().len(),
            sim.field().time()
        );
        self.report_since = Instant::now();
        self.report_frames = 0;
    }
}

/// Cancels a running frame loop. The loop notices on its next callback and
/// stops requesting frames.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }
}

fn request_frame(tick: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            // Release the self-reference so the closure is freed after return.
            drop(tick_clone.borrow_mut().take());
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
    LoopHandle { running }
}
