use crate::config;
use crate::constants::{AREA_PER_SHAPE_ATTRIBUTE, MIN_SHAPES_ATTRIBUTE};
use driftfield_core::FieldParams;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Inner window size in CSS pixels; zero when the browser reports nothing.
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    (px(window.inner_width()), px(window.inner_height()))
}

#[inline]
pub fn set_canvas_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    canvas.set_width(width);
    canvas.set_height(height);
}

pub fn find_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Field parameters with any density overrides set on the canvas element.
pub fn field_params(canvas: &web::HtmlCanvasElement) -> FieldParams {
    let min_shapes = canvas.get_attribute(MIN_SHAPES_ATTRIBUTE);
    let area = canvas.get_attribute(AREA_PER_SHAPE_ATTRIBUTE);
    config::field_params(min_shapes.as_deref(), area.as_deref())
}
