use crate::constants::DATA_ATTR_PREFIX;
use anyhow::anyhow;
use spider_core::{FieldConfig, SurfaceSize};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", id, e))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("unexpected context type: {:?}", e))
}

/// Match the canvas backing store to its CSS box and return the new size.
///
/// A canvas with no layout yet (zero-sized box) falls back to the window's
/// inner size so the field still fills the viewport.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    let rect = canvas.get_bounding_client_rect();
    let (mut w, mut h) = (rect.width(), rect.height());
    if w <= 0.0 || h <= 0.0 {
        if let Some(win) = web::window() {
            w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        }
    }
    let w_px = (w as u32).max(1);
    let h_px = (h as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    SurfaceSize::new(w_px as f32, h_px as f32)
}

/// Defaults plus any `data-*` overrides present on the canvas element.
pub fn read_field_config(canvas: &web::HtmlCanvasElement) -> FieldConfig {
    let mut config = FieldConfig::default();
    for key in FieldConfig::OVERRIDE_KEYS {
        let attr = format!("{DATA_ATTR_PREFIX}{key}");
        if let Some(value) = canvas.get_attribute(&attr) {
            match config.apply_override(key, &value) {
                Ok(()) => log::info!("[config] {} = {}", key, value),
                Err(e) => log::warn!("[config] ignoring {}: {}", attr, e),
            }
        }
    }
    config
}
