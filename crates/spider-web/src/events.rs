use crate::dom;
use crate::input;
use spider_core::{PointerState, SurfaceSize};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the shared pointer cell at the latest position. The frame loop reads
/// it once per tick, so no throttling happens here.
pub fn wire_pointer_move(canvas: web::HtmlCanvasElement, pointer: Rc<RefCell<PointerState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas);
        if pos.is_finite() {
            pointer.borrow_mut().set_position(pos.x, pos.y);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Resize the backing store right away but only queue the new size for the
/// field; the frame loop applies it at the next frame boundary.
pub fn wire_canvas_resize(
    canvas: web::HtmlCanvasElement,
    pending_resize: Rc<RefCell<Option<SurfaceSize>>>,
) {
    let closure = Closure::wrap(Box::new(move || {
        let size = dom::sync_canvas_backing_size(&canvas);
        log::info!("[resize] canvas now {}x{}", size.width, size.height);
        *pending_resize.borrow_mut() = Some(size);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
