#![cfg(target_arch = "wasm32")]
use spider_core::{ParticleField, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;

thread_local! {
    static DEFAULT_LOOP: RefCell<Option<frame::LoopHandle>> = const { RefCell::new(None) };
}

/// JS-visible handle for an animation mounted with [`mount`].
#[wasm_bindgen]
pub struct AnimationHandle {
    inner: frame::LoopHandle,
}

#[wasm_bindgen]
impl AnimationHandle {
    pub fn stop(&self) {
        self.inner.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.inner.is_running()
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spider-web starting");

    spawn_local(async move {
        match mount_canvas(constants::CANVAS_ID) {
            Ok(handle) => DEFAULT_LOOP.with(|slot| *slot.borrow_mut() = Some(handle)),
            Err(e) => log::error!("init error: {:?}", e),
        }
    });
    Ok(())
}

/// Mount an extra particle field on the canvas with the given id.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<AnimationHandle, JsValue> {
    mount_canvas(canvas_id)
        .map(|inner| AnimationHandle { inner })
        .map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Stop the animation started automatically on load.
#[wasm_bindgen]
pub fn stop() {
    DEFAULT_LOOP.with(|slot| {
        if let Some(handle) = slot.borrow_mut().take() {
            handle.stop();
        }
    });
}

fn mount_canvas(canvas_id: &str) -> anyhow::Result<frame::LoopHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;

    let config = dom::read_field_config(&canvas);
    let size = dom::sync_canvas_backing_size(&canvas);
    let pointer = Rc::new(RefCell::new(PointerState::centered(
        size,
        config.pointer_radius,
    )));
    let pending_resize = Rc::new(RefCell::new(None));

    let mut field = ParticleField::new(config);
    field.initialize(size.width, size.height);
    log::info!(
        "[init] #{} {}x{} with {} particles",
        canvas_id,
        size.width,
        size.height,
        field.len()
    );

    events::wire_pointer_move(canvas.clone(), pointer.clone());
    events::wire_canvas_resize(canvas, pending_resize.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        field,
        canvas::CanvasSurface::new(ctx),
        pointer,
        pending_resize,
    )));
    Ok(frame::start_loop(frame_ctx))
}
