use crate::canvas::CanvasSurface;
use crate::constants::FPS_LOG_INTERVAL_SEC;
use instant::Instant;
use spider_core::{ParticleField, PointerState, SurfaceSize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: ParticleField,
    pub surface: CanvasSurface,
    pub pointer: Rc<RefCell<PointerState>>,
    pub pending_resize: Rc<RefCell<Option<SurfaceSize>>>,

    pub window_start: Instant,
    pub frames_in_window: u32,
}

impl FrameContext {
    pub fn new(
        field: ParticleField,
        surface: CanvasSurface,
        pointer: Rc<RefCell<PointerState>>,
        pending_resize: Rc<RefCell<Option<SurfaceSize>>>,
    ) -> Self {
        Self {
            field,
            surface,
            pointer,
            pending_resize,
            window_start: Instant::now(),
            frames_in_window: 0,
        }
    }

    pub fn frame(&mut self) {
        if let Some(size) = self.pending_resize.borrow_mut().take() {
            self.field.resize(size.width, size.height);
            log::info!("[frame] respawned {} particles", self.field.len());
        }

        let pointer = *self.pointer.borrow();
        self.field.frame(&pointer, &mut self.surface);

        self.frames_in_window += 1;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed >= FPS_LOG_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps, {} particles",
                self.frames_in_window as f32 / elapsed,
                self.field.len()
            );
            self.window_start = Instant::now();
            self.frames_in_window = 0;
        }
    }
}

/// Handle to a running frame loop. Stopping it cancels the pending frame
/// request and keeps the loop from re-arming.
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    request_id: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.request_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("[frame] loop stopped");
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    w.request_animation_frame(callback.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let handle = LoopHandle {
        running: Rc::new(Cell::new(true)),
        request_id: Rc::new(Cell::new(None)),
    };
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_tick.request_id.set(None);
        if !handle_tick.is_running() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            handle_tick.request_id.set(request_frame(cb));
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        handle.request_id.set(request_frame(cb));
    }
    handle
}
