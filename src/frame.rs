use crate::constants::NOMINAL_FRAME_SEC;
use crate::dom::Glyph;
use crate::render::CanvasSurface;
use instant::Instant;
use spider_core::SpiderState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<SpiderState>>,
    /// `None` when the canvas refused a 2D context; frames still step.
    pub surface: Option<CanvasSurface>,
    pub glyph: Option<Glyph>,
    pub last_instant: Option<Instant>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = match self.last_instant {
            Some(prev) => (now - prev).as_secs_f32(),
            None => NOMINAL_FRAME_SEC,
        };
        self.last_instant = Some(now);

        let mut state = self.state.borrow_mut();
        state.advance(dt_sec);
        if let Some(surface) = &mut self.surface {
            state.render(surface);
        }
        if let Some(glyph) = &self.glyph {
            glyph.place(state.glyph_position());
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running `requestAnimationFrame` loop. Keeps the id of the pending frame
/// so [`FrameLoop::cancel`] (or drop) stops it for good.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl FrameLoop {
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure -> tick reference cycle and drops the context.
        self.tick.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &Tick, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: FrameContext) -> FrameLoop {
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Tick = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    let mut frame_ctx = frame_ctx;
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        frame_ctx.frame();
        request_frame(&tick_clone, &pending_tick);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &pending);
    FrameLoop { pending, tick }
}
