#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use spider_core::{SpiderConfig, SpiderState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod options;
mod render;
mod timer;

pub use options::SpiderOptions;

/// Everything one mounted effect holds on the page. Fields drop in order:
/// the frame loop stops first, then the orbit timer, then the listeners.
struct Mounted {
    frame_loop: frame::FrameLoop,
    _orbit_timer: timer::IntervalTimer,
    _pointer: dom::EventListener,
    _resize: dom::EventListener,
    state: Rc<RefCell<SpiderState>>,
}

/// Handle to a mounted web effect. Unmounting (or freeing the handle from
/// JS) cancels the animation frame, clears the orbit timer, removes the
/// listeners and the glyph.
#[wasm_bindgen]
pub struct SpiderHandle {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl SpiderHandle {
    pub fn unmount(&mut self) {
        if let Some(m) = self.inner.take() {
            drop(m);
            log::info!("[unmount] web effect torn down");
        }
    }

    #[wasm_bindgen(getter = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.inner
            .as_ref()
            .map(|m| m.frame_loop.is_running())
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter = pointCount)]
    pub fn point_count(&self) -> usize {
        self.inner
            .as_ref()
            .map(|m| m.state.borrow().web().len())
            .unwrap_or(0)
    }
}

thread_local! {
    static DEFAULT_MOUNT: RefCell<Option<SpiderHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spider-web starting");

    let present = dom::window_document()
        .and_then(|d| d.get_element_by_id(constants::DEFAULT_CANVAS_ID))
        .is_some();
    if present {
        match mount_canvas(constants::DEFAULT_CANVAS_ID, SpiderConfig::default()) {
            Ok(handle) => DEFAULT_MOUNT.with(|m| *m.borrow_mut() = Some(handle)),
            Err(e) => log::error!("init error: {:?}", e),
        }
    }
    Ok(())
}

/// Tears down the effect mounted by the start hook, if any.
#[wasm_bindgen(js_name = unmountDefault)]
pub fn unmount_default() {
    if let Some(mut handle) = DEFAULT_MOUNT.with(|m| m.borrow_mut().take()) {
        handle.unmount();
    }
}

#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<SpiderHandle, JsValue> {
    mount_canvas(canvas_id, SpiderConfig::default()).map_err(to_js)
}

#[wasm_bindgen(js_name = mountWithOptions)]
pub fn mount_with_options(
    canvas_id: &str,
    options: SpiderOptions,
) -> Result<SpiderHandle, JsValue> {
    mount_canvas(canvas_id, options.into_config()).map_err(to_js)
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

fn mount_canvas(canvas_id: &str, config: SpiderConfig) -> anyhow::Result<SpiderHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;

    let size = dom::sync_canvas_to_viewport(&canvas);
    dom::paint_canvas_background(&canvas);

    let orbit_period_ms = config.orbit_period_ms;
    let glyph_text = config.glyph.clone();
    let state = Rc::new(RefCell::new(SpiderState::new(config, size.x, size.y)?));

    // A canvas without a 2D context still runs; frames just draw nothing.
    let surface = match dom::context_2d(&canvas) {
        Ok(ctx) => Some(render::CanvasSurface::new(canvas.clone(), ctx)),
        Err(e) => {
            log::warn!("[mount] {:#}; rendering disabled", e);
            None
        }
    };
    let glyph = match dom::Glyph::attach(&document, &canvas, &glyph_text) {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("[mount] glyph not attached: {:#}", e);
            None
        }
    };

    let resize = events::wire_resize(canvas.clone(), state.clone())?;
    let pointer = events::wire_pointermove(events::PointerWiring {
        canvas: canvas.clone(),
        state: state.clone(),
    })?;

    let state_orbit = state.clone();
    let orbit_timer = timer::IntervalTimer::start(orbit_period_ms, move || {
        state_orbit.borrow_mut().orbit_tick();
    })?;

    let frame_loop = frame::start_loop(frame::FrameContext {
        state: state.clone(),
        surface,
        glyph,
        last_instant: None,
    });

    log::info!(
        "[mount] #{} {}x{} with {} points",
        canvas_id,
        size.x,
        size.y,
        state.borrow().web().len()
    );
    Ok(SpiderHandle {
        inner: Some(Mounted {
            frame_loop,
            _orbit_timer: orbit_timer,
            _pointer: pointer,
            _resize: resize,
            state,
        }),
    })
}
