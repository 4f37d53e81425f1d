use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setInterval` registration, cleared on drop.
pub struct IntervalTimer {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl IntervalTimer {
    pub fn start(period_ms: u32, handler: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = crate::dom::window()?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(callback, timeout)
            .map_err(|e| anyhow!("setInterval: {:?}", e))?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}
