use crate::constants::RESIZE_EVENT;
use crate::dom::{self, EventListener};
use spider_core::SpiderState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keeps the canvas at viewport size and re-seeds the web on every resize.
pub fn wire_resize(
    canvas: web::HtmlCanvasElement,
    state: Rc<RefCell<SpiderState>>,
) -> anyhow::Result<EventListener> {
    let window: web::EventTarget = dom::window()?.into();
    EventListener::new(&window, RESIZE_EVENT, move |_ev: web::Event| {
        let size = dom::sync_canvas_to_viewport(&canvas);
        state.borrow_mut().resize(size.x, size.y);
        log::info!("[resize] {}x{}", size.x, size.y);
    })
}
