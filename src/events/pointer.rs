use crate::constants::POINTER_MOVE_EVENT;
use crate::dom::EventListener;
use crate::input;
use spider_core::SpiderState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<SpiderState>>,
}

/// Feeds pointer moves over the canvas into the cursor tracker.
pub fn wire_pointermove(w: PointerWiring) -> anyhow::Result<EventListener> {
    let target: web::EventTarget = w.canvas.clone().into();
    EventListener::new(&target, POINTER_MOVE_EVENT, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let sample = input::pointer_sample(ev, &w.canvas);
        w.state
            .borrow_mut()
            .on_pointer_move(sample.position, sample.movement);
    })
}
