use crate::constants::{glyph_style, is_containing_block, BACKGROUND_COLOR};
use anyhow::{anyhow, Context};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window() -> anyhow::Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow!("#{} is not a canvas", id))
}

/// Window inner size in CSS pixels; zero when unavailable.
pub fn viewport_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as f32
    };
    Vec2::new(dim(w.inner_width()), dim(w.inner_height()))
}

/// Sizes the canvas backing store to the viewport and returns the new size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let size = viewport_size();
    canvas.set_width(size.x as u32);
    canvas.set_height(size.y as u32);
    Vec2::new(canvas.width() as f32, canvas.height() as f32)
}

pub fn paint_canvas_background(canvas: &web::HtmlCanvasElement) {
    if let Err(e) = canvas.style().set_property("background-color", BACKGROUND_COLOR) {
        log::warn!("[dom] could not set canvas background: {:?}", e);
    }
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .context("2d context unavailable")?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))
}

/// Event listener that unregisters itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// The decorative glyph circling the cursor. Removed from the page on drop.
pub struct Glyph {
    el: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
}

/// Gives `el` `position: relative` unless it already positions its
/// absolutely placed children.
fn make_containing_block(el: &web::HtmlElement) {
    let position = web::window()
        .and_then(|w| w.get_computed_style(el).ok().flatten())
        .and_then(|s| s.get_property_value("position").ok())
        .unwrap_or_default();
    if !is_containing_block(&position) {
        if let Err(e) = el.style().set_property("position", "relative") {
            log::warn!("[dom] could not position glyph container: {:?}", e);
        }
    }
}

impl Glyph {
    /// Appends the glyph next to `canvas` (in its parent, or the body when
    /// the canvas is detached).
    pub fn attach(
        document: &web::Document,
        canvas: &web::HtmlCanvasElement,
        text: &str,
    ) -> anyhow::Result<Self> {
        let el = document
            .create_element("div")
            .map_err(|e| anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| anyhow!("div is not an HtmlElement"))?;
        el.set_text_content(Some(text));
        _ = el.set_attribute("aria-hidden", "true");
        _ = el.set_attribute("style", &glyph_style(0.0, 0.0));
        let parent: web::HtmlElement = match canvas.parent_element() {
            Some(p) => p
                .dyn_into::<web::HtmlElement>()
                .map_err(|_| anyhow!("canvas parent is not an HtmlElement"))?,
            None => document.body().context("no body")?,
        };
        make_containing_block(&parent);
        parent.append_child(&el).map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            el,
            canvas: canvas.clone(),
        })
    }

    /// Places the glyph at `at` in canvas pixels, shifted by the canvas's
    /// offset inside its container.
    #[inline]
    pub fn place(&self, at: Vec2) {
        let origin = Vec2::new(
            self.canvas.offset_left() as f32,
            self.canvas.offset_top() as f32,
        );
        let p = origin + at;
        _ = self.el.set_attribute("style", &glyph_style(p.x, p.y));
    }
}

impl Drop for Glyph {
    fn drop(&mut self) {
        self.el.remove();
    }
}
