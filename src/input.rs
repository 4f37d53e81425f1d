use glam::Vec2;
use web_sys as web;

/// Pointer sample in canvas backing pixels plus the movement since the
/// previous event in CSS pixels.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub movement: Vec2,
}

/// Maps a client-space point into canvas backing pixels given the canvas's
/// bounding rect. A collapsed rect yields the rect-relative CSS position.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    backing: Vec2,
) -> Vec2 {
    let css = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        css / rect_size * backing
    } else {
        css
    }
}

// ---------------- Event helpers ----------------
#[inline]
pub fn pointer_sample(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> PointerSample {
    let rect = canvas.get_bounding_client_rect();
    let position = client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    );
    PointerSample {
        position,
        movement: Vec2::new(ev.movement_x() as f32, ev.movement_y() as f32),
    }
}
