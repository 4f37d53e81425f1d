/// Browser-side constants: DOM hooks, event names and glyph styling.
///
/// Simulation tuning lives in `spider_core::constants`; this file only holds
/// values that describe how the effect is attached to the page.
// Canvas picked up automatically by the start hook
pub const DEFAULT_CANVAS_ID: &str = "spider-canvas";

// DOM events
pub const POINTER_MOVE_EVENT: &str = "pointermove";
pub const RESIZE_EVENT: &str = "resize";

// Canvas background behind the web
pub const BACKGROUND_COLOR: &str = "black";

// Orbiting glyph element
pub const GLYPH_SIZE_PX: f32 = 24.0;
pub const GLYPH_COLOR: &str = "#facc15";
pub const GLYPH_Z_INDEX: i32 = 10;

// dt (seconds) assumed for the first frame, before a previous instant exists
pub const NOMINAL_FRAME_SEC: f32 = 1.0 / 60.0;

/// Whether a computed CSS `position` already makes an element the containing
/// block for absolutely positioned children.
pub fn is_containing_block(position: &str) -> bool {
    !matches!(position.trim(), "" | "static")
}

/// Inline style for the glyph element, translated to `(x, y)` canvas pixels.
pub fn glyph_style(x: f32, y: f32) -> String {
    format!(
        "position:absolute;left:0;top:0;width:{size}px;height:{size}px;\
         font-size:{size}px;line-height:1;color:{color};pointer-events:none;\
         user-select:none;z-index:{z};transform:translate({x:.1}px,{y:.1}px);",
        size = GLYPH_SIZE_PX,
        color = GLYPH_COLOR,
        z = GLYPH_Z_INDEX,
    )
}
