//! Drawing of the web onto an abstract 2D surface.

use crate::web::Web;
use glam::Vec2;

/// The handful of 2D primitives the web needs. The browser front-end
/// implements this over `CanvasRenderingContext2d`.
pub trait Surface {
    /// Drawable size in surface pixels.
    fn size(&self) -> (f32, f32);
    fn clear(&mut self);
    fn set_fill(&mut self, color: &str);
    fn set_stroke(&mut self, color: &str, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn line(&mut self, from: Vec2, to: Vec2);
}

#[derive(Clone, Copy, Debug)]
pub struct WebStyle<'a> {
    pub point_radius: f32,
    pub point_color: &'a str,
    pub line_width: f32,
    pub line_color: &'a str,
    pub connect_distance: f32,
}

/// Clears the surface and draws points plus every connection shorter than
/// `style.connect_distance`. A surface with no area is left untouched.
/// Returns the number of lines drawn.
pub fn render_web<S: Surface + ?Sized>(surface: &mut S, web: &Web, style: &WebStyle<'_>) -> usize {
    let (w, h) = surface.size();
    if !(w > 0.0 && h > 0.0) {
        return 0;
    }
    surface.clear();

    surface.set_fill(style.point_color);
    for p in web.points() {
        surface.fill_circle(p.position, style.point_radius);
    }

    let pairs = web.connections(style.connect_distance);
    surface.set_stroke(style.line_color, style.line_width);
    let points = web.points();
    for &(i, j) in &pairs {
        surface.line(points[i].position, points[j].position);
    }
    pairs.len()
}
