use glam::Vec2;
use web_sys as web;

/// Map a canvas-local position to normalized device coordinates.
///
/// `x` grows to the right and `y` grows upward, both in `[-1, 1]` for points
/// inside the canvas. Returns `None` for a degenerate (zero-area) canvas.
#[inline]
pub fn local_to_ndc(local_x: f32, local_y: f32, width: f32, height: f32) -> Option<Vec2> {
    if width > 0.0 && height > 0.0 {
        let x = (local_x / width) * 2.0 - 1.0;
        let y = -(local_y / height) * 2.0 + 1.0;
        Some(Vec2::new(x, y))
    } else {
        None
    }
}

/// Rotation target for a pointer at `ndc`: yaw follows x, pitch follows y.
#[inline]
pub fn orientation_target(ndc: Vec2, yaw_sensitivity: f32, pitch_sensitivity: f32) -> Vec2 {
    Vec2::new(ndc.x * yaw_sensitivity, ndc.y * pitch_sensitivity)
}

// ---------------- DOM helpers ----------------
#[inline]
pub fn pointer_canvas_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    local_to_ndc(x_css, y_css, rect.width() as f32, rect.height() as f32)
}
