// Map viewport transform: pan offset + uniform zoom, mutated only by the
// gesture handlers in overview_view.

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 4.0;

/// Zoom step for the +/- buttons on the map.
pub const BUTTON_ZOOM_STEP: f64 = 0.2;
/// Zoom step per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct Viewport {
    pub zoom: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub dragging: bool,
    drag_anchor_x: f64,
    drag_anchor_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            dragging: false,
            drag_anchor_x: 0.0,
            drag_anchor_y: 0.0,
        }
    }
}

impl Viewport {
    /// Begin a drag at a screen position. The anchor is relative to the
    /// current translation so the surface sticks to the pointer.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if self.dragging {
            return;
        }
        self.dragging = true;
        self.drag_anchor_x = x - self.translate_x;
        self.drag_anchor_y = y - self.translate_y;
    }

    /// Returns true if the transform changed and needs re-applying.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        if !self.dragging {
            return false;
        }
        self.translate_x = x - self.drag_anchor_x;
        self.translate_y = y - self.drag_anchor_y;
        true
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Wheel up zooms in, wheel down zooms out.
    pub fn wheel(&mut self, delta_y: f64) {
        let step = if delta_y > 0.0 {
            -WHEEL_ZOOM_STEP
        } else {
            WHEEL_ZOOM_STEP
        };
        self.set_zoom(self.zoom + step);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + BUTTON_ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - BUTTON_ZOOM_STEP);
    }

    /// Clamp to [MIN_ZOOM, MAX_ZOOM] and round to 2 decimals. Out-of-range
    /// requests are clamped, never rejected.
    pub fn set_zoom(&mut self, value: f64) {
        let clamped = value.clamp(MIN_ZOOM, MAX_ZOOM);
        self.zoom = (clamped * 100.0).round() / 100.0;
    }

    /// CSS transform for the map visual layer. Pan is applied before scale,
    /// so panning is unaffected by the zoom level.
    pub fn transform_style(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.zoom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimals_at_most_two(v: f64) -> bool {
        ((v * 100.0).round() / 100.0 - v).abs() < 1e-9
    }

    #[test]
    fn zoom_clamps_high_and_low() {
        let mut vp = Viewport::default();
        vp.set_zoom(10.0);
        assert_eq!(vp.zoom, 4.0);
        vp.set_zoom(-5.0);
        assert_eq!(vp.zoom, 0.5);
    }

    #[test]
    fn zoom_rounds_to_two_decimals() {
        let mut vp = Viewport::default();
        vp.set_zoom(1.234567);
        assert_eq!(vp.zoom, 1.23);
        for raw in [-3.0, 0.0, 0.499, 0.7777, 3.999999, 42.0] {
            vp.set_zoom(raw);
            assert!(vp.zoom >= MIN_ZOOM && vp.zoom <= MAX_ZOOM);
            assert!(decimals_at_most_two(vp.zoom));
        }
    }

    #[test]
    fn wheel_direction_maps_to_zoom_step() {
        let mut vp = Viewport::default();
        vp.wheel(120.0);
        assert_eq!(vp.zoom, 0.9);
        vp.wheel(-120.0);
        assert_eq!(vp.zoom, 1.0);
        vp.wheel(-0.01);
        assert_eq!(vp.zoom, 1.1);
    }

    #[test]
    fn drag_translates_relative_to_anchor() {
        let mut vp = Viewport::default();
        vp.pointer_down(50.0, 50.0);
        assert!(vp.dragging);
        assert!(vp.pointer_move(80.0, 65.0));
        assert_eq!(vp.translate_x, 30.0);
        assert_eq!(vp.translate_y, 15.0);
        // last-write-wins on rapid repeated moves
        assert!(vp.pointer_move(90.0, 60.0));
        assert_eq!(vp.translate_x, 40.0);
        assert_eq!(vp.translate_y, 10.0);
    }

    #[test]
    fn move_without_drag_is_a_no_op() {
        let mut vp = Viewport::default();
        assert!(!vp.pointer_move(100.0, 100.0));
        assert_eq!(vp.translate_x, 0.0);
        assert_eq!(vp.translate_y, 0.0);
    }

    #[test]
    fn pointer_down_mid_gesture_keeps_anchor() {
        let mut vp = Viewport::default();
        vp.pointer_down(10.0, 10.0);
        vp.pointer_down(500.0, 500.0);
        vp.pointer_move(20.0, 30.0);
        assert_eq!(vp.translate_x, 10.0);
        assert_eq!(vp.translate_y, 20.0);
    }

    #[test]
    fn pointer_up_is_idempotent() {
        let mut vp = Viewport::default();
        vp.pointer_down(0.0, 0.0);
        vp.pointer_up();
        assert!(!vp.dragging);
        vp.pointer_up();
        assert!(!vp.dragging);
    }

    #[test]
    fn pan_is_independent_of_zoom() {
        let mut vp = Viewport::default();
        vp.set_zoom(3.0);
        vp.pointer_down(0.0, 0.0);
        vp.pointer_move(25.0, -40.0);
        assert_eq!(vp.translate_x, 25.0);
        assert_eq!(vp.translate_y, -40.0);
    }

    #[test]
    fn transform_style_carries_all_three_terms() {
        let mut vp = Viewport::default();
        vp.pointer_down(0.0, 0.0);
        vp.pointer_move(12.0, -7.5);
        vp.set_zoom(1.5);
        assert_eq!(vp.transform_style(), "translate(12px, -7.5px) scale(1.5)");
    }
}
