// Touch/pinch gesture state for the map surface. One finger pans through the
// viewport's drag path, two fingers drive a relative pinch zoom.

use super::viewport::Viewport;

#[derive(Default, Debug, Clone)]
pub struct PinchState {
    pub active: bool,
    pub start_dist: f64,
    pub start_zoom: f64,
}

/// Euclidean distance between two touch points.
pub fn pinch_distance(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt()
}

impl PinchState {
    /// One touch begins a drag; a second touch cancels the drag and records
    /// the pinch baseline.
    pub fn touch_start(&mut self, touches: &[(f64, f64)], vp: &mut Viewport) {
        match touches {
            [(x, y)] => {
                self.active = false;
                vp.pointer_down(*x, *y);
            }
            [(x0, y0), (x1, y1), ..] => {
                vp.pointer_up();
                self.active = true;
                self.start_dist = pinch_distance(*x0, *y0, *x1, *y1);
                self.start_zoom = vp.zoom;
            }
            [] => {}
        }
    }

    /// Returns true if the transform changed.
    pub fn touch_move(&mut self, touches: &[(f64, f64)], vp: &mut Viewport) -> bool {
        match touches {
            [(x, y)] => vp.pointer_move(*x, *y),
            [(x0, y0), (x1, y1), ..] => {
                if !self.active || self.start_dist == 0.0 {
                    return false;
                }
                let dist = pinch_distance(*x0, *y0, *x1, *y1);
                vp.set_zoom(self.start_zoom * (dist / self.start_dist));
                true
            }
            [] => false,
        }
    }

    pub fn touch_end(&mut self, vp: &mut Viewport) {
        self.active = false;
        vp.pointer_up();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinch_distance_is_euclidean() {
        assert_eq!(pinch_distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(pinch_distance(10.0, 10.0, 10.0, 10.0), 0.0);
    }

    #[test]
    fn single_touch_pans_like_a_pointer() {
        let mut vp = Viewport::default();
        let mut ps = PinchState::default();
        ps.touch_start(&[(50.0, 50.0)], &mut vp);
        assert!(vp.dragging);
        assert!(ps.touch_move(&[(80.0, 65.0)], &mut vp));
        assert_eq!(vp.translate_x, 30.0);
        assert_eq!(vp.translate_y, 15.0);
    }

    #[test]
    fn pinch_scales_zoom_by_distance_ratio() {
        let mut vp = Viewport::default();
        let mut ps = PinchState::default();
        ps.touch_start(&[(0.0, 0.0), (100.0, 0.0)], &mut vp);
        assert!(!vp.dragging);
        assert_eq!(ps.start_dist, 100.0);
        assert!(ps.touch_move(&[(0.0, 0.0), (150.0, 0.0)], &mut vp));
        assert_eq!(vp.zoom, 1.5);
    }

    #[test]
    fn pinch_result_is_clamped() {
        let mut vp = Viewport::default();
        let mut ps = PinchState::default();
        ps.touch_start(&[(0.0, 0.0), (10.0, 0.0)], &mut vp);
        ps.touch_move(&[(0.0, 0.0), (1000.0, 0.0)], &mut vp);
        assert_eq!(vp.zoom, 4.0);
        ps.touch_move(&[(0.0, 0.0), (1.0, 0.0)], &mut vp);
        assert_eq!(vp.zoom, 0.5);
    }

    #[test]
    fn zero_start_distance_skips_the_update() {
        let mut vp = Viewport::default();
        let mut ps = PinchState::default();
        ps.touch_start(&[(5.0, 5.0), (5.0, 5.0)], &mut vp);
        assert!(!ps.touch_move(&[(0.0, 0.0), (90.0, 0.0)], &mut vp));
        assert_eq!(vp.zoom, 1.0);
    }

    #[test]
    fn second_finger_cancels_an_active_drag() {
        let mut vp = Viewport::default();
        let mut ps = PinchState::default();
        ps.touch_start(&[(10.0, 10.0)], &mut vp);
        assert!(vp.dragging);
        ps.touch_start(&[(10.0, 10.0), (60.0, 10.0)], &mut vp);
        assert!(!vp.dragging);
        assert!(ps.active);
    }

    #[test]
    fn touch_end_is_idempotent() {
        let mut vp = Viewport::default();
        let mut ps = PinchState::default();
        ps.touch_start(&[(0.0, 0.0)], &mut vp);
        ps.touch_end(&mut vp);
        assert!(!vp.dragging);
        assert!(!ps.active);
        ps.touch_end(&mut vp);
        assert!(!vp.dragging);
        assert!(!ps.active);
    }

    #[test]
    fn empty_touch_list_is_a_no_op() {
        let mut vp = Viewport::default();
        let mut ps = PinchState::default();
        ps.touch_start(&[], &mut vp);
        assert!(!ps.touch_move(&[], &mut vp));
        assert!(!vp.dragging);
    }
}
