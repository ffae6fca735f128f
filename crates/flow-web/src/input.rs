use glam::Vec2;
use web_sys as web;

/// Active orbit drag, in client pixels.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, at: Vec2) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = at;
    }

    /// Movement since the previous sample of the same pointer.
    pub fn step(&mut self, pointer_id: i32, at: Vec2) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        let was = self.active && pointer_id == self.pointer_id;
        if was {
            self.active = false;
        }
        was
    }
}

#[inline]
pub fn pointer_client(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn mouse_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// First active touch, if any.
#[inline]
pub fn touch_client(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .item(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

/// Wheel delta in zoom steps; positive zooms out.
#[inline]
pub fn wheel_steps(delta_y: f64, pixels_per_step: f32) -> f32 {
    if delta_y == 0.0 || pixels_per_step <= 0.0 {
        return 0.0;
    }
    (delta_y as f32 / pixels_per_step).clamp(-3.0, 3.0)
}
