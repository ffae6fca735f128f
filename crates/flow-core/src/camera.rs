//! Camera description and a damped orbit controller driven by pointer drags.

use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START_Z, ORBIT_DAMPING,
    ORBIT_POLAR_EPSILON, ORBIT_ZOOM_BASE,
};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Orbit around `target` in spherical coordinates (y up).
///
/// Drags and wheel steps are queued and applied in [`OrbitController::update`],
/// once per frame. Pending rotation eases out by `damping` each update.
#[derive(Clone, Debug)]
pub struct OrbitController {
    pub target: Vec3,
    pub damping: f32,
    theta: f32,
    phi: f32,
    radius: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
    min_radius: f32,
    max_radius: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::looking_from(Vec3::new(0.0, 0.0, CAMERA_START_Z), Vec3::ZERO)
    }
}

impl OrbitController {
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(f32::EPSILON);
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        Self {
            target,
            damping: ORBIT_DAMPING,
            theta,
            phi,
            radius,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
            min_radius: CAMERA_NEAR,
            max_radius: CAMERA_FAR * 0.9,
        }
    }

    /// Queue a rotation for a drag of `dx`,`dy` pixels on a viewport of
    /// height `viewport_height`. A full-height drag is one turn.
    pub fn rotate_by(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        self.pending_theta -= TAU * dx / viewport_height;
        self.pending_phi -= TAU * dy / viewport_height;
    }

    /// Queue a dolly. Positive steps move away from the target.
    pub fn zoom_by(&mut self, steps: f32) {
        self.pending_scale *= ORBIT_ZOOM_BASE.powf(-steps);
    }

    pub fn update(&mut self) {
        self.theta += self.pending_theta * self.damping;
        self.phi = (self.phi + self.pending_phi * self.damping)
            .clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        self.radius = (self.radius * self.pending_scale).clamp(self.min_radius, self.max_radius);

        let keep = 1.0 - self.damping;
        self.pending_theta *= keep;
        self.pending_phi *= keep;
        self.pending_scale = 1.0;
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + Vec3::new(
                self.radius * sin_phi * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * sin_phi * self.theta.cos(),
            )
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}
