use glam::Vec3;

// Shared sampling/visual tuning constants used by the frontends.

// Path sampling
pub const SAMPLE_INTERVAL: f32 = 5.0; // arc-length distance between sampled points
pub const CENTER_OFFSET: [f32; 3] = [-1024.0, -512.0, 0.0]; // moves the 2048x1024 artboard to the origin
pub const PATH_TOLERANCE: f32 = 0.01; // flattening tolerance when measuring svg path data

// Point cycling
pub const WINDOW_SIZE: usize = 100; // points written per trace each frame
pub const DEFAULT_SPEED: usize = 1; // cursor advance per frame
pub const OPACITY_RAMP_FACTOR: f32 = 5.0; // ramp divisor = factor * window, so opacity stays below 0.2

// Initial scatter before the first frame
pub const SCATTER_HALF_EXTENT: f32 = 500.0;
pub const SCATTER_MAX_OPACITY: f32 = 0.5;
pub const SCATTER_SEED: u64 = 42;

// Pointer
pub const POINTER_IDLE_RESET_MS: u64 = 1000; // pointer snaps back to the origin after this much idle time

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 100.0;
pub const CAMERA_FAR: f32 = 10_000.0;
pub const CAMERA_START_Z: f32 = 500.0;
pub const ORBIT_DAMPING: f32 = 0.05; // fraction of pending rotation applied per update
pub const ORBIT_ZOOM_BASE: f32 = 0.95; // radius scale per wheel step
pub const ORBIT_POLAR_EPSILON: f32 = 1e-3;

// Background artboard
pub const BACKGROUND_SIZE: [f32; 2] = [2048.0, 1024.0];
pub const BACKGROUND_TINT: [f32; 3] = [0.0, 0.0, 80.0 / 255.0]; // 0x000050

// Rendering
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const POINT_SIZE_PX: f32 = 6.0;

#[inline]
pub fn center_offset_vec3() -> Vec3 {
    Vec3::new(CENTER_OFFSET[0], CENTER_OFFSET[1], CENTER_OFFSET[2])
}
