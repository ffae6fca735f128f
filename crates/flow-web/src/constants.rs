// DOM hooks and web-only tuning.

pub const CANVAS_ID: &str = "webGL";
pub const PATH_SELECTOR: &str = ".cls-1";
pub const BACKGROUND_URL: &str = "assets/bg.jpg";

// Media query that marks touch-first devices; those get `touchmove` instead of `mousemove`
pub const TOUCH_MEDIA_QUERY: &str = "(hover: none), (pointer: coarse)";

// Wheel deltas arrive in pixels on most browsers; this many pixels make one zoom step
pub const WHEEL_PIXELS_PER_STEP: f32 = 100.0;

pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};
