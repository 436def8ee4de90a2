//! Vertex types for 2D rendering

/// Simple 2D vertex with position and color
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// CSS `rgba()` string for a linear [0, 1] color
pub fn css_rgba(color: [f32; 4]) -> String {
    let [r, g, b, a] = color;
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgba({}, {}, {}, {})", channel(r), channel(g), channel(b), a.clamp(0.0, 1.0))
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.44, 0.77, 0.81, 1.0];
    pub const OBSTACLE: [f32; 4] = [0.33, 0.62, 0.2, 1.0];
    pub const ACTOR: [f32; 4] = [0.98, 0.82, 0.2, 1.0];
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
}
