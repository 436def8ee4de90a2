//! Input normalization
//!
//! Keyboard and pointer events collapse into one signal: jump. Pointer
//! presses only count inside the playfield, letterbox bars are ignored.

use glam::Vec2;

use crate::renderer::Viewport;

/// Key code that triggers a jump
pub const JUMP_KEY: &str = "Space";

/// Raw input from the platform layer
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key press, identified by its physical key code (`KeyboardEvent.code`)
    Key { code: String },
    /// Pointer press in device pixels relative to the canvas
    PointerDown { x: f32, y: f32 },
}

/// Whether the event is a jump trigger
pub fn is_jump(event: &InputEvent, viewport: &Viewport) -> bool {
    match event {
        InputEvent::Key { code } => code == JUMP_KEY,
        InputEvent::PointerDown { x, y } => viewport.contains_device(Vec2::new(*x, *y)),
    }
}
