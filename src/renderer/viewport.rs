//! World to device mapping
//!
//! The world is scaled uniformly to fit the device surface and centered, so a
//! surface with a different aspect ratio gets letterbox bars.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub world: Vec2,
    pub device: Vec2,
    /// Device pixels per world unit
    pub scale: f32,
    /// Device position of the world origin
    pub offset: Vec2,
}

impl Viewport {
    pub fn fit(world_width: f32, world_height: f32, device_width: f32, device_height: f32) -> Self {
        let world = Vec2::new(world_width, world_height);
        let device = Vec2::new(device_width, device_height);
        let scale = (device_width / world_width).min(device_height / world_height);
        let offset = (device - world * scale) * 0.5;
        Self {
            world,
            device,
            scale,
            offset,
        }
    }

    pub fn world_to_device(&self, point: Vec2) -> Vec2 {
        self.offset + point * self.scale
    }

    pub fn device_to_world(&self, point: Vec2) -> Vec2 {
        (point - self.offset) / self.scale
    }

    /// Whether a device point lands on the playfield (not on a letterbox bar)
    pub fn contains_device(&self, point: Vec2) -> bool {
        let world = self.device_to_world(point);
        world.x >= 0.0 && world.y >= 0.0 && world.x <= self.world.x && world.y <= self.world.y
    }

    /// World point to normalized device coordinates (y up, [-1, 1])
    pub fn world_to_clip(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x / self.world.x * 2.0 - 1.0,
            1.0 - point.y / self.world.y * 2.0,
        )
    }

    /// Inverse of [`Viewport::world_to_clip`]
    pub fn clip_to_world(&self, clip: Vec2) -> Vec2 {
        Vec2::new(
            (clip.x + 1.0) * 0.5 * self.world.x,
            (1.0 - clip.y) * 0.5 * self.world.y,
        )
    }

    /// Clip-space vertex to a device pixel, letterbox offset included
    pub fn clip_to_device(&self, clip: Vec2) -> Vec2 {
        self.world_to_device(self.clip_to_world(clip))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_aspect_has_no_bars() {
        let viewport = Viewport::fit(1920.0, 1080.0, 960.0, 540.0);
        assert_eq!(viewport.scale, 0.5);
        assert_eq!(viewport.offset, Vec2::ZERO);
        assert_eq!(
            viewport.world_to_device(Vec2::new(1920.0, 1080.0)),
            Vec2::new(960.0, 540.0)
        );
    }

    #[test]
    fn test_tall_device_is_letterboxed() {
        let viewport = Viewport::fit(1920.0, 1080.0, 960.0, 720.0);
        assert_eq!(viewport.offset, Vec2::new(0.0, 90.0));

        let device = viewport.world_to_device(Vec2::new(480.0, 540.0));
        assert_eq!(device, Vec2::new(240.0, 360.0));
        assert_eq!(viewport.device_to_world(device), Vec2::new(480.0, 540.0));
    }

    #[test]
    fn test_clip_space_corners() {
        let viewport = Viewport::fit(1920.0, 1080.0, 1920.0, 1080.0);
        assert_eq!(viewport.world_to_clip(Vec2::ZERO), Vec2::new(-1.0, 1.0));
        assert_eq!(
            viewport.world_to_clip(Vec2::new(1920.0, 1080.0)),
            Vec2::new(1.0, -1.0)
        );
        assert_eq!(
            viewport.clip_to_world(Vec2::new(0.0, 0.0)),
            Vec2::new(960.0, 540.0)
        );
    }
}
