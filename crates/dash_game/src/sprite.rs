//! The `Drawable` capability and the image-backed `Sprite` all scene entities
//! are built from.
//!
//! A sprite draws the `(sx, sy, w, h)` region of its own image resource at
//! `(x, y)`, unscaled. Animated entities wrap a sprite and rewrite its size
//! and source rect from their current clip frame on every update.

use dash_core::animation::FrameRect;
use dash_core::input::InputState;
use dash_render::{DestRect, ImageResource, PixelRect, Surface};
use glam::Vec2;

/// Something the scene updates and renders once per tick.
///
/// `update` may only touch the entity's own state and must not block.
/// `render` only reads state and issues draw calls.
pub trait Drawable {
    fn update(&mut self, _delta_ms: f64, _input: &InputState) {}

    fn render(&self, _surface: &mut dyn Surface) {}
}

#[derive(Debug, Clone)]
pub struct Sprite {
    pub position: Vec2,
    pub w: u32,
    pub h: u32,
    pub sx: u32,
    pub sy: u32,
    image: ImageResource,
}

impl Sprite {
    /// Build a sprite and start loading its image. A path of `"none"` never
    /// loads, so the sprite never draws.
    pub fn new(position: Vec2, frame: FrameRect, image_path: &str) -> Self {
        Self::with_image(position, frame, ImageResource::load(image_path))
    }

    pub fn with_image(position: Vec2, frame: FrameRect, image: ImageResource) -> Self {
        Self {
            position,
            w: frame.w,
            h: frame.h,
            sx: frame.sx,
            sy: frame.sy,
            image,
        }
    }

    pub fn image(&self) -> &ImageResource {
        &self.image
    }

    /// Copy a clip frame's size and source rect onto the sprite.
    pub fn apply_frame(&mut self, frame: FrameRect) {
        self.w = frame.w;
        self.h = frame.h;
        self.sx = frame.sx;
        self.sy = frame.sy;
    }

    pub fn frame(&self) -> FrameRect {
        FrameRect::new(self.w, self.h, self.sx, self.sy)
    }

    pub fn source_rect(&self) -> PixelRect {
        PixelRect::new(self.sx, self.sy, self.w, self.h)
    }

    pub fn dest_rect(&self) -> DestRect {
        DestRect::at(self.position, self.w, self.h)
    }

    pub fn log_state(&self) {
        log::debug!(
            "SRC: {} X: {} Y: {} W: {} H: {} SX: {} SY: {}",
            self.image.path(),
            self.position.x,
            self.position.y,
            self.w,
            self.h,
            self.sx,
            self.sy
        );
    }
}

impl Drawable for Sprite {
    fn render(&self, surface: &mut dyn Surface) {
        if !surface.is_ready(&self.image) {
            return;
        }
        surface.draw_image(&self.image, self.source_rect(), self.dest_rect());
    }
}
