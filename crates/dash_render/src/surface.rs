use glam::Vec2;

use crate::image_resource::ImageResource;

/// Integer rectangle on a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Destination rectangle on a surface, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DestRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl DestRect {
    pub fn at(position: Vec2, w: u32, h: u32) -> Self {
        Self {
            x: position.x,
            y: position.y,
            w: w as f32,
            h: h as f32,
        }
    }
}

/// A drawing target the scene renders into.
///
/// Entities must check `is_ready` before calling `draw_image`; surfaces are
/// free to ignore a draw for an image that has no pixels yet.
pub trait Surface {
    /// Copy `src` of `image` into `dest`. Source and destination sizes match.
    fn draw_image(&mut self, image: &ImageResource, src: PixelRect, dest: DestRect);

    fn is_ready(&self, image: &ImageResource) -> bool {
        image.is_ready()
    }
}
