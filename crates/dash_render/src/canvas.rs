//! Software RGBA render target.
//!
//! The scene draws into a `Canvas` on the CPU; the presenter uploads the
//! finished frame to the GPU once per tick. The canvas is never cleared
//! between ticks, the background sprite covers it.

use image::{imageops, Rgba, RgbaImage};

use crate::image_resource::ImageResource;
use crate::surface::{DestRect, PixelRect, Surface};

pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255])),
        }
    }

    pub fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels.get_pixel(x, y).0
    }

    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}

impl Surface for Canvas {
    /// Unscaled blit. `crop_imm` clamps the source rect to the sheet and
    /// `overlay` clips to the canvas and alpha-blends.
    fn draw_image(&mut self, image: &ImageResource, src: PixelRect, dest: DestRect) {
        let Some(sheet) = image.pixels() else {
            return;
        };

        let w = src.w.min(dest.w.max(0.0) as u32);
        let h = src.h.min(dest.h.max(0.0) as u32);
        let frame = imageops::crop_imm(sheet, src.x, src.y, w, h);
        imageops::overlay(
            &mut self.pixels,
            &*frame,
            dest.x.floor() as i64,
            dest.y.floor() as i64,
        );
    }
}
