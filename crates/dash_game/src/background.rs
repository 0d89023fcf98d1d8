//! Scrolling background.
//!
//! There is no camera: directional input moves the background sprite the
//! opposite way, and each axis is clamped so the sprite never uncovers the
//! canvas. Horizontal position stays in `[canvas_w - bg_w, 0]`, vertical in
//! `[canvas_h - bg_h, 0]`.

use dash_core::input::{Direction, InputState};
use dash_render::Surface;
use glam::Vec2;

use crate::sprite::{Drawable, Sprite};

pub const DEFAULT_SCROLL_RATE: f32 = 5.0;

/// Delta slice that earns one scroll step. Partial slices round up.
const SCROLL_SLICE_MS: f64 = 24.0;

pub struct Background {
    sprite: Sprite,
    scroll_rate: f32,
    canvas_size: (u32, u32),
}

impl Background {
    pub fn new(sprite: Sprite, canvas_size: (u32, u32), scroll_rate: f32) -> Self {
        Self {
            sprite,
            scroll_rate,
            canvas_size,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.sprite.position
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Lowest x/y the background may reach.
    pub fn min_position(&self) -> Vec2 {
        Vec2::new(
            self.canvas_size.0 as f32 - self.sprite.w as f32,
            self.canvas_size.1 as f32 - self.sprite.h as f32,
        )
    }
}

impl Drawable for Background {
    fn update(&mut self, delta_ms: f64, input: &InputState) {
        let modifier = (delta_ms / SCROLL_SLICE_MS).ceil() as f32;
        let distance = modifier * self.scroll_rate;
        let min = self.min_position();
        let pos = &mut self.sprite.position;

        if input.is_held(Direction::Left) {
            pos.x = (pos.x + distance).min(0.0);
        }
        if input.is_held(Direction::Right) {
            pos.x = (pos.x - distance).max(min.x);
        }
        if input.is_held(Direction::Up) {
            pos.y = (pos.y + distance).min(0.0);
        }
        if input.is_held(Direction::Down) {
            pos.y = (pos.y - distance).max(min.y);
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        self.sprite.render(surface);
    }
}
