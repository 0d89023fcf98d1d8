//! Walker-type enemy: a free-running animation with no input reaction and no
//! movement.

use dash_core::animation::{AnimationClip, AnimationSet, FrameRect, StepCounter};
use dash_core::input::InputState;
use dash_render::Surface;
use glam::Vec2;

use crate::sprite::{Drawable, Sprite};

/// Frame counter step per update, in tenths of a frame (0.4).
pub const WALK_STEP_TENTHS: u64 = 4;

pub const MET_IMAGE_PATH: &str = "assets/img/mm-enemies.png";

pub struct Walker {
    sprite: Sprite,
    animations: AnimationSet,
    state: String,
    counter: StepCounter,
}

impl Walker {
    /// Panics if `state` has no clip in `animations`.
    pub fn new(sprite: Sprite, animations: AnimationSet, state: &str) -> Self {
        animations.require(&[state]);
        Self {
            sprite,
            animations,
            state: state.to_string(),
            counter: StepCounter::new(WALK_STEP_TENTHS),
        }
    }

    /// The "Met" enemy, walking in place.
    pub fn met(position: Vec2) -> Self {
        let sprite = Sprite::new(position, FrameRect::new(20, 20, 60, 16), MET_IMAGE_PATH);
        Self::new(sprite, met_animations(), "walking")
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

impl Drawable for Walker {
    fn update(&mut self, _delta_ms: f64, _input: &InputState) {
        self.counter.advance();
        let frame = self
            .animations
            .clip(&self.state)
            .frame_at(self.counter.frame());
        self.sprite.apply_frame(frame);
    }

    fn render(&self, surface: &mut dyn Surface) {
        self.sprite.render(surface);
    }
}

pub fn met_animations() -> AnimationSet {
    AnimationSet::new()
        .with_clip(
            "neutral",
            AnimationClip::once(vec![FrameRect::new(20, 20, 60, 16)]),
        )
        .with_clip(
            "walking",
            AnimationClip::looping(vec![
                FrameRect::new(20, 20, 79, 16),
                FrameRect::new(20, 20, 56, 16),
                FrameRect::new(20, 20, 103, 16),
                FrameRect::new(20, 20, 56, 16),
            ]),
        )
}
