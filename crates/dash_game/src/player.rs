//! Player character state machine.
//!
//! Two states, `Neutral` and `Dash`, plus a sequence index `seq` into the
//! dash clip. Holding any direction enters `Dash` at seq 0, then steps to
//! the held dash frame; releasing unwinds seq back to 0 before returning to
//! `Neutral`. After each update the frame `clip(state)[seq]` is copied onto
//! the sprite.
//!
//! Facing is tracked but never changes and the character never moves; only
//! the background scrolls.

use dash_core::animation::{AnimationClip, AnimationSet, FrameRect};
use dash_core::input::InputState;
use dash_render::Surface;
use glam::Vec2;

use crate::sprite::{Drawable, Sprite};

pub const PLAYER_IMAGE_PATH: &str = "assets/img/x-r.gif";

/// Last dash frame; seq holds here while input stays active.
const MAX_DASH_SEQ: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Neutral,
    Dash,
}

impl PlayerState {
    pub fn clip_name(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Dash => "dash",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

pub struct Player {
    sprite: Sprite,
    animations: AnimationSet,
    state: PlayerState,
    seq: usize,
    facing: Facing,
}

impl Player {
    /// Panics unless `animations` has a one-frame-or-more "neutral" clip and
    /// a "dash" clip long enough to hold at the last dash frame.
    pub fn new(sprite: Sprite, animations: AnimationSet) -> Self {
        animations.require(&[
            PlayerState::Neutral.clip_name(),
            PlayerState::Dash.clip_name(),
        ]);
        let dash_len = animations.clip(PlayerState::Dash.clip_name()).len();
        assert!(
            dash_len > MAX_DASH_SEQ,
            "dash clip needs {} frames, has {dash_len}",
            MAX_DASH_SEQ + 1
        );
        Self {
            sprite,
            animations,
            state: PlayerState::Neutral,
            seq: 0,
            facing: Facing::Right,
        }
    }

    /// The Megaman player character, placed at `position`.
    pub fn megaman(position: Vec2) -> Self {
        let sprite = Sprite::new(position, FrameRect::new(40, 35, 212, 17), PLAYER_IMAGE_PATH);
        Self::new(sprite, megaman_animations())
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn seq(&self) -> usize {
        self.seq
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn step_state(&mut self, input_active: bool) {
        match (self.state, input_active) {
            (PlayerState::Neutral, true) => {
                self.state = PlayerState::Dash;
                log::debug!("Player: neutral -> dash");
            }
            (PlayerState::Dash, true) => {
                self.seq = (self.seq + 1).min(MAX_DASH_SEQ);
            }
            (PlayerState::Dash, false) if self.seq == 0 => {
                self.state = PlayerState::Neutral;
                log::debug!("Player: dash -> neutral");
            }
            (PlayerState::Dash, false) => {
                self.seq = self.seq.saturating_sub(1);
            }
            (PlayerState::Neutral, false) => {}
        }
    }
}

impl Drawable for Player {
    fn update(&mut self, _delta_ms: f64, input: &InputState) {
        self.step_state(input.any_held());
        let frame = self
            .animations
            .clip(self.state.clip_name())
            .frame(self.seq);
        self.sprite.apply_frame(frame);
    }

    fn render(&self, surface: &mut dyn Surface) {
        self.sprite.render(surface);
    }
}

pub fn megaman_animations() -> AnimationSet {
    AnimationSet::new()
        .with_clip(
            PlayerState::Neutral.clip_name(),
            AnimationClip::once(vec![FrameRect::new(30, 35, 213, 17)]),
        )
        .with_clip(
            PlayerState::Dash.clip_name(),
            AnimationClip::once(vec![
                FrameRect::new(30, 35, 285, 123),
                FrameRect::new(42, 35, 315, 123),
            ]),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::testing::ready_image;
    use dash_core::input::Direction;

    fn make_player() -> Player {
        let sprite = Sprite::with_image(
            Vec2::new(400.0, 300.0),
            FrameRect::new(40, 35, 212, 17),
            ready_image(PLAYER_IMAGE_PATH),
        );
        Player::new(sprite, megaman_animations())
    }

    fn held(dir: Direction) -> InputState {
        let mut input = InputState::new();
        input.key_down(dir);
        input
    }

    #[test]
    fn starts_neutral() {
        let player = make_player();
        assert_eq!(player.state(), PlayerState::Neutral);
        assert_eq!(player.seq(), 0);
        assert_eq!(player.facing(), Facing::Right);
    }

    #[test]
    fn idle_update_shows_neutral_frame() {
        let mut player = make_player();
        player.update(41.0, &InputState::new());
        assert_eq!(player.state(), PlayerState::Neutral);
        assert_eq!(player.sprite().frame(), FrameRect::new(30, 35, 213, 17));
    }

    #[test]
    fn input_enters_dash_at_seq_zero_then_holds_second_frame() {
        let mut player = make_player();
        let input = held(Direction::Right);

        player.update(41.0, &input);
        assert_eq!(player.state(), PlayerState::Dash);
        assert_eq!(player.seq(), 0);
        assert_eq!(player.sprite().frame(), FrameRect::new(30, 35, 285, 123));

        player.update(41.0, &input);
        assert_eq!(player.state(), PlayerState::Dash);
        assert_eq!(player.seq(), 1);
        assert_eq!(player.sprite().frame(), FrameRect::new(42, 35, 315, 123));

        for _ in 0..10 {
            player.update(41.0, &input);
        }
        assert_eq!(player.seq(), 1);
    }

    #[test]
    fn release_unwinds_then_returns_to_neutral() {
        let mut player = make_player();
        let input = held(Direction::Left);
        player.update(41.0, &input);
        player.update(41.0, &input);
        assert_eq!(player.seq(), 1);

        let released = InputState::new();
        player.update(41.0, &released);
        assert_eq!(player.state(), PlayerState::Dash);
        assert_eq!(player.seq(), 0);
        assert_eq!(player.sprite().frame(), FrameRect::new(30, 35, 285, 123));

        player.update(41.0, &released);
        assert_eq!(player.state(), PlayerState::Neutral);
        assert_eq!(player.sprite().frame(), FrameRect::new(30, 35, 213, 17));
    }

    #[test]
    fn any_direction_and_touch_trigger_dash() {
        for dir in Direction::ALL {
            let mut player = make_player();
            player.update(41.0, &held(dir));
            assert_eq!(player.state(), PlayerState::Dash, "{dir:?}");
        }

        let mut player = make_player();
        let mut touch = InputState::new();
        touch.touch_start();
        player.update(41.0, &touch);
        assert_eq!(player.state(), PlayerState::Dash);
    }

    #[test]
    fn never_jumps_from_neutral_to_second_dash_frame() {
        let mut player = make_player();
        let active = held(Direction::Up);
        let idle = InputState::new();
        let pattern = [true, false, true, true, false, false, false, true, false, true];

        let mut prev_state = player.state();
        for &on in pattern.iter().cycle().take(60) {
            player.update(41.0, if on { &active } else { &idle });
            if prev_state == PlayerState::Neutral {
                assert_eq!(player.seq(), 0);
            }
            if player.state() == PlayerState::Neutral {
                assert_eq!(player.seq(), 0);
            }
            assert!(player.seq() <= MAX_DASH_SEQ);
            prev_state = player.state();
        }
    }

    #[test]
    fn never_moves() {
        let mut player = make_player();
        let mut input = InputState::new();
        for dir in Direction::ALL {
            input.key_down(dir);
        }
        for _ in 0..20 {
            player.update(100.0, &input);
        }
        assert_eq!(player.sprite().position, Vec2::new(400.0, 300.0));
        assert_eq!(player.facing(), Facing::Right);
    }

    #[test]
    #[should_panic(expected = "missing clips: dash")]
    fn missing_dash_clip_panics() {
        let sprite = Sprite::with_image(Vec2::ZERO, FrameRect::new(1, 1, 0, 0), ready_image("x"));
        let animations = AnimationSet::new().with_clip(
            "neutral",
            AnimationClip::once(vec![FrameRect::new(30, 35, 213, 17)]),
        );
        let _ = Player::new(sprite, animations);
    }

    #[test]
    #[should_panic(expected = "dash clip needs 2 frames")]
    fn short_dash_clip_panics() {
        let sprite = Sprite::with_image(Vec2::ZERO, FrameRect::new(1, 1, 0, 0), ready_image("x"));
        let animations = AnimationSet::new()
            .with_clip("neutral", AnimationClip::once(vec![FrameRect::new(1, 1, 0, 0)]))
            .with_clip("dash", AnimationClip::once(vec![FrameRect::new(1, 1, 0, 0)]));
        let _ = Player::new(sprite, animations);
    }
}
