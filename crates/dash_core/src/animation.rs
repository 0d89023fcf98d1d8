//! Sprite-sheet animation clips and the named clip sets entities animate from.
//!
//! A clip is an ordered, non-empty list of source rectangles on one sprite
//! sheet. Entities own an `AnimationSet` that maps state names ("walking",
//! "neutral", "dash", ...) to clips, and copy the active frame onto their own
//! size/source-rect fields every update.
//!
//! Frame progress for free-running clips is tracked by `StepCounter`, which
//! keeps the count in whole ticks and derives the fractional position from an
//! integer step in tenths, so `floor(step * n)` is exact for any tick count.

use std::collections::HashMap;

/// One frame of a clip: size and top-left corner on the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub w: u32,
    pub h: u32,
    pub sx: u32,
    pub sy: u32,
}

impl FrameRect {
    pub const fn new(w: u32, h: u32, sx: u32, sy: u32) -> Self {
        Self { w, h, sx, sy }
    }
}

/// A named sequence of frames that can loop or play once.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    frames: Vec<FrameRect>,
    looping: bool,
}

impl AnimationClip {
    /// A clip whose frame index wraps around.
    ///
    /// Panics if `frames` is empty.
    pub fn looping(frames: Vec<FrameRect>) -> Self {
        Self::new(frames, true)
    }

    /// A clip whose frame index clamps to the last frame.
    ///
    /// Panics if `frames` is empty.
    pub fn once(frames: Vec<FrameRect>) -> Self {
        Self::new(frames, false)
    }

    fn new(frames: Vec<FrameRect>, looping: bool) -> Self {
        assert!(!frames.is_empty(), "animation clip must have at least one frame");
        Self { frames, looping }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Exact lookup. An out-of-range index is a state machine bug and panics.
    pub fn frame(&self, index: usize) -> FrameRect {
        self.frames[index]
    }

    /// Playback lookup: wraps for looping clips, clamps to the last frame otherwise.
    pub fn frame_at(&self, index: usize) -> FrameRect {
        if self.looping {
            self.frames[index % self.frames.len()]
        } else {
            self.frames[index.min(self.frames.len() - 1)]
        }
    }
}

/// State name -> clip mapping owned by one entity.
#[derive(Debug, Clone, Default)]
pub struct AnimationSet {
    clips: HashMap<String, AnimationClip>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self {
            clips: HashMap::new(),
        }
    }

    pub fn with_clip(mut self, name: impl Into<String>, clip: AnimationClip) -> Self {
        self.insert(name, clip);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, clip: AnimationClip) {
        self.clips.insert(name.into(), clip);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    /// Resolve a clip a state machine depends on.
    ///
    /// Panics when the clip is missing: every state an entity can enter must
    /// have a clip registered before the entity is built.
    pub fn clip(&self, name: &str) -> &AnimationClip {
        match self.clips.get(name) {
            Some(clip) => clip,
            None => panic!("animation set has no clip named '{name}'"),
        }
    }

    /// Fail fast if any of `names` has no clip.
    pub fn require(&self, names: &[&str]) {
        let missing: Vec<&str> = names
            .iter()
            .copied()
            .filter(|name| !self.contains(name))
            .collect();
        assert!(
            missing.is_empty(),
            "animation set is missing clips: {}",
            missing.join(", ")
        );
    }
}

/// Fractional frame counter advanced by a fixed step per tick.
///
/// The step is stored in tenths of a frame; `frame()` returns
/// `floor(ticks * step_tenths / 10)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCounter {
    ticks: u64,
    step_tenths: u64,
}

impl StepCounter {
    pub const fn new(step_tenths: u64) -> Self {
        Self {
            ticks: 0,
            step_tenths,
        }
    }

    pub fn advance(&mut self) {
        self.ticks += 1;
    }

    pub fn frame(&self) -> usize {
        (self.ticks * self.step_tenths / 10) as usize
    }
}
