//! Ordered entity list. Insertion order is update order and back-to-front
//! render order; entities are added once at startup and never removed.

use dash_core::animation::FrameRect;
use dash_core::config::GameConfig;
use dash_core::input::InputState;
use dash_render::Surface;
use glam::Vec2;

use crate::background::Background;
use crate::player::Player;
use crate::sprite::{Drawable, Sprite};
use crate::walker::Walker;

pub const BACKGROUND_IMAGE_PATH: &str = "assets/img/smb-bg.jpg";
const BACKGROUND_FRAME: FrameRect = FrameRect::new(2560, 1600, 0, 0);

/// Met's offset from the canvas centre.
const MET_OFFSET: Vec2 = Vec2::new(7.0, -17.0);

#[derive(Default)]
pub struct Scene {
    entities: Vec<Box<dyn Drawable>>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    pub fn add_entity(&mut self, entity: Box<dyn Drawable>) {
        self.entities.push(entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn update(&mut self, delta_ms: f64, input: &InputState) {
        for entity in &mut self.entities {
            entity.update(delta_ms, input);
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        for entity in &self.entities {
            entity.render(surface);
        }
    }
}

/// Background first, then the player, then the Met in front.
pub fn build_default_scene(config: &GameConfig) -> Scene {
    let (mid_x, mid_y) = config.canvas_mid();
    let mid = Vec2::new(mid_x, mid_y);

    let background = Background::new(
        Sprite::new(Vec2::ZERO, BACKGROUND_FRAME, BACKGROUND_IMAGE_PATH),
        (config.canvas_width, config.canvas_height),
        config.background_scroll_rate,
    );
    let player = Player::megaman(mid);
    let met = Walker::met(mid + MET_OFFSET);
    background.sprite().log_state();
    player.sprite().log_state();
    met.sprite().log_state();

    let mut scene = Scene::new();
    scene.add_entity(Box::new(background));
    scene.add_entity(Box::new(player));
    scene.add_entity(Box::new(met));
    log::info!("Scene initialized with {} entities", scene.len());
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::testing::{ready_image, RecordingSurface};
    use dash_render::ImageResource;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sprite_at(path: &str, x: f32) -> Sprite {
        Sprite::with_image(Vec2::new(x, 0.0), FrameRect::new(1, 1, 0, 0), ready_image(path))
    }

    /// Logs its own name on update.
    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Drawable for Probe {
        fn update(&mut self, _delta_ms: f64, _input: &InputState) {
            self.log.borrow_mut().push(self.name);
        }
    }

    #[test]
    fn renders_in_insertion_order() {
        let mut scene = Scene::new();
        scene.add_entity(Box::new(sprite_at("c.png", 0.0)));
        scene.add_entity(Box::new(sprite_at("a.png", 1.0)));
        scene.add_entity(Box::new(sprite_at("b.png", 2.0)));

        let mut surface = RecordingSurface::default();
        scene.update(41.0, &InputState::new());
        scene.render(&mut surface);
        assert_eq!(surface.paths(), vec!["c.png", "a.png", "b.png"]);
    }

    #[test]
    fn updates_in_insertion_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scene = Scene::new();
        for name in ["first", "second", "third"] {
            scene.add_entity(Box::new(Probe {
                name,
                log: Rc::clone(&log),
            }));
        }
        scene.update(41.0, &InputState::new());
        scene.update(41.0, &InputState::new());
        assert_eq!(
            *log.borrow(),
            vec!["first", "second", "third", "first", "second", "third"]
        );
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut scene = Scene::new();
        let sprite = sprite_at("dup.png", 0.0);
        scene.add_entity(Box::new(sprite.clone()));
        scene.add_entity(Box::new(sprite));
        assert_eq!(scene.len(), 2);

        let mut surface = RecordingSurface::default();
        scene.render(&mut surface);
        assert_eq!(surface.paths(), vec!["dup.png", "dup.png"]);
    }

    #[test]
    fn unready_entities_are_skipped_without_breaking_order() {
        let (pending, signal) = ImageResource::pending("late.png");
        let mut scene = Scene::new();
        scene.add_entity(Box::new(sprite_at("bg.png", 0.0)));
        scene.add_entity(Box::new(Sprite::with_image(
            Vec2::ZERO,
            FrameRect::new(1, 1, 0, 0),
            pending,
        )));
        scene.add_entity(Box::new(sprite_at("front.png", 0.0)));

        let mut surface = RecordingSurface::default();
        scene.render(&mut surface);
        assert_eq!(surface.paths(), vec!["bg.png", "front.png"]);

        signal.complete(image::RgbaImage::new(1, 1));
        let mut surface = RecordingSurface::default();
        scene.render(&mut surface);
        assert_eq!(surface.paths(), vec!["bg.png", "late.png", "front.png"]);
    }

    #[test]
    fn default_scene_has_background_player_and_met() {
        let scene = build_default_scene(&GameConfig::default());
        assert_eq!(scene.len(), 3);
        assert!(!scene.is_empty());
    }
}
