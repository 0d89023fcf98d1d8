pub mod background;
pub mod driver;
pub mod player;
pub mod scene;
pub mod sprite;
pub mod walker;
