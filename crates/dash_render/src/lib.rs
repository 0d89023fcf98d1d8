pub mod canvas;
pub mod gpu_context;
pub mod image_resource;
pub mod present;
pub mod surface;
pub mod vertex;

pub use canvas::Canvas;
pub use gpu_context::GpuContext;
pub use image_resource::{ImageResource, ReadySignal, NO_IMAGE};
pub use present::FramePresenter;
pub use surface::{DestRect, PixelRect, Surface};
pub use vertex::PresentVertex;
