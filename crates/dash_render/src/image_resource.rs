//! Image resources that become drawable asynchronously.
//!
//! `ImageResource::load` returns immediately and decodes the file on a
//! background thread. The decoded pixels land in a write-once cell shared
//! between the resource and its `ReadySignal`: the loader is the only writer,
//! the tick loop only reads, and once set the cell can never be cleared, so
//! readiness is monotonic without any locking on the read side.
//!
//! A failed read or decode is logged and leaves the resource not-ready for
//! the rest of the session. Nothing retries.

use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use std::thread;

use image::RgbaImage;

/// Path value meaning "this sprite has no image".
pub const NO_IMAGE: &str = "none";

#[derive(Debug, Clone)]
pub struct ImageResource {
    path: String,
    pixels: Arc<OnceLock<RgbaImage>>,
}

/// One-shot completion handle for an `ImageResource`.
#[derive(Debug, Clone)]
pub struct ReadySignal {
    path: String,
    pixels: Arc<OnceLock<RgbaImage>>,
}

impl ImageResource {
    /// A resource that stays not-ready until its signal is completed.
    pub fn pending(path: impl Into<String>) -> (Self, ReadySignal) {
        let path = path.into();
        let pixels = Arc::new(OnceLock::new());
        let signal = ReadySignal {
            path: path.clone(),
            pixels: Arc::clone(&pixels),
        };
        (Self { path, pixels }, signal)
    }

    /// A resource that is ready from the start.
    pub fn from_image(path: impl Into<String>, image: RgbaImage) -> Self {
        let (resource, signal) = Self::pending(path);
        signal.complete(image);
        resource
    }

    /// Start loading `path` in the background. `"none"` never loads.
    pub fn load(path: &str) -> Self {
        let (resource, signal) = Self::pending(path);
        if path == NO_IMAGE {
            return resource;
        }

        let spawned = thread::Builder::new()
            .name(format!("image-load {path}"))
            .spawn(move || match decode_image_file(Path::new(&signal.path)) {
                Ok(image) => {
                    signal.complete(image);
                }
                Err(err) => {
                    log::warn!("{err}. Sprite will not be drawn.");
                }
            });
        if let Err(err) = spawned {
            log::warn!("Failed to start image loader for '{}': {err}", path);
        }
        resource
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_ready(&self) -> bool {
        self.pixels.get().is_some()
    }

    pub fn pixels(&self) -> Option<&RgbaImage> {
        self.pixels.get()
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.pixels.get().map(|img| img.dimensions())
    }
}

impl ReadySignal {
    /// Mark the resource ready with `image`.
    ///
    /// Returns false if the resource was already ready; the first image wins.
    pub fn complete(&self, image: RgbaImage) -> bool {
        let (w, h) = image.dimensions();
        match self.pixels.set(image) {
            Ok(()) => {
                log::debug!("Image '{}' ready ({}x{})", self.path, w, h);
                true
            }
            Err(_) => {
                log::debug!("Image '{}' already ready, ignoring repeat completion", self.path);
                false
            }
        }
    }
}

/// Read and decode an image file into RGBA8.
pub fn decode_image_file(path: &Path) -> Result<RgbaImage, String> {
    let bytes = fs::read(path)
        .map_err(|e| format!("Failed to read image {}: {e}", path.display()))?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| format!("Failed to decode image {}: {e}", path.display()))?;
    Ok(decoded.to_rgba8())
}
