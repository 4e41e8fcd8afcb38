//! Image acquisition: turning a source into a [`PixelBuffer`].
//!
//! The pipeline only knows the [`ImageLoader`] trait. Loading is the one step that
//! may suspend; everything after it runs synchronously.

use std::future::Future;

use crate::buffer::PixelBuffer;
use crate::{ColorError, Result};

/// Resolves an image source into decoded RGBA pixels.
///
/// Implementations decide what a source is (a path, encoded bytes, a handle into a
/// host environment) and report every failure as [`ColorError::Acquisition`].
pub trait ImageLoader {
    type Source: ?Sized;

    fn load(&self, source: &Self::Source) -> impl Future<Output = Result<PixelBuffer>> + Send;
}

/// Decode an encoded image (PNG, JPEG, GIF, ...) held in memory.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| ColorError::acquisition("unable to decode image", e))?;
    Ok(PixelBuffer::from_image(&img))
}

/// Loads images from encoded bytes already in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesLoader;

impl ImageLoader for BytesLoader {
    type Source = [u8];

    async fn load(&self, bytes: &[u8]) -> Result<PixelBuffer> {
        decode(bytes)
    }
}

/// Loads images from the filesystem. Decoding runs on tokio's blocking pool.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

#[cfg(not(target_arch = "wasm32"))]
impl ImageLoader for FileLoader {
    type Source = std::path::Path;

    async fn load(&self, path: &std::path::Path) -> Result<PixelBuffer> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ColorError::acquisition(format!("could not read {}", path.display()), e))?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());

        tokio::task::spawn_blocking(move || decode(&bytes))
            .await
            .map_err(|e| ColorError::acquisition("decode task did not complete", e))?
    }
}
