//! # Image top colors
//!
//! Extract the N most frequent colors of an image and return them as RGB
//! triplets, `#rrggbb` strings or HSL triplets.
//!
//! Steps performed by [`extract_colors`]:
//! 1. Ask an [`ImageLoader`] for the decoded RGBA pixels (the only async step).
//! 2. Count every distinct RGB triplet, ignoring alpha.
//! 3. Sort by descending count, keeping first-seen order on ties, and keep N.
//! 4. Render each color in the requested [`ColorFormat`].
//!
//! ```rust,no_run
//! use image_top_colors_wasm::{extract_colors, ColorFormat, ExtractOptions, FileLoader};
//! use std::path::Path;
//!
//! # async fn run() -> image_top_colors_wasm::Result<()> {
//! let options = ExtractOptions::new(3, ColorFormat::Hex);
//! let colors = extract_colors(&FileLoader, Path::new("photo.png"), options).await?;
//! for color in colors {
//!     println!("{color}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod buffer;
pub mod color;
pub mod error;
pub mod frequency;
pub mod loader;
pub mod pipeline;
pub mod wasm;

pub use buffer::PixelBuffer;
pub use color::{Color, ColorFormat, Hex, Hsl, Rgb, rgb_to_hex, rgb_to_hsl};
pub use error::{ColorError, Result};
pub use frequency::{ColorCount, FrequencyTable, select_top};
#[cfg(not(target_arch = "wasm32"))]
pub use loader::FileLoader;
pub use loader::{BytesLoader, ImageLoader};
pub use pipeline::{DEFAULT_NUMBER_OF_COLORS, ExtractOptions, extract_colors, extract_colors_from_bytes, top_colors};
