//! The extraction pipeline: acquire → count → rank → render.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::color::{Color, ColorFormat};
use crate::frequency::{FrequencyTable, requested_count};
use crate::loader::{self, ImageLoader};
use crate::{ColorError, Result};

pub const DEFAULT_NUMBER_OF_COLORS: i64 = 5;

/// How many colors to return and how to render them.
///
/// Deserializes from e.g. `{"number_of_colors": 3, "format": "hex"}`; missing
/// fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub number_of_colors: i64,
    pub format: ColorFormat,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            number_of_colors: DEFAULT_NUMBER_OF_COLORS,
            format: ColorFormat::default(),
        }
    }
}

impl ExtractOptions {
    pub fn new(number_of_colors: i64, format: ColorFormat) -> Self {
        Self {
            number_of_colors,
            format,
        }
    }

    /// Check the options and return the color count as `usize`.
    pub fn validate(&self) -> Result<usize> {
        requested_count(self.number_of_colors)
    }
}

/// Count, rank and render the `count` most frequent colors of a decoded buffer.
///
/// This is the synchronous tail of [`extract_colors`]. An empty buffer yields an
/// empty list.
pub fn top_colors(buffer: &PixelBuffer, count: usize, format: ColorFormat) -> Vec<Color> {
    let table = FrequencyTable::from_buffer(buffer);
    let selected = table.top(count);
    debug!(
        "{}x{} image: {} pixels, {} distinct colors, {} selected",
        buffer.width(),
        buffer.height(),
        buffer.pixel_count(),
        table.len(),
        selected.len()
    );
    selected.into_iter().map(|rgb| format.render(rgb)).collect()
}

/// Extract the most frequent colors of the image behind `source`.
///
/// Options are validated before the loader is called. Any loader failure rejects
/// the whole call as [`ColorError::Acquisition`]; no partial list is returned.
pub async fn extract_colors<L>(loader: &L, source: &L::Source, options: ExtractOptions) -> Result<Vec<Color>>
where
    L: ImageLoader,
{
    let count = options.validate()?;
    let buffer = loader.load(source).await.map_err(|err| {
        if err.is_acquisition() {
            err
        } else {
            ColorError::acquisition("image loader failed", err)
        }
    })?;
    Ok(top_colors(&buffer, count, options.format))
}

/// Blocking variant of [`extract_colors`] for encoded bytes already in memory.
pub fn extract_colors_from_bytes(bytes: &[u8], options: ExtractOptions) -> Result<Vec<Color>> {
    let count = options.validate()?;
    let buffer = loader::decode(bytes)?;
    Ok(top_colors(&buffer, count, options.format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves a fixed buffer and counts how often it was asked to.
    struct FixedLoader {
        buffer: Result<PixelBuffer>,
        calls: AtomicUsize,
    }

    impl FixedLoader {
        fn ok(buffer: PixelBuffer) -> Self {
            Self { buffer: Ok(buffer), calls: AtomicUsize::new(0) }
        }

        fn failing(err: ColorError) -> Self {
            Self { buffer: Err(err), calls: AtomicUsize::new(0) }
        }
    }

    impl ImageLoader for FixedLoader {
        type Source = str;

        async fn load(&self, _source: &str) -> Result<PixelBuffer> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.buffer {
                Ok(buffer) => Ok(buffer.clone()),
                Err(ColorError::InvalidArgument { parameter, value }) => {
                    Err(ColorError::invalid_argument(*parameter, value))
                }
                Err(err) => Err(ColorError::acquisition_message(err.to_string())),
            }
        }
    }

    fn row(colors: &[[u8; 4]]) -> PixelBuffer {
        PixelBuffer::from_raw(colors.len() as u32, 1, colors.concat()).unwrap()
    }

    #[test]
    fn defaults_are_five_rgb() {
        let options = ExtractOptions::default();
        assert_eq!(options.number_of_colors, 5);
        assert_eq!(options.format, ColorFormat::Rgb);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: ExtractOptions = serde_json::from_str(r#"{"format": "hsl"}"#).unwrap();
        assert_eq!(options, ExtractOptions::new(5, ColorFormat::Hsl));
        assert!(serde_json::from_str::<ExtractOptions>(r#"{"format": "cmyk"}"#).is_err());
    }

    #[test]
    fn top_colors_renders_in_requested_format() {
        let buffer = row(&[[255, 0, 0, 255], [0, 0, 255, 255], [255, 0, 0, 10]]);
        let hex: Vec<String> = top_colors(&buffer, 5, ColorFormat::Hex)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(hex, vec!["#ff0000", "#0000ff"]);
        assert_eq!(
            top_colors(&buffer, 1, ColorFormat::Rgb),
            vec![Color::Rgb(Rgb::new(255, 0, 0))]
        );
    }

    #[tokio::test]
    async fn invalid_count_fails_before_loading() {
        let loader = FixedLoader::ok(row(&[[1, 2, 3, 255]]));
        let err = extract_colors(&loader, "img", ExtractOptions::new(-1, ColorFormat::Rgb))
            .await
            .unwrap_err();
        assert!(matches!(err, ColorError::InvalidArgument { .. }));
        assert_eq!(loader.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn loader_failure_rejects_whole_call() {
        let loader = FixedLoader::failing(ColorError::acquisition_message("Failed to load the image."));
        let err = extract_colors(&loader, "img", ExtractOptions::default()).await.unwrap_err();
        assert!(err.is_acquisition());
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn non_acquisition_loader_error_is_reported_as_acquisition() {
        let loader = FixedLoader::failing(ColorError::invalid_argument("source", "img"));
        let err = extract_colors(&loader, "img", ExtractOptions::default()).await.unwrap_err();
        assert!(err.is_acquisition());
    }

    #[tokio::test]
    async fn empty_image_is_not_an_error() {
        let loader = FixedLoader::ok(PixelBuffer::from_raw(0, 0, Vec::new()).unwrap());
        let colors = extract_colors(&loader, "img", ExtractOptions::default()).await.unwrap();
        assert!(colors.is_empty());
    }

    #[tokio::test]
    async fn zero_colors_requested_gives_empty_list() {
        let loader = FixedLoader::ok(row(&[[1, 2, 3, 255], [4, 5, 6, 255]]));
        let colors = extract_colors(&loader, "img", ExtractOptions::new(0, ColorFormat::Hex))
            .await
            .unwrap();
        assert!(colors.is_empty());
    }

    #[test]
    fn bytes_path_validates_before_decoding() {
        let err = extract_colors_from_bytes(b"garbage", ExtractOptions::new(-2, ColorFormat::Rgb)).unwrap_err();
        assert!(matches!(err, ColorError::InvalidArgument { .. }));

        let err = extract_colors_from_bytes(b"garbage", ExtractOptions::default()).unwrap_err();
        assert!(err.is_acquisition());
    }
}
