//! JavaScript bindings.
//!
//! The host page decodes nothing itself: it hands over the encoded file bytes
//! (e.g. from `fetch(...).arrayBuffer()`) and gets plain arrays back.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::color::{Color, ColorFormat, Rgb};
use crate::pipeline::{DEFAULT_NUMBER_OF_COLORS, ExtractOptions, extract_colors_from_bytes};
use crate::ColorError;

fn to_js(err: ColorError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Apply the JS-side defaults (`5`, `"rgb"`) and validate.
fn options_from_js(number_of_colors: Option<i32>, color_format: Option<&str>) -> crate::Result<ExtractOptions> {
    let format = match color_format {
        Some(name) => name.parse()?,
        None => ColorFormat::default(),
    };
    let number_of_colors = number_of_colors.map_or(DEFAULT_NUMBER_OF_COLORS, i64::from);
    let options = ExtractOptions::new(number_of_colors, format);
    options.validate()?;
    Ok(options)
}

fn triplet(values: [u16; 3]) -> Array {
    let arr = Array::new();
    for v in values {
        arr.push(&JsValue::from_f64(f64::from(v)));
    }
    arr
}

fn color_to_js(color: &Color) -> JsValue {
    match color {
        Color::Rgb(rgb) => triplet([rgb.red.into(), rgb.green.into(), rgb.blue.into()]).into(),
        Color::Hex(hex) => JsValue::from_str(hex.as_str()),
        Color::Hsl(hsl) => triplet((*hsl).into()).into(),
    }
}

/// Return the `numberOfColors` most frequent colors of an encoded image.
///
/// `colorFormat` is one of `"rgb"` (`[r, g, b]`), `"hex"` (`"#rrggbb"`) or
/// `"hsl"` (`[h, s, l]`).
#[wasm_bindgen(js_name = getColors)]
pub fn get_colors(
    input: Vec<u8>,
    number_of_colors: Option<i32>,
    color_format: Option<String>,
) -> Result<Array, JsValue> {
    let options = options_from_js(number_of_colors, color_format.as_deref()).map_err(to_js)?;
    let colors = extract_colors_from_bytes(&input, options).map_err(to_js)?;

    let out = Array::new();
    for color in &colors {
        out.push(&color_to_js(color));
    }
    Ok(out)
}

#[wasm_bindgen(js_name = rgbToHex)]
pub fn rgb_to_hex(red: i32, green: i32, blue: i32) -> Result<String, JsValue> {
    let rgb = Rgb::from_components(red.into(), green.into(), blue.into()).map_err(to_js)?;
    Ok(rgb.to_hex().into_string())
}

#[wasm_bindgen(js_name = rgbToHsl)]
pub fn rgb_to_hsl(red: i32, green: i32, blue: i32) -> Result<Array, JsValue> {
    let rgb = Rgb::from_components(red.into(), green.into(), blue.into()).map_err(to_js)?;
    Ok(triplet(rgb.to_hsl().into()))
}
