use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use image_top_colors_wasm::{ColorFormat, ExtractOptions, FileLoader, extract_colors};

/// Print the most frequent colors of one or more images.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Number of colors to print per image [default: 5]
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    count: Option<i64>,

    /// Output representation: rgb, hex or hsl [default: rgb]
    #[arg(short, long)]
    format: Option<ColorFormat>,

    /// JSON file with `number_of_colors` and `format`; flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print one JSON object per image instead of one color per line
    #[arg(long)]
    json: bool,
}

fn load_options(args: &Args) -> Result<ExtractOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => ExtractOptions::default(),
    };
    if let Some(count) = args.count {
        options.number_of_colors = count;
    }
    if let Some(format) = args.format {
        options.format = format;
    }
    options.validate()?;
    Ok(options)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let options = load_options(&args)?;
    log::debug!("extracting with {options:?}");

    for input in &args.inputs {
        let colors = extract_colors(&FileLoader, input.as_path(), options)
            .await
            .with_context(|| format!("color extraction failed for {}", input.display()))?;

        if args.json {
            let line = serde_json::json!({ "input": input, "colors": colors });
            println!("{line}");
        } else {
            println!("{}:", input.display());
            for color in &colors {
                println!("  {color}");
            }
        }
    }

    Ok(())
}
