use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rgb565_codec::{ConvertOptions, OUTPUT_DATA_SIZE, OUTPUT_HEIGHT, OUTPUT_WIDTH};
use std::path::{Path, PathBuf};

pub fn convert(input: &Path, output: Option<PathBuf>, options: &ConvertOptions) -> Result<()> {
    println!("Loading image: {:?}", input);
    let img = rgb565_codec::load_image(input)
        .with_context(|| format!("Failed to load image: {:?}", input))?;
    println!(
        "Source image: {}x{} -> {}x{}",
        img.width(),
        img.height(),
        OUTPUT_WIDTH,
        OUTPUT_HEIGHT
    );

    let pb = ProgressBar::new(1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message("Converting...");

    let conversion = rgb565_codec::convert(&img, options)?;

    pb.finish_with_message("Conversion completed!");

    let output = output.unwrap_or_else(|| default_output_path(input));
    rgb565_codec::write_output(&output, &conversion.text)
        .with_context(|| format!("Failed to save output: {:?}", output))?;
    info!("saved {} bytes of source text", conversion.text.len());

    println!("✅ RGB565 C-array saved!");
    println!("  File: {:?}", output);
    println!("  Array: {}", options.array_name());
    println!("  Image: {}x{} pixels", OUTPUT_WIDTH, OUTPUT_HEIGHT);
    println!("  Size: {} bytes", conversion.data.len());
    Ok(())
}

pub fn info(input: &Path) -> Result<()> {
    let img = rgb565_codec::load_image(input)
        .with_context(|| format!("Failed to load image: {:?}", input))?;

    println!("Image Information:");
    println!("  File: {:?}", input);
    println!("  Dimensions: {}x{} pixels", img.width(), img.height());
    println!("  Output: {}x{} pixels", OUTPUT_WIDTH, OUTPUT_HEIGHT);
    println!("  Output size: {} bytes", OUTPUT_DATA_SIZE);
    Ok(())
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{stem}_rgb565.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/pics/logo.png")),
            PathBuf::from("/pics/logo_rgb565.txt")
        );
        assert_eq!(
            default_output_path(Path::new("photo.jpeg")),
            PathBuf::from("photo_rgb565.txt")
        );
    }
}
