use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use thiserror::Error;

use crate::canvas;
use crate::corner_mask;
use crate::frame;

const SCREENSHOT_PATH: &str = "media/raw_screenshot.png";
const LOGO_PATH: &str = "media/logo.png";
const OUTPUT_PATH: &str = "media/combined_transparent.png";

const SCREENSHOT_RADIUS: u32 = 10;
const LOGO_MAX_SIZE: u32 = 650;
const FINAL_PADDING: u32 = 100;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs the compositing pipeline on in-memory buffers: round the screenshot's
/// corners, frame it on the dark background, scale the logo onto the frame's
/// top-right corner, then trim the result to content plus uniform padding.
pub fn compose(screenshot: &RgbaImage, logo: &RgbaImage) -> RgbaImage {
    let rounded = corner_mask::round_corners(screenshot, SCREENSHOT_RADIUS);
    let framed = frame::build_frame(&rounded);

    let logo_scaled = canvas::scale_to_fit(logo, LOGO_MAX_SIZE, LOGO_MAX_SIZE);
    let assembled = canvas::assemble(&framed, &logo_scaled);

    canvas::trim_to_content(&assembled, FINAL_PADDING)
}

/// Loads the screenshot and logo from their fixed paths, composites them and
/// writes the combined PNG. Returns the output path on success.
pub fn combine() -> Result<PathBuf, ComposeError> {
    let screenshot = image::open(SCREENSHOT_PATH)?.to_rgba8();
    let logo = image::open(LOGO_PATH)?.to_rgba8();
    log::info!(
        "Loaded screenshot {}x{} and logo {}x{}",
        screenshot.width(),
        screenshot.height(),
        logo.width(),
        logo.height()
    );

    let combined = compose(&screenshot, &logo);
    log::info!("Combined canvas is {}x{}", combined.width(), combined.height());

    let output = Path::new(OUTPUT_PATH);
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    combined.save(output)?;

    Ok(output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    // 200x100 screenshot, 100x100 logo:
    //   frame   = 280x180
    //   overlap = 50, 50 (logo already fits in 650x650, no scaling)
    //   canvas  = 730x630, frame at (200, 250), logo at (430, 200)
    //   content = (200, 200) to (529, 429), so 330x230 plus 100px padding
    #[test]
    fn test_compose_output_dimensions() {
        let shot = RgbaImage::from_pixel(200, 100, Rgba([0, 255, 0, 255]));
        let logo = RgbaImage::from_pixel(100, 100, Rgba([255, 0, 0, 255]));

        let out = compose(&shot, &logo);
        assert_eq!(out.dimensions(), (530, 430));
    }

    // A screenshot shorter than twice the frame radius must still frame
    // cleanly: 100x30 gives a 180x110 frame, so the radius-60 corners cap to
    // the frame's half-height.
    #[test]
    fn test_compose_screenshot_smaller_than_frame_radius() {
        let shot = RgbaImage::from_pixel(100, 30, Rgba([0, 255, 0, 255]));
        let logo = RgbaImage::from_pixel(40, 40, Rgba([255, 0, 0, 255]));

        let out = compose(&shot, &logo);

        // canvas 600x530, frame at (200, 220), logo at (360, 200);
        // content spans (200, 200) to (399, 329) plus 100px padding
        assert_eq!(out.dimensions(), (400, 330));
    }

    #[test]
    fn test_compose_sampled_pixels() {
        let shot = RgbaImage::from_pixel(200, 100, Rgba([0, 255, 0, 255]));
        let logo = RgbaImage::from_pixel(100, 100, Rgba([255, 0, 0, 255]));

        let out = compose(&shot, &logo);

        // Inside the screenshot area of the frame
        assert_eq!(*out.get_pixel(265, 215), Rgba([0, 255, 0, 255]));

        // Inside the logo overhang
        assert_eq!(*out.get_pixel(380, 150), Rgba([255, 0, 0, 255]));

        // Frame padding band shows the background color
        assert_eq!(*out.get_pixel(240, 160), Rgba([20, 20, 20, 255]));

        // Final padding ring stays transparent
        assert_eq!(out.get_pixel(0, 0)[3], 0);
        assert_eq!(out.get_pixel(100, 100)[3], 0);
        assert_eq!(out.get_pixel(529, 429)[3], 0);
    }
}
