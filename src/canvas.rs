use image::{imageops, imageops::FilterType, RgbaImage};

// Working margin around the assembled content; anything unused is trimmed
// away again by `trim_to_content`.
const CANVAS_PADDING: u32 = 200;

/// Scales the image down to fit within `max_w` x `max_h`, preserving aspect
/// ratio. Images that already fit are returned unchanged, never upscaled.
pub fn scale_to_fit(img: &RgbaImage, max_w: u32, max_h: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    if w <= max_w && h <= max_h {
        return img.clone();
    }

    let ratio = (max_w as f64 / w as f64).min(max_h as f64 / h as f64);
    let new_w = ((w as f64 * ratio).round() as u32).max(1);
    let new_h = ((h as f64 * ratio).round() as u32).max(1);

    log::debug!("Scaling {}x{} -> {}x{}", w, h, new_w, new_h);
    imageops::resize(img, new_w, new_h, FilterType::Lanczos3)
}

/// Assembles the working canvas: the frame sits inside the working margin,
/// pushed down by half the logo's height, and the logo straddles the frame's
/// top-right corner with half of it hanging outside.
pub fn assemble(frame: &RgbaImage, logo: &RgbaImage) -> RgbaImage {
    let overlap_x = logo.width() / 2;
    let overlap_y = logo.height() / 2;

    let total_w = frame.width() + overlap_x + CANVAS_PADDING * 2;
    let total_h = frame.height() + overlap_y + CANVAS_PADDING * 2;
    let mut canvas = RgbaImage::new(total_w, total_h);

    let frame_x = CANVAS_PADDING as i64;
    let frame_y = (CANVAS_PADDING + overlap_y) as i64;
    imageops::overlay(&mut canvas, frame, frame_x, frame_y);

    // Top right of the frame, shifted so the logo's center sits on the corner
    let logo_x = frame_x + frame.width() as i64 - overlap_x as i64;
    let logo_y = frame_y - overlap_y as i64;
    imageops::overlay(&mut canvas, logo, logo_x, logo_y);

    canvas
}

/// Bounding box `(x, y, width, height)` of all pixels with non-zero alpha,
/// or `None` for a fully transparent image.
pub fn content_bounds(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    let mut found = false;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] > 0 {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
            found = true;
        }
    }

    if found {
        Some((min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    } else {
        None
    }
}

/// Crops the canvas to its content bounds and re-centers the crop on a
/// transparent canvas `padding` pixels larger on every side. A fully
/// transparent canvas has no content to trim to and is returned unchanged.
pub fn trim_to_content(canvas: &RgbaImage, padding: u32) -> RgbaImage {
    let Some((x, y, w, h)) = content_bounds(canvas) else {
        log::warn!("Canvas is fully transparent, skipping trim");
        return canvas.clone();
    };

    let cropped = imageops::crop_imm(canvas, x, y, w, h).to_image();
    let mut padded = RgbaImage::new(w + padding * 2, h + padding * 2);
    imageops::overlay(&mut padded, &cropped, padding as i64, padding as i64);

    log::debug!("Trimmed {}x{} canvas to content {}x{} plus {}px padding", canvas.width(), canvas.height(), w, h, padding);
    padded
}
