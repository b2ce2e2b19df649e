use image::{GrayImage, Luma, Rgba, RgbaImage};

/// Coverage of the pixel at (x, y) for a filled rounded rectangle spanning
/// the whole `width` x `height` area. 1.0 inside, 0.0 outside, with a 1px
/// ramp along the curved corner edge. Pixels are sampled at their centers.
fn coverage(x: u32, y: u32, width: u32, height: u32, radius: u32) -> f32 {
    if radius == 0 {
        return 1.0;
    }

    // A radius larger than half a dimension degenerates to a capsule; cap it
    // so the clamp bounds below stay ordered.
    let r = (radius as f32)
        .min(width as f32 / 2.0)
        .min(height as f32 / 2.0);
    let px = x as f32 + 0.5;
    let py = y as f32 + 0.5;

    // Nearest point on the inner rectangle whose corners are the circle
    // centers. Outside the corner regions this is the pixel itself, so the
    // distance is zero and the straight edges stay fully opaque.
    let cx = px.clamp(r, width as f32 - r);
    let cy = py.clamp(r, height as f32 - r);
    let dist = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();

    (r - dist + 0.5).clamp(0.0, 1.0)
}

/// Grayscale mask of a filled rounded rectangle covering the whole image,
/// 255 inside and 0 outside the rounded corners.
pub fn rounded_rect_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        Luma([(coverage(x, y, width, height, radius) * 255.0).round() as u8])
    })
}

/// Installs the mask as the image's alpha channel, replacing whatever alpha
/// was there. Both buffers must have the same dimensions.
pub fn apply_alpha_mask(img: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(img.dimensions(), mask.dimensions());

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        pixel[3] = mask.get_pixel(x, y)[0];
    }
}

/// Returns a copy of the image with its corners rounded to `radius`.
pub fn round_corners(img: &RgbaImage, radius: u32) -> RgbaImage {
    let mask = rounded_rect_mask(img.width(), img.height(), radius);
    let mut rounded = img.clone();
    apply_alpha_mask(&mut rounded, &mask);
    rounded
}

/// Solid rounded-rectangle sheet: `color` everywhere inside the rounded
/// rectangle, transparent outside. Used for the frame background.
pub fn rounded_rect_sheet(width: u32, height: u32, radius: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let alpha = color[3] as f32 * coverage(x, y, width, height, radius);
        Rgba([color[0], color[1], color[2], alpha.round() as u8])
    })
}
