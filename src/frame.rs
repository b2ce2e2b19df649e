use image::{imageops, Rgba, RgbaImage};

use crate::corner_mask;

// Background color sampled from the screenshot's window chrome
const BACKGROUND: Rgba<u8> = Rgba([20, 20, 20, 255]);

const PADDING_X: u32 = 40;
const PADDING_TOP: u32 = 40;
const PADDING_BOTTOM: u32 = 40; // Kept equal to the top so the chin stays small

const FRAME_RADIUS: u32 = 60;

/// Builds the decorative frame: a dark rounded-rectangle background sized to
/// the screenshot plus balanced padding, with the (already corner-rounded)
/// screenshot composited onto it.
pub fn build_frame(screenshot: &RgbaImage) -> RgbaImage {
    let (shot_w, shot_h) = screenshot.dimensions();
    let frame_w = shot_w + PADDING_X * 2;
    let frame_h = shot_h + PADDING_TOP + PADDING_BOTTOM;

    let mut frame = corner_mask::rounded_rect_sheet(frame_w, frame_h, FRAME_RADIUS, BACKGROUND);
    imageops::overlay(&mut frame, screenshot, PADDING_X as i64, PADDING_TOP as i64);

    log::debug!("Frame built: {}x{} around {}x{} screenshot", frame_w, frame_h, shot_w, shot_h);
    frame
}
