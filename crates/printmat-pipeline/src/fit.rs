// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Aspect-preserving fit-with-padding into an exact pixel box.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use printmat_core::{Color, PixelBox};
use tracing::{debug, instrument};

/// Scale `src` to the largest size that fits inside `target` while keeping
/// its aspect ratio, then centre it on a `target`-sized canvas filled with
/// `pad`.
///
/// The scale factor is unbounded in both directions: a small source is
/// enlarged and a large one reduced. Resampling uses Lanczos3. Output
/// dimensions always equal `target` exactly, and the full source content
/// stays visible — padding absorbs the leftover area, with any odd pixel of
/// it landing on the right/bottom edge.
#[instrument(skip(src), fields(src_w = src.width(), src_h = src.height(), target_w = target.width_px, target_h = target.height_px))]
pub fn fit_into_box(src: &RgbImage, target: PixelBox, pad: Color) -> RgbImage {
    let (src_w, src_h) = src.dimensions();
    let scale = f64::min(
        target.width_px as f64 / src_w as f64,
        target.height_px as f64 / src_h as f64,
    );
    let new_w = ((src_w as f64 * scale).round() as u32).max(1);
    let new_h = ((src_h as f64 * scale).round() as u32).max(1);

    // Skip the resample when the source already matches, so refitting an
    // already-fitted image is byte-stable.
    let resized = if (new_w, new_h) == (src_w, src_h) {
        src.clone()
    } else {
        imageops::resize(src, new_w, new_h, FilterType::Lanczos3)
    };
    debug!(new_w, new_h, scale, "Source scaled");

    let mut canvas = RgbImage::from_pixel(
        target.width_px,
        target.height_px,
        Rgb(pad.channels()),
    );
    // new_w <= target width and new_h <= target height by construction, so
    // both offsets are non-negative; integer division biases the remainder
    // pixel of padding to the right/bottom edge.
    let off_x = (target.width_px - new_w) / 2;
    let off_y = (target.height_px - new_h) / 2;
    imageops::replace(&mut canvas, &resized, off_x as i64, off_y as i64);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0);
    const BLUE: Color = Color::new(0, 0, 255);

    fn boxed(width_px: u32, height_px: u32) -> PixelBox {
        PixelBox {
            width_px,
            height_px,
        }
    }

    #[test]
    fn output_always_matches_target_box() {
        let cases = [
            (100u32, 50u32, boxed(2362, 1181)), // downscale-free aspect match
            (4000, 3000, boxed(200, 200)),      // reduction
            (10, 10, boxed(500, 300)),          // enlargement
            (1, 1, boxed(7, 13)),               // degenerate source
        ];
        for (src_w, src_h, target) in cases {
            let src = RgbImage::from_pixel(src_w, src_h, Rgb([128, 128, 128]));
            let out = fit_into_box(&src, target, Color::BLACK);
            assert_eq!(out.dimensions(), (target.width_px, target.height_px));
        }
    }

    #[test]
    fn centering_offsets_use_floor_division() {
        // Square content in a 101-wide box: offset 25, so 25 px of padding
        // on the left and 26 on the right.
        let src = RgbImage::from_pixel(50, 50, Rgb(RED.channels()));
        let out = fit_into_box(&src, boxed(101, 50), BLUE);

        assert_eq!(*out.get_pixel(24, 25), Rgb(BLUE.channels()));
        assert_eq!(*out.get_pixel(25, 25), Rgb(RED.channels()));
        assert_eq!(*out.get_pixel(74, 25), Rgb(RED.channels()));
        assert_eq!(*out.get_pixel(75, 25), Rgb(BLUE.channels()));
    }

    #[test]
    fn padding_fills_the_short_axis() {
        // 2:1 source into a square box: content spans the width, padding
        // bands appear above and below.
        let src = RgbImage::from_pixel(100, 50, Rgb(RED.channels()));
        let out = fit_into_box(&src, boxed(100, 100), BLUE);

        assert_eq!(*out.get_pixel(50, 0), Rgb(BLUE.channels()));
        assert_eq!(*out.get_pixel(50, 50), Rgb(RED.channels()));
        assert_eq!(*out.get_pixel(50, 99), Rgb(BLUE.channels()));
    }

    #[test]
    fn refit_with_same_box_is_identical() {
        let mut src = RgbImage::from_pixel(80, 40, Rgb([200, 10, 10]));
        // Non-uniform content so a resample would show.
        src.put_pixel(3, 7, Rgb([0, 255, 0]));
        let target = boxed(120, 90);

        let fitted = fit_into_box(&src, target, BLUE);
        let refitted = fit_into_box(&fitted, target, RED);

        assert_eq!(fitted.dimensions(), refitted.dimensions());
        // Scale is 1 and no padding is added, so the pad color is irrelevant
        // and the content is untouched.
        assert_eq!(fitted.as_raw(), refitted.as_raw());
    }

    #[test]
    fn degenerate_source_is_never_cropped() {
        let src = RgbImage::from_pixel(1, 1, Rgb(RED.channels()));
        let out = fit_into_box(&src, boxed(9, 3), BLUE);
        assert_eq!(out.dimensions(), (9, 3));
        // 1x1 scales to 3x3; centred horizontally at offset 3.
        assert_eq!(*out.get_pixel(4, 1), Rgb(RED.channels()));
        assert_eq!(*out.get_pixel(0, 1), Rgb(BLUE.channels()));
    }
}
