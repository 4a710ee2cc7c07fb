// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page composition — centre a fitted image on a white sheet canvas.

use image::imageops;
use image::{Rgb, RgbImage};
use printmat_core::{Color, PixelBox};
use tracing::{debug, instrument, warn};

/// Centre `fitted` on a `page`-sized canvas filled with pure white,
/// independent of the fit padding color.
///
/// Offsets use the same floor-division arithmetic as the fitter. Content
/// larger than the page is neither clipped ahead of time nor rescaled: the
/// negative offsets are handed to the paste as-is, which draws the part of
/// the image that overlaps the canvas. Overflow is accepted behavior, not
/// an error.
#[instrument(skip(fitted), fields(fitted_w = fitted.width(), fitted_h = fitted.height(), page_w = page.width_px, page_h = page.height_px))]
pub fn center_on_page(fitted: &RgbImage, page: PixelBox) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(
        page.width_px,
        page.height_px,
        Rgb(Color::WHITE.channels()),
    );

    // Floor division, not truncation, so oversized content keeps the same
    // right/bottom remainder bias as the non-overflowing case.
    let off_x = (page.width_px as i64 - fitted.width() as i64).div_euclid(2);
    let off_y = (page.height_px as i64 - fitted.height() as i64).div_euclid(2);
    if off_x < 0 || off_y < 0 {
        warn!(off_x, off_y, "Content exceeds the page canvas; overflow will be cut off");
    }
    debug!(off_x, off_y, "Composing page");

    imageops::replace(&mut canvas, fitted, off_x, off_y);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 3] = [255, 0, 0];
    const WHITE: [u8; 3] = [255, 255, 255];

    fn page(width_px: u32, height_px: u32) -> PixelBox {
        PixelBox {
            width_px,
            height_px,
        }
    }

    #[test]
    fn content_is_centered_on_white() {
        let fitted = RgbImage::from_pixel(50, 50, Rgb(RED));
        let out = center_on_page(&fitted, page(101, 60));

        assert_eq!(out.dimensions(), (101, 60));
        // x offset (101-50)//2 = 25, y offset (60-50)//2 = 5.
        assert_eq!(*out.get_pixel(24, 30), Rgb(WHITE));
        assert_eq!(*out.get_pixel(25, 30), Rgb(RED));
        assert_eq!(*out.get_pixel(74, 30), Rgb(RED));
        assert_eq!(*out.get_pixel(75, 30), Rgb(WHITE));
        assert_eq!(*out.get_pixel(50, 4), Rgb(WHITE));
        assert_eq!(*out.get_pixel(50, 5), Rgb(RED));
    }

    #[test]
    fn page_background_ignores_fit_padding() {
        // The page is always white even though the fitted image carries
        // black padding bands.
        let fitted = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        let out = center_on_page(&fitted, page(20, 20));
        assert_eq!(*out.get_pixel(0, 0), Rgb(WHITE));
        assert_eq!(*out.get_pixel(10, 10), Rgb([0, 0, 0]));
    }

    #[test]
    fn oversized_content_overflows_without_error() {
        let fitted = RgbImage::from_pixel(120, 50, Rgb(RED));
        let out = center_on_page(&fitted, page(100, 40));

        // Output stays page-sized; the overlapping region is drawn.
        assert_eq!(out.dimensions(), (100, 40));
        assert_eq!(*out.get_pixel(0, 0), Rgb(RED));
        assert_eq!(*out.get_pixel(99, 39), Rgb(RED));
    }

    #[test]
    fn overflow_on_one_axis_only() {
        // Wider than the page but shorter: clipped horizontally, centred
        // vertically with floor-division offsets.
        let fitted = RgbImage::from_pixel(120, 20, Rgb(RED));
        let out = center_on_page(&fitted, page(100, 41));

        assert_eq!(out.dimensions(), (100, 41));
        // y offset (41-20)//2 = 10.
        assert_eq!(*out.get_pixel(50, 9), Rgb(WHITE));
        assert_eq!(*out.get_pixel(50, 10), Rgb(RED));
        assert_eq!(*out.get_pixel(50, 29), Rgb(RED));
        assert_eq!(*out.get_pixel(50, 30), Rgb(WHITE));
    }
}
