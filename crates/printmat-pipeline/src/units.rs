// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Physical-to-pixel unit conversion.

use printmat_core::error::{PrintmatError, Result};
use printmat_core::{PhysicalSize, PixelBox, Resolution};

const CM_PER_INCH: f64 = 2.54;

/// Convert a physical length in centimetres to a pixel count at the given
/// resolution: `round(cm * dpi / 2.54)`, floored at 1.
///
/// The floor guards degenerate tiny sizes — a 0.001 cm edge at 72 dpi still
/// yields a 1 px canvas rather than an empty one.
pub fn cm_to_px(length_cm: f64, dpi: Resolution) -> Result<u32> {
    if !length_cm.is_finite() || length_cm <= 0.0 {
        return Err(PrintmatError::InvalidDimension(format!(
            "length_cm must be positive, got {length_cm}"
        )));
    }
    let px = (length_cm * dpi.get() as f64 / CM_PER_INCH).round();
    if px > u32::MAX as f64 {
        return Err(PrintmatError::InvalidDimension(format!(
            "{length_cm} cm at {dpi} dpi exceeds the addressable pixel range"
        )));
    }
    Ok((px as u32).max(1))
}

/// Derive the pixel box for a physical size at the given resolution.
pub fn pixel_box(size: &PhysicalSize, dpi: Resolution) -> Result<PixelBox> {
    Ok(PixelBox {
        width_px: cm_to_px(size.width_cm(), dpi)?,
        height_px: cm_to_px(size.height_cm(), dpi)?,
    })
}
