// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Export module — lossless PNG with density metadata, and single-page PDF
// with the image at true physical size.

pub mod document;
pub mod raster;

pub use document::export_pdf;
pub use raster::save_png_with_dpi;
