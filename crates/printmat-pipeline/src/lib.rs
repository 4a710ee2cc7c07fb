// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// printmat-pipeline — The Printmat processing pipeline.
//
// Provides unit conversion (cm → px), padding-color parsing, source
// normalization (upright, alpha-free RGB), aspect-preserving fit-with-padding,
// A4 page composition, and export to PNG (with density metadata) and
// single-page PDF (image at true physical size).

pub mod color;
pub mod export;
pub mod fit;
pub mod normalize;
pub mod page;
pub mod pipeline;
pub mod units;

// Re-export the primary entry points so callers can use
// `printmat_pipeline::process` etc.
pub use color::parse_color;
pub use fit::fit_into_box;
pub use page::center_on_page;
pub use pipeline::process;
pub use units::{cm_to_px, pixel_box};
