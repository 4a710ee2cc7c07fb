// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Printmat.

use thiserror::Error;

/// Top-level error type for all Printmat operations.
#[derive(Debug, Error)]
pub enum PrintmatError {
    // -- Job parameter errors (fatal before any I/O) --
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("invalid color format: {0} (use '#RRGGBB' or 'R,G,B')")]
    InvalidColorFormat(String),

    #[error("invalid mode: {0} (expected todo, pdf, image, or image_a4)")]
    InvalidMode(String),

    // -- Processing errors --
    #[error("failed to decode source image: {0}")]
    SourceDecode(String),

    /// Non-fatal: the pipeline degrades the output set rather than aborting.
    #[error("document export failed: {0}")]
    DocumentExport(String),

    // -- File output --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PrintmatError>;
