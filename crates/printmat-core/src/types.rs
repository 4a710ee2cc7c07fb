// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Printmat layout pipeline.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PrintmatError, Result};

/// A4 sheet dimensions. The page canvas and document export always target
/// this size; alternative paper sizes are out of scope.
pub const A4_WIDTH_CM: f64 = 21.0;
pub const A4_HEIGHT_CM: f64 = 29.7;

/// Physical target size in centimetres.
///
/// Both axes are validated at construction, so a held value is always
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalSize {
    width_cm: f64,
    height_cm: f64,
}

impl PhysicalSize {
    /// Create a physical size, rejecting non-positive or non-finite axes.
    pub fn new(width_cm: f64, height_cm: f64) -> Result<Self> {
        if !width_cm.is_finite() || width_cm <= 0.0 {
            return Err(PrintmatError::InvalidDimension(format!(
                "width_cm must be positive, got {width_cm}"
            )));
        }
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(PrintmatError::InvalidDimension(format!(
                "height_cm must be positive, got {height_cm}"
            )));
        }
        Ok(Self {
            width_cm,
            height_cm,
        })
    }

    /// The fixed A4 sheet size (21.0 × 29.7 cm).
    pub fn a4() -> Self {
        Self {
            width_cm: A4_WIDTH_CM,
            height_cm: A4_HEIGHT_CM,
        }
    }

    pub fn width_cm(&self) -> f64 {
        self.width_cm
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Whole-centimetre label used in artifact file names, truncating any
    /// fractional part (20.5 cm labels as "20").
    pub fn label(&self) -> String {
        format!("{}x{}", self.width_cm.trunc() as i64, self.height_cm.trunc() as i64)
    }
}

/// Output resolution in dots per inch. Invariant: > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution(u32);

impl Resolution {
    pub fn new(dpi: u32) -> Result<Self> {
        if dpi == 0 {
            return Err(PrintmatError::InvalidDimension(
                "dpi must be positive, got 0".into(),
            ));
        }
        Ok(Self(dpi))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pixel dimensions of a raster canvas. Both axes are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBox {
    pub width_px: u32,
    pub height_px: u32,
}

/// An 8-bit RGB color, e.g. a padding fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in RGB order.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Which artifacts a job produces.
///
/// The wire vocabulary (`todo`, `pdf`, `image`, `image_a4`) is kept for
/// compatibility with existing callers; `todo` is the historical name for
/// "everything".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Target raster + page raster + document.
    #[default]
    All,
    /// Document (PDF) only.
    Document,
    /// Target raster only.
    Image,
    /// Page raster only.
    ImagePage,
}

impl Mode {
    /// Parse the wire vocabulary, case-insensitively and ignoring
    /// surrounding whitespace. Unknown values are rejected.
    pub fn parse(text: &str) -> Result<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "todo" => Ok(Self::All),
            "pdf" => Ok(Self::Document),
            "image" => Ok(Self::Image),
            "image_a4" => Ok(Self::ImagePage),
            other => Err(PrintmatError::InvalidMode(other.to_string())),
        }
    }

    /// Wire keyword for this mode.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::All => "todo",
            Self::Document => "pdf",
            Self::Image => "image",
            Self::ImagePage => "image_a4",
        }
    }

    pub fn wants_target_raster(self) -> bool {
        matches!(self, Self::All | Self::Image)
    }

    pub fn wants_page_raster(self) -> bool {
        matches!(self, Self::All | Self::ImagePage)
    }

    pub fn wants_document(self) -> bool {
        matches!(self, Self::All | Self::Document)
    }
}

impl FromStr for Mode {
    type Err = PrintmatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// One processing request: a source image plus the validated parameters
/// describing the target artifacts.
///
/// A `Job` is transient — it exists for a single pipeline invocation and is
/// never persisted. Because every field is a validated type, a constructed
/// job cannot carry a non-positive dimension or malformed color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Path to the source image. The caller owns its lifecycle.
    pub source: PathBuf,
    /// Physical size of the target raster.
    pub target: PhysicalSize,
    /// Resolution used for pixel derivation and embedded metadata.
    pub dpi: Resolution,
    /// Fill color for the padded regions of the target raster.
    pub padding: Color,
    pub mode: Mode,
}

impl Job {
    pub fn new(
        source: impl Into<PathBuf>,
        target: PhysicalSize,
        dpi: Resolution,
        padding: Color,
        mode: Mode,
    ) -> Self {
        Self {
            source: source.into(),
            target,
            dpi,
            padding,
            mode,
        }
    }
}

/// The artifacts a completed job produced.
///
/// A `None` field means the artifact was not requested — or, for `document`
/// only, that its export failed non-fatally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSet {
    pub target_raster: Option<PathBuf>,
    pub page_raster: Option<PathBuf>,
    pub document: Option<PathBuf>,
}

impl OutputSet {
    /// Produced artifact paths, in target/page/document order.
    pub fn paths(&self) -> impl Iterator<Item = &std::path::Path> {
        [
            self.target_raster.as_deref(),
            self.page_raster.as_deref(),
            self.document.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    pub fn len(&self) -> usize {
        self.paths().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
