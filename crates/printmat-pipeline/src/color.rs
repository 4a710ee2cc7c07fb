// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Padding-color parsing.

use printmat_core::Color;
use printmat_core::error::{PrintmatError, Result};

/// Parse a color from `#RRGGBB` or `R,G,B` text.
///
/// Hex digits may be upper- or lowercase. Decimal components are clamped
/// into [0, 255] rather than rejected, so `"10,20,300"` parses to
/// `(10, 20, 255)` and negative components clamp to 0. Whitespace around
/// the whole string and around each component is ignored.
pub fn parse_color(text: &str) -> Result<Color> {
    let trimmed = text.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        if hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            // Infallible after the digit check above.
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16).unwrap_or(0)
            };
            return Ok(Color::new(channel(0..2), channel(2..4), channel(4..6)));
        }
        return Err(PrintmatError::InvalidColorFormat(trimmed.to_string()));
    }

    let parts: Vec<&str> = trimmed.split(',').collect();
    if parts.len() == 3 {
        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            let value: i64 = part
                .trim()
                .parse()
                .map_err(|_| PrintmatError::InvalidColorFormat(trimmed.to_string()))?;
            *slot = value.clamp(0, 255) as u8;
        }
        return Ok(Color::new(channels[0], channels[1], channels[2]));
    }

    Err(PrintmatError::InvalidColorFormat(trimmed.to_string()))
}
