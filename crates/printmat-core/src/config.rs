// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Job parameter defaults.

use serde::{Deserialize, Serialize};

use crate::types::Mode;

/// Default job parameters, used by front ends (CLI, web form) when a field
/// is left unset. The padding color is kept as text so it round-trips
/// through the same parser as user input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDefaults {
    /// Target width in centimetres.
    pub width_cm: f64,
    /// Target height in centimetres.
    pub height_cm: f64,
    /// Padding color as `#RRGGBB` or `R,G,B` text.
    pub padding: String,
    /// Output resolution in dots per inch.
    pub dpi: u32,
    pub mode: Mode,
}

impl Default for JobDefaults {
    fn default() -> Self {
        Self {
            width_cm: 20.0,
            height_cm: 25.0,
            padding: "#000000".into(),
            dpi: 300,
            mode: Mode::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_front_end() {
        let defaults = JobDefaults::default();
        assert_eq!(defaults.width_cm, 20.0);
        assert_eq!(defaults.height_cm, 25.0);
        assert_eq!(defaults.padding, "#000000");
        assert_eq!(defaults.dpi, 300);
        assert_eq!(defaults.mode, Mode::All);
    }
}
