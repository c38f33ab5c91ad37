use std::fmt::Write as _;

use tracing::{debug, warn};

use crate::error::{ConfigError, Result};
use crate::host::CubeProjector;

/// Digit keys in the order presets are listed: `1` first, `0` last.
const PRESET_KEYS: [char; 10] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];

/// Cube projection sizes selectable by a single digit key.
///
/// `scales[i]` belongs to `PRESET_KEYS[i]`; the defaults run from
/// `1` = 0.25 to `0` = 2.5 in steps of 0.25.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubePresets {
    pub scales: [f64; 10],
}

impl Default for CubePresets {
    fn default() -> Self {
        Self {
            scales: [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0, 2.25, 2.5],
        }
    }
}

impl CubePresets {
    /// The preset bound to a digit key.
    #[must_use]
    pub fn scale_for_key(&self, key: char) -> Option<f64> {
        PRESET_KEYS
            .iter()
            .position(|&k| k == key)
            .map(|i| self.scales[i])
    }

    /// Prompt listing every key and its scale.
    #[must_use]
    pub fn help_text(&self) -> String {
        let mut text = String::from("Select Cubeprojection Scale:  ");
        for (key, scale) in PRESET_KEYS.iter().zip(self.scales) {
            let _ = write!(text, "({key}) = {scale},  ");
        }
        text
    }

    /// Checks that every preset is a usable cube size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] on the first non-positive
    /// or non-finite scale.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.scales.iter().try_for_each(|&s| validate_scale(s))
    }
}

pub(crate) fn validate_scale(scale: f64) -> std::result::Result<(), ConfigError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            parameter: "cube projection scale",
            value: scale,
            reason: "must be positive and finite",
        })
    }
}

/// Cube-projects the selected faces' UVs at a fixed size.
pub struct QuickCubeProjection {
    scale: f64,
}

impl QuickCubeProjection {
    /// Creates a new `QuickCubeProjection` operation.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    /// Executes the projection through the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is invalid or the host operator fails.
    pub fn execute<P: CubeProjector + ?Sized>(&self, projector: &mut P) -> Result<()> {
        validate_scale(self.scale)
            .map_err(Into::into)
            .and_then(|()| projector.cube_project(self.scale))
            .inspect_err(|err| warn!(%err, scale = self.scale, "cube projection aborted"))?;
        debug!(scale = self.scale, "cube projected UVs");
        Ok(())
    }
}
