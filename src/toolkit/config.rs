use crate::error::ConfigError;
use crate::operations::uv::{validate_scale, CubePresets};

/// Settings for a [`Toolkit`](super::Toolkit) session.
///
/// Grid spacing is not configured here; it is read from the viewport each
/// time a grid command runs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ToolkitConfig {
    /// Cube size of the quick projection command.
    pub quick_cube_scale: f64,
    /// Cube size of the half-scale quick projection command.
    pub half_cube_scale: f64,
    /// Presets offered by the cube projection modal.
    pub cube_presets: CubePresets,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            quick_cube_scale: 1.0,
            half_cube_scale: 0.5,
            cube_presets: CubePresets::default(),
        }
    }
}

impl ToolkitConfig {
    /// Checks every scale in the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] on the first non-positive
    /// or non-finite scale.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_scale(self.quick_cube_scale)?;
        validate_scale(self.half_cube_scale)?;
        self.cube_presets.validate()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ToolkitConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.quick_cube_scale, 1.0);
        assert_eq!(config.half_cube_scale, 0.5);
    }

    #[test]
    fn bad_scale_rejected() {
        let config = ToolkitConfig {
            half_cube_scale: f64::INFINITY,
            ..ToolkitConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let config: ToolkitConfig = serde_json::from_str(r#"{ "quick_cube_scale": 2.0 }"#).unwrap();
        assert_eq!(config.quick_cube_scale, 2.0);
        assert_eq!(config.half_cube_scale, 0.5);
        assert_eq!(config.cube_presets, CubePresets::default());
    }
}
