mod grid_snap;
mod minor_grid;

pub use grid_snap::GridSnap;
pub use minor_grid::SnapToMinorGrid;

use crate::error::ConfigError;

/// Spacing of the viewport grid.
///
/// Major lines are `scale` world units apart; each major cell is split
/// into `subdivisions` minor cells.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSettings {
    /// World units per major grid line.
    pub scale: f64,
    /// Minor lines per major line.
    pub subdivisions: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            subdivisions: 10,
        }
    }
}

impl GridSettings {
    /// Creates validated grid settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if `scale` is not a positive
    /// finite number or `subdivisions` is zero.
    pub fn new(scale: f64, subdivisions: u32) -> Result<Self, ConfigError> {
        let grid = Self {
            scale,
            subdivisions,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Checks that the settings describe a usable grid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] on a non-positive or
    /// non-finite scale, or zero subdivisions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "grid scale",
                value: self.scale,
                reason: "must be positive and finite",
            });
        }
        if self.subdivisions == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "grid subdivisions",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Grid lines per world unit: `subdivisions / scale` on the minor
    /// grid, `1 / scale` on the major grid.
    #[must_use]
    pub fn multiplier(&self, on_minor: bool) -> f64 {
        let lines = if on_minor { self.subdivisions } else { 1 };
        f64::from(lines) / self.scale
    }

    /// Distance between neighbouring grid lines.
    #[must_use]
    pub fn spacing(&self, on_minor: bool) -> f64 {
        1.0 / self.multiplier(on_minor)
    }
}

/// Snaps `coord` to the nearest multiple of `1 / multiplier`.
///
/// Ties round to the even line, so `0.125` on a quarter grid goes to `0.0`
/// and `0.375` goes to `0.5`.
#[must_use]
pub fn quantize(coord: f64, multiplier: f64) -> f64 {
    (coord * multiplier).round_ties_even() / multiplier
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn minor_multiplier() {
        let grid = GridSettings::new(1.0, 4).unwrap();
        assert_relative_eq!(grid.multiplier(true), 4.0);
        assert_relative_eq!(grid.multiplier(false), 1.0);
        assert_relative_eq!(grid.spacing(true), 0.25);
    }

    #[test]
    fn scale_widens_spacing() {
        let grid = GridSettings::new(2.0, 4).unwrap();
        assert_relative_eq!(grid.spacing(false), 2.0);
        assert_relative_eq!(grid.spacing(true), 0.5);
    }

    #[test]
    fn invalid_settings_rejected() {
        assert!(GridSettings::new(0.0, 4).is_err());
        assert!(GridSettings::new(-1.0, 4).is_err());
        assert!(GridSettings::new(f64::NAN, 4).is_err());
        assert!(GridSettings::new(1.0, 0).is_err());
    }

    #[test]
    fn quantize_to_quarter() {
        assert_relative_eq!(quantize(0.3, 4.0), 0.25);
        assert_relative_eq!(quantize(-0.3, 4.0), -0.25);
        assert_relative_eq!(quantize(0.4, 4.0), 0.5);
    }

    #[test]
    fn quantize_ties_to_even() {
        assert_relative_eq!(quantize(0.125, 4.0), 0.0);
        assert_relative_eq!(quantize(0.375, 4.0), 0.5);
        assert_relative_eq!(quantize(2.5, 1.0), 2.0);
        assert_relative_eq!(quantize(-2.5, 1.0), -2.0);
    }

    #[test]
    fn quantize_is_idempotent() {
        for &coord in &[0.3, -7.77, 123.456, 1e-3, 0.1 + 0.2] {
            for &m in &[1.0, 4.0, 10.0, 0.5, 3.0] {
                let once = quantize(coord, m);
                assert_eq!(quantize(once, m), once, "coord={coord} m={m}");
            }
        }
    }
}
