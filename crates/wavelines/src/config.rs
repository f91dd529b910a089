use anyhow::{ensure, Result};

use wavelines_engine::coords::Vec2;
use wavelines_engine::paint::Color;
use wavelines_geom::{CatmullRomCurve, CurveType, DEFAULT_DIVISIONS};

/// Number of line shapes in the default scene.
pub const DEFAULT_LINE_COUNT: usize = 4;

/// Scene appearance and curve parameters.
///
/// One line shape is created per entry in `offsets`.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub background: Color,
    pub line_color: Color,
    pub offsets: Vec<Vec2>,
    pub divisions: usize,
    pub curve_type: CurveType,
    /// Only used by [`CurveType::CatmullRom`].
    pub tension: f64,
    pub closed: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            line_color: Color::from_hex(0x888888),
            offsets: vec![Vec2::zero(); DEFAULT_LINE_COUNT],
            divisions: DEFAULT_DIVISIONS,
            curve_type: CurveType::Centripetal,
            tension: CatmullRomCurve::DEFAULT_TENSION,
            closed: false,
        }
    }
}

impl SceneConfig {
    /// Rejects values that would make every update fail or draw garbage.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.divisions > 0, "divisions must be at least 1");
        ensure!(self.tension.is_finite(), "tension must be finite, got {}", self.tension);
        ensure!(self.line_color.is_finite(), "line colour must be finite");
        ensure!(self.background.is_finite(), "background colour must be finite");

        if let Some(i) = self.offsets.iter().position(|o| !o.is_finite()) {
            anyhow::bail!("offset {i} is not finite");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_four_grey_lines_on_white() {
        let config = SceneConfig::default();
        assert_eq!(config.offsets, vec![Vec2::zero(); 4]);
        assert_eq!(config.background, Color::WHITE);
        assert_eq!(config.line_color, Color::from_hex(0x888888));
        assert_eq!(config.divisions, 100);
        assert_eq!(config.curve_type, CurveType::Centripetal);
        assert!(!config.closed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let zero = SceneConfig { divisions: 0, ..SceneConfig::default() };
        assert!(zero.validate().is_err());

        let tension = SceneConfig { tension: f64::NAN, ..SceneConfig::default() };
        assert!(tension.validate().is_err());

        let offsets = SceneConfig {
            offsets: vec![Vec2::zero(), Vec2::new(f32::INFINITY, 0.0)],
            ..SceneConfig::default()
        };
        let err = offsets.validate().unwrap_err();
        assert!(err.to_string().contains("offset 1"));
    }
}
