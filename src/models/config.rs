use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::rendering::UnsharpMask;

/// Tunables of one repaint, loaded from an optional YAML file
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct MosaicConfig {
    /// Tiles along the image's long side, before the layer adjustment
    pub tiles_long_side: u32,

    /// Build height: 2 or 3 layers sit on 2x2 base plates, halving the tile count
    pub layers: u32,

    /// Blur sigma in hundredths of a pixel
    pub sigma: u32,

    /// Low-contrast threshold in ten-thousandths
    pub threshold: u32,

    /// Sharpen amount in hundredths
    pub amount: u32,

    /// Luminance weight in five-hundredths
    pub luminance_factor: u32,

    /// Export the mosaic (true) or only the sharpened source (false)
    pub show_mosaic: bool,
}

/// Command-line values that take precedence over the file
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub tiles_long_side: Option<u32>,
    pub layers: Option<u32>,
    pub sigma: Option<u32>,
    pub threshold: Option<u32>,
    pub amount: Option<u32>,
    pub luminance_factor: Option<u32>,
    pub no_mosaic: bool,
}

const TILES_RANGE: (u32, u32) = (1, 1000);
const LAYERS_RANGE: (u32, u32) = (1, 3);
const SLIDER_RANGE: (u32, u32) = (0, 1000);

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            tiles_long_side: 96,
            layers: 3,
            sigma: 200,
            threshold: 500,
            amount: 100,
            luminance_factor: 500,
            show_mosaic: true,
        }
    }
}

impl MosaicConfig {
    /// Load and validate a YAML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate YAML; missing fields take their defaults
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(v) = overrides.tiles_long_side {
            self.tiles_long_side = v;
        }
        if let Some(v) = overrides.layers {
            self.layers = v;
        }
        if let Some(v) = overrides.sigma {
            self.sigma = v;
        }
        if let Some(v) = overrides.threshold {
            self.threshold = v;
        }
        if let Some(v) = overrides.amount {
            self.amount = v;
        }
        if let Some(v) = overrides.luminance_factor {
            self.luminance_factor = v;
        }
        if overrides.no_mosaic {
            self.show_mosaic = false;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check("tiles_long_side", self.tiles_long_side, TILES_RANGE)?;
        check("layers", self.layers, LAYERS_RANGE)?;
        check("sigma", self.sigma, SLIDER_RANGE)?;
        check("threshold", self.threshold, SLIDER_RANGE)?;
        check("amount", self.amount, SLIDER_RANGE)?;
        check("luminance_factor", self.luminance_factor, SLIDER_RANGE)?;

        if self.luminance_factor == 0 {
            tracing::warn!("luminance_factor is 0, lightness is ignored when matching colors");
        }
        Ok(())
    }

    /// Tiles on the long side after the layer adjustment
    pub fn effective_tiles(&self) -> u32 {
        if self.layers >= 2 {
            (self.tiles_long_side / 2).max(1)
        } else {
            self.tiles_long_side
        }
    }

    /// Weight of the lightness term in color matching (1.0 at the default)
    pub fn luminance_weight(&self) -> f32 {
        self.luminance_factor as f32 / 500.0
    }

    /// Sharpening parameters; zero slider values are raised to one step
    pub fn unsharp_mask(&self) -> UnsharpMask {
        UnsharpMask {
            sigma: self.sigma.max(1) as f32 / 100.0,
            threshold: self.threshold.max(1) as f32 / 10_000.0,
            amount: self.amount.max(1) as f32 / 100.0,
        }
    }
}

fn check(field: &'static str, value: u32, (min, max): (u32, u32)) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MosaicConfig::default();

        assert_eq!(config.tiles_long_side, 96);
        assert_eq!(config.layers, 3);
        assert_eq!(config.sigma, 200);
        assert_eq!(config.threshold, 500);
        assert_eq!(config.amount, 100);
        assert_eq!(config.luminance_factor, 500);
        assert!(config.show_mosaic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let yaml = r#"
tiles_long_side: 64
luminance_factor: 750
show_mosaic: false
"#;
        let config = MosaicConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.tiles_long_side, 64);
        assert_eq!(config.luminance_factor, 750);
        assert!(!config.show_mosaic);
        // Untouched fields keep their defaults
        assert_eq!(config.layers, 3);
        assert_eq!(config.sigma, 200);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = MosaicConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, MosaicConfig::default());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = MosaicConfig::from_yaml_str("layers: 4").unwrap_err();
        match err {
            ConfigError::OutOfRange { field, value, .. } => {
                assert_eq!(field, "layers");
                assert_eq!(value, 4);
            }
            other => panic!("Expected OutOfRange, got {other:?}"),
        }

        assert!(MosaicConfig::from_yaml_str("tiles_long_side: 0").is_err());
        assert!(MosaicConfig::from_yaml_str("sigma: 1001").is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = MosaicConfig::from_yaml_str("tiles_long_side: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides() {
        let overrides = ConfigOverrides {
            tiles_long_side: Some(40),
            layers: Some(1),
            no_mosaic: true,
            ..Default::default()
        };
        let config = MosaicConfig::default().with_overrides(&overrides).unwrap();
        assert_eq!(config.tiles_long_side, 40);
        assert_eq!(config.layers, 1);
        assert!(!config.show_mosaic);
        assert_eq!(config.sigma, 200);

        let bad = ConfigOverrides {
            luminance_factor: Some(5000),
            ..Default::default()
        };
        assert!(MosaicConfig::default().with_overrides(&bad).is_err());
    }

    #[test]
    fn test_effective_tiles() {
        let mut config = MosaicConfig::default();
        assert_eq!(config.effective_tiles(), 48);
        config.layers = 2;
        assert_eq!(config.effective_tiles(), 48);
        config.layers = 1;
        assert_eq!(config.effective_tiles(), 96);
        config.layers = 3;
        config.tiles_long_side = 1;
        assert_eq!(config.effective_tiles(), 1);
    }

    #[test]
    fn test_derived_parameters() {
        let config = MosaicConfig::default();
        assert!((config.luminance_weight() - 1.0).abs() < 1e-6);

        let mask = config.unsharp_mask();
        assert!((mask.sigma - 2.0).abs() < 1e-6);
        assert!((mask.threshold - 0.05).abs() < 1e-6);
        assert!((mask.amount - 1.0).abs() < 1e-6);

        let zeroed = MosaicConfig {
            sigma: 0,
            threshold: 0,
            amount: 0,
            ..Default::default()
        };
        let mask = zeroed.unsharp_mask();
        assert!((mask.sigma - 0.01).abs() < 1e-6);
        assert!((mask.threshold - 0.0001).abs() < 1e-6);
        assert!((mask.amount - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_load_missing_file() {
        let err = MosaicConfig::load(Path::new("/nonexistent/mosaic.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
