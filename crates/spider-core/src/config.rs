//! Tuning parameters for [`crate::ParticleField`].
//!
//! Defaults come from `constants.rs`. The web front-end can override single
//! values from `data-*` attributes on the canvas element, which arrive here as
//! kebab-case string pairs.

use crate::constants::*;
use crate::error::ConfigError;

/// How the connection pass enumerates candidate pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStrategy {
    /// Nested loop over every unordered pair.
    #[default]
    AllPairs,
    /// Uniform bucket grid with cells as wide as the connection radius.
    Grid,
    /// `Grid` above [`GRID_AUTO_THRESHOLD`] particles, otherwise `AllPairs`.
    Auto,
}

impl ConnectionStrategy {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all-pairs" | "allpairs" => Ok(Self::AllPairs),
            "grid" => Ok(Self::Grid),
            "auto" => Ok(Self::Auto),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }

    /// Resolve `Auto` for a concrete particle count.
    pub fn resolve(self, particle_count: usize) -> Self {
        match self {
            Self::Auto if particle_count > GRID_AUTO_THRESHOLD => Self::Grid,
            Self::Auto => Self::AllPairs,
            other => other,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub area_per_particle: f32,
    pub connect_distance_sq: f32,
    pub pointer_radius: f32,
    pub line_width: f32,
    pub min_size: f32,
    pub size_span: f32,
    pub min_density: f32,
    pub density_span: f32,
    pub min_alpha: f32,
    pub max_speed: f32,
    pub rgb: [u8; 3],
    pub strategy: ConnectionStrategy,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: AREA_PER_PARTICLE,
            connect_distance_sq: CONNECT_DISTANCE_SQ,
            pointer_radius: POINTER_RADIUS,
            line_width: LINE_WIDTH,
            min_size: MIN_SIZE,
            size_span: SIZE_SPAN,
            min_density: MIN_DENSITY,
            density_span: DENSITY_SPAN,
            min_alpha: MIN_ALPHA,
            max_speed: MAX_SPEED,
            rgb: PARTICLE_RGB,
            strategy: ConnectionStrategy::default(),
        }
    }
}

impl FieldConfig {
    /// Keys accepted by [`FieldConfig::apply_override`].
    pub const OVERRIDE_KEYS: [&'static str; 6] = [
        "area-per-particle",
        "connect-distance-sq",
        "pointer-radius",
        "line-width",
        "max-speed",
        "strategy",
    ];

    /// Number of particles for a surface of the given size.
    pub fn particle_count(&self, width: f32, height: f32) -> usize {
        let area = width.max(0.0) as f64 * height.max(0.0) as f64;
        (area / self.area_per_particle as f64).round() as usize
    }

    /// Apply a single kebab-case override such as `pointer-radius=200`.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let key = key.trim();
        if key == "strategy" {
            self.strategy = ConnectionStrategy::parse(value)?;
            return Ok(());
        }
        let slot = match key {
            "area-per-particle" => &mut self.area_per_particle,
            "connect-distance-sq" => &mut self.connect_distance_sq,
            "pointer-radius" => &mut self.pointer_radius,
            "line-width" => &mut self.line_width,
            "max-speed" => &mut self.max_speed,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        let parsed: f32 = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber {
                key: key.to_string(),
                value: value.to_string(),
            })?;
        if !parsed.is_finite() || parsed <= 0.0 {
            return Err(ConfigError::NotPositive {
                key: key.to_string(),
                value: parsed,
            });
        }
        *slot = parsed;
        Ok(())
    }

    /// Build a config from defaults plus overrides. Bad entries are returned
    /// alongside the config instead of aborting the whole load.
    pub fn from_overrides<'a, I>(overrides: I) -> (Self, Vec<ConfigError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        let errors = overrides
            .into_iter()
            .filter_map(|(k, v)| config.apply_override(k, v).err())
            .collect();
        (config, errors)
    }
}
