use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

use crate::{geometry::Point, tile::tile};

/// Default location of the configuration file.
pub fn path() -> Result<PathBuf, Error> {
    dirs::config_dir()
        .map(|dir| dir.join("hextile").join("config.toml"))
        .ok_or(Error::NoConfigDir)
}

/// A circular vent plate perforated by hexagonal holes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VentPlate {
    /// Point-to-point width of one grid cell
    pub cell_width: f64,
    /// Radius of the perforated region
    pub radius: f64,
    /// Material left between neighboring holes
    pub wall: f64,
}

impl Default for VentPlate {
    fn default() -> Self {
        VentPlate {
            cell_width: 3.6,
            radius: 38.5,
            wall: 0.6,
        }
    }
}

impl VentPlate {
    /// Point-to-point width of each cutout.
    pub fn hole_width(&self) -> f64 {
        self.cell_width - self.wall
    }

    /// Centers of the holes, spiraling out from the middle of the plate.
    pub fn holes(&self) -> Vec<Point> {
        tile(self.cell_width, self.radius)
    }

    /// Reject dimensions which can't describe a printable plate.
    ///
    /// [`VentPlate::holes`] never fails; it yields no holes for these instead.
    pub fn validate(&self) -> Result<(), Error> {
        let positive = |name: &'static str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidPlate {
                    field: name,
                    value,
                })
            }
        };
        positive("cell_width", self.cell_width)?;
        positive("radius", self.radius)?;
        if !(self.wall.is_finite() && self.wall >= 0.0) {
            return Err(Error::InvalidWall(self.wall));
        }
        positive("hole width", self.hole_width())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Plates are independently configured by name.
    #[serde(default)]
    pub plates: HashMap<String, VentPlate>,
}

impl Config {
    pub fn save(&self) -> Result<(), Error> {
        self.save_to(path()?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = toml::to_string_pretty(self)?;
        std::fs::write(path, serialized.as_bytes())?;
        log::info!("saved {} plate(s) to {}", self.plates.len(), path.display());
        Ok(())
    }

    pub fn load() -> Result<Self, Error> {
        Self::load_from(path()?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let config: Config = data.parse()?;
        log::debug!(
            "loaded {} plate(s) from {}",
            config.plates.len(),
            path.display()
        );
        Ok(config)
    }

    /// The named plate, or the default plate when none is configured.
    pub fn plate(&self, name: &str) -> VentPlate {
        match self.plates.get(name) {
            Some(plate) => *plate,
            None => {
                log::debug!("no plate named {:?}; using default", name);
                VentPlate::default()
            }
        }
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(Into::into)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("no configuration directory for the current user")]
    NoConfigDir,
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
    #[error("invalid plate: {field} must be positive and finite, got {value}")]
    InvalidPlate { field: &'static str, value: f64 },
    #[error("invalid plate: wall must be non-negative and finite, got {0}")]
    InvalidWall(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_plate_uses_defaults() {
        let config: Config = r#"
            [plates.fan]
            radius = 20.0
        "#
        .parse()
        .unwrap();
        let fan = config.plate("fan");
        assert_eq!(fan.radius, 20.0);
        assert_eq!(fan.cell_width, VentPlate::default().cell_width);
        assert_eq!(config.plate("missing"), VentPlate::default());
    }

    #[test]
    fn test_malformed() {
        let err = "plates = 3".parse::<Config>().unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn test_validate() {
        assert!(VentPlate::default().validate().is_ok());
        let thick_wall = VentPlate {
            wall: 3.6,
            ..VentPlate::default()
        };
        assert!(matches!(
            thick_wall.validate(),
            Err(Error::InvalidPlate { field: "hole width", .. })
        ));
        let no_radius = VentPlate {
            radius: 0.0,
            ..VentPlate::default()
        };
        assert!(matches!(
            no_radius.validate(),
            Err(Error::InvalidPlate { field: "radius", .. })
        ));
    }

    #[test]
    fn test_validate_wall() {
        let no_wall = VentPlate {
            wall: 0.0,
            ..VentPlate::default()
        };
        assert!(no_wall.validate().is_ok());

        let negative = VentPlate {
            wall: -1.0,
            ..VentPlate::default()
        };
        let err = negative.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidWall(wall) if wall == -1.0));
        assert_eq!(
            err.to_string(),
            "invalid plate: wall must be non-negative and finite, got -1"
        );

        let nan = VentPlate {
            wall: f64::NAN,
            ..VentPlate::default()
        };
        assert!(matches!(nan.validate(), Err(Error::InvalidWall(_))));
    }

    #[test]
    fn test_default_plate_holes() {
        let plate = VentPlate::default();
        let holes = plate.holes();
        assert_eq!(holes[0], Point::ORIGIN);
        assert!(holes.iter().all(|hole| hole.norm() < 36.7));
        assert!((plate.hole_width() - 3.0).abs() < 1e-9);
    }
}
