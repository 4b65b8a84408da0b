//! Engine configuration.

use crate::handle::Handle;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Axis constraint for translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Translation is disabled entirely.
    None,
    /// Horizontal movement only.
    X,
    /// Vertical movement only.
    Y,
    /// Free movement.
    #[default]
    Both,
}

/// Requested extent for one dimension: a fixed size in container units, or
/// "measure from the rendered content".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    Fixed(f64),
    FitContent,
}

impl Extent {
    /// Resolve against a caller-measured content size.
    pub fn resolve(self, measured: f64) -> f64 {
        match self {
            Extent::Fixed(value) => value,
            Extent::FitContent => measured,
        }
    }
}

// Hosts configure sizes as a bare number or the string "auto"; keep that
// wire shape instead of a tagged enum.
impl Serialize for Extent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Extent::Fixed(value) => serializer.serialize_f64(*value),
            Extent::FitContent => serializer.serialize_str("auto"),
        }
    }
}

impl<'de> Deserialize<'de> for Extent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExtentVisitor;

        impl Visitor<'_> for ExtentVisitor {
            type Value = Extent;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or the string \"auto\"")
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Extent, E> {
                Ok(Extent::Fixed(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Extent, E> {
                Ok(Extent::Fixed(value as f64))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Extent, E> {
                Ok(Extent::Fixed(value as f64))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Extent, E> {
                if value == "auto" {
                    Ok(Extent::FitContent)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }
        }

        deserializer.deserialize_any(ExtentVisitor)
    }
}

/// Stacking order value: a concrete level or "leave unmanaged".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZIndex {
    #[default]
    Auto,
    Value(u32),
}

impl Serialize for ZIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ZIndex::Auto => serializer.serialize_str("auto"),
            ZIndex::Value(value) => serializer.serialize_u32(*value),
        }
    }
}

impl<'de> Deserialize<'de> for ZIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ZIndexVisitor;

        impl Visitor<'_> for ZIndexVisitor {
            type Value = ZIndex;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or the string \"auto\"")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<ZIndex, E> {
                u32::try_from(value)
                    .map(ZIndex::Value)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<ZIndex, E> {
                u32::try_from(value)
                    .map(ZIndex::Value)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<ZIndex, E> {
                if value == "auto" {
                    Ok(ZIndex::Auto)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }
        }

        deserializer.deserialize_any(ZIndexVisitor)
    }
}

/// Error raised at the configuration boundary. The engine itself assumes
/// validated values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid cell sizes must be positive and finite, got {x} x {y}")]
    GridCell { x: f64, y: f64 },
    #[error("minimum sizes must be non-negative and finite, got {width} x {height}")]
    MinSize { width: f64, height: f64 },
    #[error("container scale factors must be positive and finite, got {x} x {y}")]
    Scale { x: f64, y: f64 },
}

/// Host-supplied configuration for a [`DragRect`](crate::DragRect) instance.
///
/// Every field may change between gestures via
/// [`set_config`](crate::DragRect::set_config).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectConfig {
    /// Initial activation state.
    pub active: bool,
    /// When set, presses do not activate the rectangle.
    pub prevent_activation: bool,
    /// Whether the whole rectangle may be dragged.
    pub draggable: bool,
    /// Whether the rectangle may be resized from its handles.
    pub resizable: bool,
    /// Lock the width/height ratio during resize.
    pub keep_aspect: bool,
    /// Keep the rectangle fully inside the container.
    pub contained: bool,
    /// Snap edges to the grid during gestures.
    pub snap_to_grid: bool,
    /// Grid cell width.
    pub grid_x: f64,
    /// Grid cell height.
    pub grid_y: f64,
    /// Smallest allowed width.
    pub min_width: f64,
    /// Smallest allowed height.
    pub min_height: f64,
    /// Horizontal scale applied to the container by the host; pointer deltas
    /// are divided by it so screen pixels map to container units.
    pub scale_x: f64,
    /// Vertical container scale.
    pub scale_y: f64,
    /// Axis constraint for translation.
    pub axis: Axis,
    /// The set of enabled resize handles.
    pub handles: Vec<Handle>,
    /// Stacking order reported back to the host.
    pub z_index: ZIndex,
}

impl Default for RectConfig {
    fn default() -> Self {
        RectConfig {
            active: false,
            prevent_activation: false,
            draggable: true,
            resizable: true,
            keep_aspect: false,
            contained: false,
            snap_to_grid: false,
            grid_x: 50.0,
            grid_y: 50.0,
            min_width: 50.0,
            min_height: 50.0,
            scale_x: 1.0,
            scale_y: 1.0,
            axis: Axis::Both,
            handles: Handle::ALL.to_vec(),
            z_index: ZIndex::Auto,
        }
    }
}

impl RectConfig {
    /// Check the numeric constraint fields. Invalid configuration never
    /// reaches the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.grid_x > 0.0 && self.grid_x.is_finite())
            || !(self.grid_y > 0.0 && self.grid_y.is_finite())
        {
            return Err(ConfigError::GridCell {
                x: self.grid_x,
                y: self.grid_y,
            });
        }
        if !(self.min_width >= 0.0 && self.min_width.is_finite())
            || !(self.min_height >= 0.0 && self.min_height.is_finite())
        {
            return Err(ConfigError::MinSize {
                width: self.min_width,
                height: self.min_height,
            });
        }
        if !(self.scale_x > 0.0 && self.scale_x.is_finite())
            || !(self.scale_y > 0.0 && self.scale_y.is_finite())
        {
            return Err(ConfigError::Scale {
                x: self.scale_x,
                y: self.scale_y,
            });
        }
        Ok(())
    }

    /// Whether a given handle is enabled.
    pub fn handle_enabled(&self, handle: Handle) -> bool {
        self.handles.contains(&handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(RectConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_grid() {
        let config = RectConfig {
            grid_x: 0.0,
            ..RectConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridCell { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_min_size() {
        let config = RectConfig {
            min_height: -1.0,
            ..RectConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::MinSize { .. })));
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        let config = RectConfig {
            scale_x: 0.0,
            ..RectConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Scale { .. })));
    }

    #[test]
    fn test_extent_json_shape() {
        let fixed: Extent = serde_json::from_str("120.5").unwrap();
        assert_eq!(fixed, Extent::Fixed(120.5));
        let auto: Extent = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(auto, Extent::FitContent);
        assert_eq!(serde_json::to_string(&auto).unwrap(), "\"auto\"");
        assert!(serde_json::from_str::<Extent>("\"wide\"").is_err());
    }

    #[test]
    fn test_z_index_json_shape() {
        let level: ZIndex = serde_json::from_str("3").unwrap();
        assert_eq!(level, ZIndex::Value(3));
        let auto: ZIndex = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(auto, ZIndex::Auto);
        assert!(serde_json::from_str::<ZIndex>("-1").is_err());
    }

    #[test]
    fn test_extent_resolve() {
        assert!((Extent::Fixed(80.0).resolve(200.0) - 80.0).abs() < f64::EPSILON);
        assert!((Extent::FitContent.resolve(200.0) - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_round_trip() {
        let config = RectConfig {
            keep_aspect: true,
            handles: vec![Handle::TopLeft, Handle::BottomRight],
            z_index: ZIndex::Value(7),
            ..RectConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: RectConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
