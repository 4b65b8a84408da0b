//! Edge-offset rectangle representation.

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// A rectangle stored as signed distances from the container's edges.
///
/// `left` and `top` measure from the container's left/top edge to the
/// rectangle's left/top edge; `right` and `bottom` measure from the
/// container's right/bottom edge to the rectangle's right/bottom edge.
/// Width and height are derived against the container size, so the same
/// edges describe a different rectangle if the container changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Edges {
    /// Edges at zero distance from every container edge (fills the container).
    pub const ZERO: Edges = Edges {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Build edges from a top-left position and an explicit size.
    pub fn from_position_size(container: Size, position: Point, size: Size) -> Self {
        Edges {
            left: position.x,
            top: position.y,
            right: container.width - size.width - position.x,
            bottom: container.height - size.height - position.y,
        }
    }

    /// Derived width inside the given container.
    pub fn width(&self, container: Size) -> f64 {
        container.width - self.left - self.right
    }

    /// Derived height inside the given container.
    pub fn height(&self, container: Size) -> f64 {
        container.height - self.top - self.bottom
    }

    /// The committed geometry reported to the host, in whole units.
    pub fn to_geometry(&self, container: Size) -> RectGeometry {
        RectGeometry {
            left: self.left.round(),
            top: self.top.round(),
            width: self.width(container).round(),
            height: self.height(container).round(),
        }
    }
}

/// Committed rectangle geometry, rounded to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_position_size() {
        let container = Size::new(500.0, 500.0);
        let edges =
            Edges::from_position_size(container, Point::new(100.0, 100.0), Size::new(100.0, 100.0));
        assert!((edges.left - 100.0).abs() < f64::EPSILON);
        assert!((edges.top - 100.0).abs() < f64::EPSILON);
        assert!((edges.right - 300.0).abs() < f64::EPSILON);
        assert!((edges.bottom - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_derived_dimensions() {
        let container = Size::new(500.0, 400.0);
        let edges = Edges {
            left: 50.0,
            top: 60.0,
            right: 150.0,
            bottom: 140.0,
        };
        assert!((edges.width(container) - 300.0).abs() < f64::EPSILON);
        assert!((edges.height(container) - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_geometry_rounds_to_whole_units() {
        let container = Size::new(500.0, 500.0);
        let edges = Edges {
            left: 10.4,
            top: 20.6,
            right: 100.0,
            bottom: 100.0,
        };
        let rect = edges.to_geometry(container);
        assert!((rect.left - 10.0).abs() < f64::EPSILON);
        assert!((rect.top - 21.0).abs() < f64::EPSILON);
        assert!((rect.width - 390.0).abs() < f64::EPSILON);
        assert!((rect.height - 379.0).abs() < f64::EPSILON);
    }
}
