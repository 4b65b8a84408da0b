//! Per-edge movement limits.

use crate::gesture::Snapshot;
use crate::handle::{Handle, HorizontalSide, VerticalSide};
use crate::rect::Edges;
use kurbo::Size;
use serde::{Deserialize, Serialize};

/// An optional closed bound on a single edge offset.
///
/// `None` is the explicit "no bound" marker; infinities never enter the
/// clamp arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bound {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bound {
    /// No bound in either direction.
    pub const UNBOUNDED: Bound = Bound {
        min: None,
        max: None,
    };

    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Bound { min, max }
    }

    /// Clamp a value into the bound. Total for finite inputs: absent sides
    /// leave the value untouched.
    pub fn clamp(&self, value: f64) -> f64 {
        let mut value = value;
        if let Some(min) = self.min {
            if value < min {
                value = min;
            }
        }
        if let Some(max) = self.max {
            if max < value {
                value = max;
            }
        }
        value
    }

    /// Narrow this bound by another. An absent side yields to the other
    /// bound's side.
    pub fn intersect(&self, other: &Bound) -> Bound {
        let min = match (self.min, other.min) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        let max = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        Bound { min, max }
    }
}

/// Movement limits for all four edges, computed once at gesture start and
/// held for the gesture's duration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeLimits {
    pub left: Bound,
    pub right: Bound,
    pub top: Bound,
    pub bottom: Bound,
}

impl EdgeLimits {
    /// Fully unbounded limits (the neutral state between gestures).
    pub fn unbounded() -> Self {
        EdgeLimits::default()
    }

    /// Clamp each candidate edge independently into its bound.
    pub fn clamp(&self, edges: Edges) -> Edges {
        Edges {
            left: self.left.clamp(edges.left),
            right: self.right.clamp(edges.right),
            top: self.top.clamp(edges.top),
            bottom: self.bottom.clamp(edges.bottom),
        }
    }
}

/// Constraint inputs for the resize limit calculation.
#[derive(Debug, Clone, Copy)]
pub struct ResizeConstraints {
    pub min_width: f64,
    pub min_height: f64,
    /// Whether the rectangle must stay inside the container.
    pub contained: bool,
    /// Whether the width/height ratio is locked.
    pub keep_aspect: bool,
}

/// Containment limits for a translate gesture.
///
/// Each edge may move between the container boundary (offset 0) and the
/// point where the opposite edge would cross its boundary.
pub fn drag_limits(container: Size, width: f64, height: f64) -> EdgeLimits {
    let horizontal = Bound::new(Some(0.0), Some(container.width - width));
    let vertical = Bound::new(Some(0.0), Some(container.height - height));
    EdgeLimits {
        left: horizontal,
        right: horizontal,
        top: vertical,
        bottom: vertical,
    }
}

/// Limits for a resize gesture from the given handle.
///
/// An edge may move inward at most until the rectangle reaches its minimum
/// size; outward it is capped at the container boundary only when
/// containment is enabled. With aspect lock, the minimums are first reshaped
/// so the more restrictive user minimum wins under the ratio, and mid-edge
/// handles get tighter bounds on the orthogonal edge pair derived from the
/// other axis's slack.
pub fn resize_limits(snap: &Snapshot, handle: Handle, c: &ResizeConstraints) -> EdgeLimits {
    // Degenerate ratios (zero width or height at press time) disable every
    // aspect-derived adjustment for the gesture.
    let aspect = snap.aspect.filter(|a| a.is_finite() && *a > 0.0);

    let mut min_w = c.min_width;
    let mut min_h = c.min_height;
    if c.keep_aspect {
        if let Some(aspect) = aspect {
            if min_w / min_h > aspect {
                min_h = min_w / aspect;
            } else {
                min_w = aspect * min_h;
            }
        }
    }

    let parent_min = if c.contained { Some(0.0) } else { None };
    let e = snap.edges;
    let mut limits = EdgeLimits {
        left: Bound::new(parent_min, Some(e.left + (snap.width - min_w))),
        right: Bound::new(parent_min, Some(e.right + (snap.width - min_w))),
        top: Bound::new(parent_min, Some(e.top + (snap.height - min_h))),
        bottom: Bound::new(parent_min, Some(e.bottom + (snap.height - min_h))),
    };

    if c.keep_aspect {
        if let Some(aspect) = aspect {
            let vertical_slack = e.top.min(e.bottom);
            let horizontal_slack = e.left.min(e.right);
            let aspect_left = Bound::new(
                Some(e.left - vertical_slack * aspect * 2.0),
                Some(e.left + ((snap.height - min_h) / 2.0) * aspect * 2.0),
            );
            let aspect_right = Bound::new(
                Some(e.right - vertical_slack * aspect * 2.0),
                Some(e.right + ((snap.height - min_h) / 2.0) * aspect * 2.0),
            );
            let aspect_top = Bound::new(
                Some(e.top - horizontal_slack / aspect * 2.0),
                Some(e.top + ((snap.width - min_w) / 2.0) / aspect * 2.0),
            );
            let aspect_bottom = Bound::new(
                Some(e.bottom - horizontal_slack / aspect * 2.0),
                Some(e.bottom + ((snap.width - min_w) / 2.0) / aspect * 2.0),
            );

            // A mid-edge handle moves one axis and mirrors the other; only
            // the mirrored pair needs the projected bound. Corner handles
            // are corrected after the fact instead.
            if handle.vertical() == VerticalSide::Middle {
                limits.left = limits.left.intersect(&aspect_left);
                limits.right = limits.right.intersect(&aspect_right);
            } else if handle.horizontal() == HorizontalSide::Middle {
                limits.top = limits.top.intersect(&aspect_top);
                limits.bottom = limits.bottom.intersect(&aspect_bottom);
            }
        }
    }

    limits
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn snapshot(left: f64, top: f64, right: f64, bottom: f64, container: Size) -> Snapshot {
        Snapshot::capture(
            Point::ZERO,
            Edges {
                left,
                top,
                right,
                bottom,
            },
            container,
        )
    }

    #[test]
    fn test_clamp_unbounded() {
        assert!((Bound::UNBOUNDED.clamp(-1e9) + 1e9).abs() < f64::EPSILON);
        assert!((Bound::UNBOUNDED.clamp(42.0) - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_one_sided() {
        let min_only = Bound::new(Some(0.0), None);
        assert!((min_only.clamp(-5.0)).abs() < f64::EPSILON);
        assert!((min_only.clamp(5.0) - 5.0).abs() < f64::EPSILON);

        let max_only = Bound::new(None, Some(10.0));
        assert!((max_only.clamp(15.0) - 10.0).abs() < f64::EPSILON);
        assert!((max_only.clamp(-15.0) + 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_intersect_prefers_tighter_sides() {
        let a = Bound::new(Some(0.0), Some(100.0));
        let b = Bound::new(Some(10.0), Some(90.0));
        let c = a.intersect(&b);
        assert_eq!(c.min, Some(10.0));
        assert_eq!(c.max, Some(90.0));
    }

    #[test]
    fn test_intersect_absent_side_yields() {
        let base = Bound::new(None, Some(100.0));
        let tighter = Bound::new(Some(-20.0), Some(120.0));
        let c = base.intersect(&tighter);
        // The absent min takes the other bound's min, even when negative.
        assert_eq!(c.min, Some(-20.0));
        assert_eq!(c.max, Some(100.0));
    }

    #[test]
    fn test_drag_limits() {
        let limits = drag_limits(Size::new(500.0, 400.0), 100.0, 50.0);
        assert_eq!(limits.left.min, Some(0.0));
        assert_eq!(limits.left.max, Some(400.0));
        assert_eq!(limits.right.max, Some(400.0));
        assert_eq!(limits.top.max, Some(350.0));
        assert_eq!(limits.bottom.max, Some(350.0));
    }

    #[test]
    fn test_resize_limits_base() {
        let container = Size::new(500.0, 500.0);
        let snap = snapshot(100.0, 100.0, 300.0, 300.0, container);
        let c = ResizeConstraints {
            min_width: 40.0,
            min_height: 30.0,
            contained: false,
            keep_aspect: false,
        };
        let limits = resize_limits(&snap, Handle::BottomRight, &c);
        // Width 100, height 100: an edge may move inward by dim - min.
        assert_eq!(limits.left.min, None);
        assert_eq!(limits.left.max, Some(160.0));
        assert_eq!(limits.right.max, Some(360.0));
        assert_eq!(limits.top.max, Some(170.0));
        assert_eq!(limits.bottom.max, Some(370.0));
    }

    #[test]
    fn test_resize_limits_containment_floor() {
        let container = Size::new(500.0, 500.0);
        let snap = snapshot(100.0, 100.0, 300.0, 300.0, container);
        let c = ResizeConstraints {
            min_width: 50.0,
            min_height: 50.0,
            contained: true,
            keep_aspect: false,
        };
        let limits = resize_limits(&snap, Handle::TopLeft, &c);
        assert_eq!(limits.left.min, Some(0.0));
        assert_eq!(limits.top.min, Some(0.0));
        assert_eq!(limits.right.min, Some(0.0));
        assert_eq!(limits.bottom.min, Some(0.0));
    }

    #[test]
    fn test_aspect_reshapes_minimums() {
        let container = Size::new(500.0, 500.0);
        // 200x100 rectangle, ratio 2.
        let snap = snapshot(100.0, 100.0, 200.0, 300.0, container);
        let c = ResizeConstraints {
            min_width: 50.0,
            min_height: 50.0,
            contained: false,
            keep_aspect: true,
        };
        let limits = resize_limits(&snap, Handle::BottomRight, &c);
        // min_w/min_h = 1 < ratio 2, so min_w becomes 2 * 50 = 100:
        // left.max = left + (width - 100) = 200.
        assert_eq!(limits.left.max, Some(200.0));
        // min_h stays 50: top.max = top + (height - 50) = 150.
        assert_eq!(limits.top.max, Some(150.0));
    }

    #[test]
    fn test_mid_handle_tightens_orthogonal_pair_only() {
        let container = Size::new(500.0, 500.0);
        let snap = snapshot(100.0, 100.0, 300.0, 300.0, container);
        let c = ResizeConstraints {
            min_width: 50.0,
            min_height: 50.0,
            contained: false,
            keep_aspect: true,
        };
        // Square rectangle, ratio 1: middle-right projects vertical slack
        // into the horizontal bounds.
        let mid = resize_limits(&snap, Handle::MiddleRight, &c);
        // left.min picks up min(top, bottom) * 2 = 200 below the edge.
        assert_eq!(mid.left.min, Some(-100.0));
        assert_eq!(mid.left.max, Some(150.0));
        // Top and bottom keep the base bounds.
        assert_eq!(mid.top.min, None);
        assert_eq!(mid.top.max, Some(150.0));

        // Corner handles keep the base limits unmodified.
        let corner = resize_limits(&snap, Handle::BottomRight, &c);
        assert_eq!(corner.left.min, None);
        assert_eq!(corner.left.max, Some(150.0));
    }

    #[test]
    fn test_edge_limits_clamp_is_per_edge() {
        let limits = EdgeLimits {
            left: Bound::new(Some(0.0), Some(10.0)),
            right: Bound::UNBOUNDED,
            top: Bound::new(Some(5.0), None),
            bottom: Bound::new(None, Some(20.0)),
        };
        let clamped = limits.clamp(Edges {
            left: -4.0,
            right: 99.0,
            top: 1.0,
            bottom: 30.0,
        });
        assert!((clamped.left).abs() < f64::EPSILON);
        assert!((clamped.right - 99.0).abs() < f64::EPSILON);
        assert!((clamped.top - 5.0).abs() < f64::EPSILON);
        assert!((clamped.bottom - 20.0).abs() < f64::EPSILON);
    }
}
