//! Gesture lifecycle state.

use crate::handle::Handle;
use crate::rect::Edges;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// The active gesture, if any.
///
/// Exactly one gesture may run at a time. A new gesture can only begin from
/// `Idle`, and every gesture returns to `Idle` before another may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The whole rectangle is being dragged.
    Translating,
    /// One handle is being dragged.
    Resizing(Handle),
}

impl Gesture {
    pub fn is_idle(self) -> bool {
        self == Gesture::Idle
    }

    pub fn is_translating(self) -> bool {
        self == Gesture::Translating
    }

    pub fn is_resizing(self) -> bool {
        matches!(self, Gesture::Resizing(_))
    }
}

/// Immutable capture of rectangle and pointer state at gesture start.
///
/// Every move during the gesture is computed from this snapshot plus the
/// cumulative pointer delta, never from the previous move's output, so
/// rounding can not accumulate across move events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Pointer position at press time, in screen units.
    pub pointer: Point,
    /// The rectangle's edges at press time.
    pub edges: Edges,
    /// Width at press time.
    pub width: f64,
    /// Height at press time.
    pub height: f64,
    /// Width/height ratio at press time; `None` when height is zero
    /// (ratio undefined, aspect correction is skipped for the gesture).
    pub aspect: Option<f64>,
}

impl Snapshot {
    /// The neutral snapshot held while no gesture is active.
    pub fn zeroed() -> Self {
        Snapshot {
            pointer: Point::ZERO,
            edges: Edges::ZERO,
            width: 0.0,
            height: 0.0,
            aspect: None,
        }
    }

    /// Capture the gesture-start state.
    pub fn capture(pointer: Point, edges: Edges, container: Size) -> Self {
        let width = edges.width(container);
        let height = edges.height(container);
        let aspect = if height == 0.0 {
            None
        } else {
            Some(width / height)
        };
        Snapshot {
            pointer,
            edges,
            width,
            height,
            aspect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture() {
        let container = Size::new(500.0, 500.0);
        let edges = Edges {
            left: 100.0,
            top: 100.0,
            right: 200.0,
            bottom: 300.0,
        };
        let snap = Snapshot::capture(Point::new(10.0, 20.0), edges, container);
        assert!((snap.width - 200.0).abs() < f64::EPSILON);
        assert!((snap.height - 100.0).abs() < f64::EPSILON);
        assert!((snap.aspect.unwrap() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_height_has_no_aspect() {
        let container = Size::new(500.0, 500.0);
        let edges = Edges {
            left: 0.0,
            top: 250.0,
            right: 0.0,
            bottom: 250.0,
        };
        let snap = Snapshot::capture(Point::ZERO, edges, container);
        assert_eq!(snap.aspect, None);
    }

    #[test]
    fn test_gesture_predicates() {
        assert!(Gesture::Idle.is_idle());
        assert!(Gesture::Translating.is_translating());
        assert!(Gesture::Resizing(Handle::TopLeft).is_resizing());
        assert!(!Gesture::Resizing(Handle::TopLeft).is_idle());
    }
}
