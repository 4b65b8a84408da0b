//! Aspect-ratio preserving correction for resize gestures.

use crate::gesture::Snapshot;
use crate::handle::{Handle, HorizontalSide, VerticalSide};
use crate::rect::Edges;
use kurbo::Size;

/// Adjust candidate edges so the width/height ratio matches the snapshot
/// ratio.
///
/// Mid-edge handles keep the moved axis as requested and split the
/// compensating delta evenly across the orthogonal edge pair. Corner handles
/// recompute the overshooting dimension from the other one and realize it by
/// moving the handle's own edge, leaving the edge opposite the handle fixed.
pub fn correct_aspect(
    edges: Edges,
    container: Size,
    handle: Handle,
    aspect: f64,
    snap: &Snapshot,
) -> Edges {
    let mut e = edges;
    let mut width = e.width(container);
    let mut height = e.height(container);

    if handle.horizontal() == HorizontalSide::Middle {
        // Vertical resize: compensate horizontally, split across both sides.
        let delta_height = height - snap.height;
        e.left -= (delta_height * aspect) / 2.0;
        e.right -= (delta_height * aspect) / 2.0;
    } else if handle.vertical() == VerticalSide::Middle {
        // Horizontal resize: compensate vertically, split across both sides.
        let delta_width = width - snap.width;
        e.top -= (delta_width / aspect) / 2.0;
        e.bottom -= (delta_width / aspect) / 2.0;
    } else if width / height > aspect {
        // Too wide: width follows height, the far horizontal edge moves.
        width = aspect * height;
        if handle.horizontal() == HorizontalSide::Left {
            e.left = container.width - e.right - width;
        } else {
            e.right = container.width - e.left - width;
        }
    } else {
        // Too tall: height follows width, the far vertical edge moves.
        height = width / aspect;
        if handle.vertical() == VerticalSide::Top {
            e.top = container.height - e.bottom - height;
        } else {
            e.bottom = container.height - e.top - height;
        }
    }

    e
}
