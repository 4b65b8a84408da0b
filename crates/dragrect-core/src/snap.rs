//! Grid snapping for translation and resize.

use crate::rect::Edges;
use kurbo::Size;

/// Fold an offset past the nearest lower grid line into the signed
/// nearest-line offset: anything beyond half a cell becomes its negative
/// complement.
fn fold_offset(diff: f64, cell: f64) -> f64 {
    if diff > cell / 2.0 {
        diff - cell
    } else {
        diff
    }
}

/// Offset of a leading edge (top/left) past the nearest lower grid line.
fn leading_offset(edge: f64, cell: f64) -> f64 {
    fold_offset(edge - (edge / cell).floor() * cell, cell)
}

/// Offset of a trailing edge (bottom/right) past the nearest lower grid
/// line, measured via its distance from the far container edge.
fn trailing_offset(edge: f64, container_dim: f64, cell: f64) -> f64 {
    let distance = container_dim - edge;
    fold_offset(distance - (distance / cell).floor() * cell, cell)
}

/// Snap a translated rectangle to the grid.
///
/// Per axis, both the leading and the trailing edge compute their offset
/// from the nearest grid line; the anchor with the strictly smaller offset
/// magnitude wins (the leading edge keeps the tie), the chosen offset is
/// subtracted from the anchor, and the opposite edge is recomputed from the
/// container size and the pre-gesture dimension so width and height are
/// preserved.
pub fn snap_translation(
    edges: Edges,
    container: Size,
    width: f64,
    height: f64,
    grid_x: f64,
    grid_y: f64,
) -> Edges {
    let diff_top = leading_offset(edges.top, grid_y);
    let diff_bottom = trailing_offset(edges.bottom, container.height, grid_y);
    let diff_left = leading_offset(edges.left, grid_x);
    let diff_right = trailing_offset(edges.right, container.width, grid_x);

    let align_top = diff_bottom.abs() >= diff_top.abs();
    let align_left = diff_right.abs() >= diff_left.abs();

    let top = edges.top - if align_top { diff_top } else { diff_bottom };
    let left = edges.left - if align_left { diff_left } else { diff_right };

    Edges {
        top,
        bottom: container.height - height - top,
        left,
        right: container.width - width - left,
    }
}

/// Round a leading edge (top/left) to the nearest grid multiple during a
/// resize.
pub fn snap_edge_leading(edge: f64, cell: f64) -> f64 {
    (edge / cell).round() * cell
}

/// Round a trailing edge (bottom/right) during a resize: the distance from
/// the far container edge is rounded, not the offset itself.
pub fn snap_edge_trailing(edge: f64, container_dim: f64, cell: f64) -> f64 {
    container_dim - ((container_dim - edge) / cell).round() * cell
}
