//! Events emitted to the hosting application.

use crate::handle::Handle;
use crate::rect::RectGeometry;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Lifecycle notification produced by the engine.
///
/// Events are queued as operations run and drained with
/// [`poll_events`](crate::DragRect::poll_events). Stop events are always
/// preceded by a final in-progress event carrying the same committed
/// geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RectEvent {
    /// A press was released without ever becoming a drag.
    Clicked { position: Point },
    /// The rectangle entered the interactive-enabled state.
    Activated,
    /// The rectangle left the interactive-enabled state.
    Deactivated,
    /// A translate gesture began.
    DragStarted(RectGeometry),
    /// Geometry committed during a translate gesture.
    Dragging(RectGeometry),
    /// A translate gesture ended.
    DragStopped(RectGeometry),
    /// A resize gesture began on the given handle.
    ResizeStarted { handle: Handle, rect: RectGeometry },
    /// Geometry committed during a resize gesture.
    Resizing(RectGeometry),
    /// A resize gesture ended.
    ResizeStopped(RectGeometry),
}
