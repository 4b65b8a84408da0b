//! The drag/resize engine.

use crate::aspect::correct_aspect;
use crate::config::{Axis, ConfigError, Extent, RectConfig, ZIndex};
use crate::event::RectEvent;
use crate::gesture::{Gesture, Snapshot};
use crate::handle::{Handle, HorizontalSide, VerticalSide};
use crate::limits::{drag_limits, resize_limits, EdgeLimits, ResizeConstraints};
use crate::rect::{Edges, RectGeometry};
use crate::snap::{snap_edge_leading, snap_edge_trailing, snap_translation};
use kurbo::{Point, Size, Vec2};
use uuid::Uuid;

/// Interactive rectangle inside a bounded container.
///
/// The engine owns the authoritative edge offsets and advances them in
/// response to pointer gestures (translate, or resize from one of eight
/// handles) and to externally driven property changes, which run through
/// the same constraint pipeline as a synthetic gesture. All computation is
/// synchronous; lifecycle notifications are queued and drained with
/// [`poll_events`](DragRect::poll_events).
#[derive(Debug, Clone)]
pub struct DragRect {
    id: Uuid,
    config: RectConfig,
    container: Size,
    edges: Edges,
    active: bool,
    gesture: Gesture,
    snapshot: Snapshot,
    limits: EdgeLimits,
    /// Press position awaiting click detection.
    pressed: Option<Point>,
    /// Whether the current press committed any movement.
    moved: bool,
    events: Vec<RectEvent>,
}

impl DragRect {
    /// Create an engine for a rectangle at `position` inside `container`.
    ///
    /// `width` and `height` resolve [`Extent::FitContent`] against the
    /// caller-measured `content` size. The configuration is validated; the
    /// engine never sees out-of-range constraint values.
    pub fn new(
        config: RectConfig,
        container: Size,
        position: Point,
        width: Extent,
        height: Extent,
        content: Size,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let size = Size::new(
            width.resolve(content.width),
            height.resolve(content.height),
        );
        let edges = Edges::from_position_size(container, position, size);
        let id = Uuid::new_v4();
        log::debug!(
            "dragrect {id}: mounted at ({}, {}) size {}x{} in {}x{}",
            position.x,
            position.y,
            size.width,
            size.height,
            container.width,
            container.height
        );
        Ok(DragRect {
            id,
            active: config.active,
            config,
            container,
            edges,
            gesture: Gesture::Idle,
            snapshot: Snapshot::zeroed(),
            limits: EdgeLimits::unbounded(),
            pressed: None,
            moved: false,
            events: Vec::new(),
        })
    }

    /// Stable identity of this engine instance.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &RectConfig {
        &self.config
    }

    pub fn container(&self) -> Size {
        self.container
    }

    /// Current edge offsets.
    pub fn edges(&self) -> Edges {
        self.edges
    }

    pub fn left(&self) -> f64 {
        self.edges.left
    }

    pub fn top(&self) -> f64 {
        self.edges.top
    }

    pub fn right(&self) -> f64 {
        self.edges.right
    }

    pub fn bottom(&self) -> f64 {
        self.edges.bottom
    }

    pub fn width(&self) -> f64 {
        self.edges.width(self.container)
    }

    pub fn height(&self) -> f64 {
        self.edges.height(self.container)
    }

    /// The committed geometry in whole units.
    pub fn rect(&self) -> RectGeometry {
        self.edges.to_geometry(self.container)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Stacking order for the host to apply.
    pub fn z_index(&self) -> ZIndex {
        self.config.z_index
    }

    /// Drain the queued lifecycle notifications.
    pub fn poll_events(&mut self) -> Vec<RectEvent> {
        std::mem::take(&mut self.events)
    }

    /// Change the activation state, notifying the host on transitions.
    pub fn set_active(&mut self, active: bool) {
        if self.active == active {
            return;
        }
        self.active = active;
        self.events.push(if active {
            RectEvent::Activated
        } else {
            RectEvent::Deactivated
        });
    }

    /// Replace the configuration. Rejected wholesale when invalid; the
    /// activation state follows the new config.
    pub fn set_config(&mut self, config: RectConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let active = config.active;
        self.config = config;
        self.set_active(active);
        Ok(())
    }

    /// A press on the rectangle body.
    ///
    /// Activates the rectangle (unless activation is suppressed), arms click
    /// detection, and begins a translate gesture when dragging is enabled.
    pub fn press(&mut self, pointer: Point) {
        if !self.config.prevent_activation {
            self.set_active(true);
        }
        self.pressed = Some(pointer);
        self.moved = false;
        self.begin_translate(pointer, false);
    }

    /// A press on a resize handle.
    pub fn press_handle(&mut self, handle: Handle, pointer: Point) {
        if !self.config.resizable || !self.active || !self.config.handle_enabled(handle) {
            return;
        }
        self.begin_resize(handle, pointer, false);
    }

    /// Process a pointer sample. Silent no-op while idle.
    pub fn pointer_move(&mut self, pointer: Point) {
        if self.gesture.is_idle() {
            return;
        }
        let delta = Vec2::new(
            (self.snapshot.pointer.x - pointer.x) / self.config.scale_x,
            (self.snapshot.pointer.y - pointer.y) / self.config.scale_y,
        );
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Translating => {
                let delta = match self.config.axis {
                    Axis::X => Vec2::new(delta.x, 0.0),
                    Axis::Y => Vec2::new(0.0, delta.y),
                    Axis::None => return,
                    Axis::Both => delta,
                };
                self.apply_translate(delta);
            }
            Gesture::Resizing(handle) => self.apply_resize(handle, delta),
        }
    }

    /// End the active gesture. Release and the pointer leaving the tracked
    /// surface are treated identically; the last committed geometry is kept.
    pub fn release(&mut self) {
        self.finish_gesture();
        if let Some(position) = self.pressed.take() {
            if !self.moved {
                self.events.push(RectEvent::Clicked { position });
            }
        }
        self.moved = false;
    }

    /// Externally drive the position (two-way binding). Runs the same
    /// constraint pipeline as a pointer drag, as one atomic synthetic
    /// gesture. Ignored while a real gesture is active.
    pub fn set_position(&mut self, position: Point) {
        if !self.gesture.is_idle() {
            return;
        }
        let delta = Vec2::new(self.edges.left - position.x, self.edges.top - position.y);
        if delta.x == 0.0 && delta.y == 0.0 {
            return;
        }
        let pointer = Point::new(self.edges.left, self.edges.top);
        if !self.begin_translate(pointer, true) {
            return;
        }
        self.apply_translate(delta);
        self.finish_gesture();
    }

    /// Externally drive the width via a synthetic middle-right resize.
    pub fn set_width(&mut self, width: f64) {
        if !self.gesture.is_idle() {
            return;
        }
        let current = self.width();
        if width == current {
            return;
        }
        let pointer = Point::new(self.edges.right, self.edges.top + self.height() / 2.0);
        if !self.begin_resize(Handle::MiddleRight, pointer, true) {
            return;
        }
        self.apply_resize(Handle::MiddleRight, Vec2::new(current - width, 0.0));
        self.finish_gesture();
    }

    /// Externally drive the height via a synthetic bottom-middle resize.
    pub fn set_height(&mut self, height: f64) {
        if !self.gesture.is_idle() {
            return;
        }
        let current = self.height();
        if height == current {
            return;
        }
        let pointer = Point::new(self.edges.left + self.width() / 2.0, self.edges.bottom);
        if !self.begin_resize(Handle::BottomMiddle, pointer, true) {
            return;
        }
        self.apply_resize(Handle::BottomMiddle, Vec2::new(0.0, current - height));
        self.finish_gesture();
    }

    /// Externally drive both dimensions.
    pub fn set_size(&mut self, size: Size) {
        self.set_width(size.width);
        self.set_height(size.height);
    }

    /// Update the container dimensions between gestures. The rectangle
    /// keeps its position and size; the far-edge offsets are recomputed.
    pub fn set_container(&mut self, container: Size) {
        if !self.gesture.is_idle() {
            log::warn!(
                "dragrect {}: container change ignored during an active gesture",
                self.id
            );
            return;
        }
        let width = self.width();
        let height = self.height();
        self.edges.right = container.width - width - self.edges.left;
        self.edges.bottom = container.height - height - self.edges.top;
        self.container = container;
    }

    fn begin_translate(&mut self, pointer: Point, forced: bool) -> bool {
        if !self.gesture.is_idle() {
            log::debug!("dragrect {}: translate begin rejected, gesture active", self.id);
            return false;
        }
        if !forced && !(self.config.draggable && self.active) {
            return false;
        }
        self.snapshot = Snapshot::capture(pointer, self.edges, self.container);
        self.limits = if self.config.contained {
            drag_limits(self.container, self.snapshot.width, self.snapshot.height)
        } else {
            EdgeLimits::unbounded()
        };
        self.gesture = Gesture::Translating;
        self.events.push(RectEvent::DragStarted(self.rect()));
        log::trace!("dragrect {}: translate started", self.id);
        true
    }

    fn begin_resize(&mut self, handle: Handle, pointer: Point, forced: bool) -> bool {
        if !self.gesture.is_idle() {
            log::debug!("dragrect {}: resize begin rejected, gesture active", self.id);
            return false;
        }
        if !forced && !(self.config.resizable && self.active) {
            return false;
        }
        self.snapshot = Snapshot::capture(pointer, self.edges, self.container);
        self.limits = resize_limits(
            &self.snapshot,
            handle,
            &ResizeConstraints {
                min_width: self.config.min_width,
                min_height: self.config.min_height,
                contained: self.config.contained,
                keep_aspect: self.config.keep_aspect,
            },
        );
        self.gesture = Gesture::Resizing(handle);
        self.events.push(RectEvent::ResizeStarted {
            handle,
            rect: self.rect(),
        });
        log::trace!("dragrect {}: resize started on {}", self.id, handle);
        true
    }

    fn apply_translate(&mut self, delta: Vec2) {
        let snap = self.snapshot;
        let mut edges = Edges {
            top: snap.edges.top - delta.y,
            bottom: snap.edges.bottom + delta.y,
            left: snap.edges.left - delta.x,
            right: snap.edges.right + delta.x,
        };
        if self.config.snap_to_grid {
            edges = snap_translation(
                edges,
                self.container,
                snap.width,
                snap.height,
                self.config.grid_x,
                self.config.grid_y,
            );
        }
        self.edges = self.limits.clamp(edges);
        if delta.x != 0.0 || delta.y != 0.0 {
            self.moved = true;
        }
        self.events.push(RectEvent::Dragging(self.rect()));
    }

    fn apply_resize(&mut self, handle: Handle, delta: Vec2) {
        let snap = self.snapshot;
        let snap_grid = self.config.snap_to_grid;
        let (grid_x, grid_y) = (self.config.grid_x, self.config.grid_y);

        let mut edges = snap.edges;
        match handle.vertical() {
            VerticalSide::Bottom => {
                edges.bottom = snap.edges.bottom + delta.y;
                if snap_grid {
                    edges.bottom = snap_edge_trailing(edges.bottom, self.container.height, grid_y);
                }
            }
            VerticalSide::Top => {
                edges.top = snap.edges.top - delta.y;
                if snap_grid {
                    edges.top = snap_edge_leading(edges.top, grid_y);
                }
            }
            VerticalSide::Middle => {}
        }
        match handle.horizontal() {
            HorizontalSide::Right => {
                edges.right = snap.edges.right + delta.x;
                if snap_grid {
                    edges.right = snap_edge_trailing(edges.right, self.container.width, grid_x);
                }
            }
            HorizontalSide::Left => {
                edges.left = snap.edges.left - delta.x;
                if snap_grid {
                    edges.left = snap_edge_leading(edges.left, grid_x);
                }
            }
            HorizontalSide::Middle => {}
        }

        let mut edges = self.limits.clamp(edges);
        if self.config.keep_aspect {
            // Ratio undefined or degenerate at press time: skip correction.
            if let Some(aspect) = snap.aspect.filter(|a| a.is_finite() && *a > 0.0) {
                edges = correct_aspect(edges, self.container, handle, aspect, &snap);
                // Clamping is the last transform before commit.
                edges = self.limits.clamp(edges);
            }
        }

        self.edges = edges;
        if delta.x != 0.0 || delta.y != 0.0 {
            self.moved = true;
        }
        self.events.push(RectEvent::Resizing(self.rect()));
    }

    /// Commit the gesture end: final notification, neutral snapshot and
    /// limits, back to idle.
    fn finish_gesture(&mut self) {
        match self.gesture {
            Gesture::Translating => {
                let rect = self.rect();
                self.events.push(RectEvent::Dragging(rect));
                self.events.push(RectEvent::DragStopped(rect));
                log::trace!("dragrect {}: translate finished", self.id);
            }
            Gesture::Resizing(_) => {
                let rect = self.rect();
                self.events.push(RectEvent::Resizing(rect));
                self.events.push(RectEvent::ResizeStopped(rect));
                log::trace!("dragrect {}: resize finished", self.id);
            }
            Gesture::Idle => {}
        }
        self.gesture = Gesture::Idle;
        self.snapshot = Snapshot::zeroed();
        self.limits = EdgeLimits::unbounded();
    }
}
