//! Resize handle definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vertical component of a handle position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerticalSide {
    Top,
    Middle,
    Bottom,
}

/// Horizontal component of a handle position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizontalSide {
    Left,
    Middle,
    Right,
}

/// A resize handle on the rectangle frame.
///
/// Eight positions: four corners and four edge midpoints. The center
/// (middle/middle) is not a handle, so invalid combinations cannot be
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    TopLeft,
    TopMiddle,
    TopRight,
    MiddleLeft,
    MiddleRight,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl Handle {
    /// All eight handles, in the order the original widget renders them.
    pub const ALL: [Handle; 8] = [
        Handle::TopLeft,
        Handle::TopMiddle,
        Handle::TopRight,
        Handle::MiddleRight,
        Handle::BottomRight,
        Handle::BottomMiddle,
        Handle::BottomLeft,
        Handle::MiddleLeft,
    ];

    /// The vertical component (which of top/bottom moves during a resize).
    pub fn vertical(self) -> VerticalSide {
        match self {
            Handle::TopLeft | Handle::TopMiddle | Handle::TopRight => VerticalSide::Top,
            Handle::MiddleLeft | Handle::MiddleRight => VerticalSide::Middle,
            Handle::BottomLeft | Handle::BottomMiddle | Handle::BottomRight => {
                VerticalSide::Bottom
            }
        }
    }

    /// The horizontal component (which of left/right moves during a resize).
    pub fn horizontal(self) -> HorizontalSide {
        match self {
            Handle::TopLeft | Handle::MiddleLeft | Handle::BottomLeft => HorizontalSide::Left,
            Handle::TopMiddle | Handle::BottomMiddle => HorizontalSide::Middle,
            Handle::TopRight | Handle::MiddleRight | Handle::BottomRight => HorizontalSide::Right,
        }
    }

    /// Whether this handle moves a vertical edge (top or bottom).
    pub fn moves_vertically(self) -> bool {
        self.vertical() != VerticalSide::Middle
    }

    /// Whether this handle moves a horizontal edge (left or right).
    pub fn moves_horizontally(self) -> bool {
        self.horizontal() != HorizontalSide::Middle
    }

    /// Whether this handle is a corner (moves both axes).
    pub fn is_corner(self) -> bool {
        self.moves_vertically() && self.moves_horizontally()
    }

    /// The two-letter code hosts use to name handles ("tl", "bm", ...).
    pub fn code(self) -> &'static str {
        match self {
            Handle::TopLeft => "tl",
            Handle::TopMiddle => "tm",
            Handle::TopRight => "tr",
            Handle::MiddleLeft => "ml",
            Handle::MiddleRight => "mr",
            Handle::BottomLeft => "bl",
            Handle::BottomMiddle => "bm",
            Handle::BottomRight => "br",
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown handle code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown handle code: {0:?}")]
pub struct ParseHandleError(pub String);

impl FromStr for Handle {
    type Err = ParseHandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tl" => Ok(Handle::TopLeft),
            "tm" => Ok(Handle::TopMiddle),
            "tr" => Ok(Handle::TopRight),
            "ml" => Ok(Handle::MiddleLeft),
            "mr" => Ok(Handle::MiddleRight),
            "bl" => Ok(Handle::BottomLeft),
            "bm" => Ok(Handle::BottomMiddle),
            "br" => Ok(Handle::BottomRight),
            _ => Err(ParseHandleError(s.to_string())),
        }
    }
}
