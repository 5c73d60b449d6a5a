//! Per-handle options read from declarative attributes.

use crate::constants::{ATTR_CURSOR, ATTR_MOVE_OUT, ATTR_X_BY_RIGHT, ATTR_Y_BY_BOTTOM, DEFAULT_CURSOR};
use crate::error::MoveResult;
use crate::host::{Host, NodeId};
use serde::{Deserialize, Serialize};

/// How a handle moves its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveOptions {
    /// Allow the target to be positioned outside the viewport
    pub move_out: bool,
    /// Express the horizontal offset as distance from the viewport's right edge
    pub x_by_right: bool,
    /// Express the vertical offset as distance from the viewport's bottom edge
    pub y_by_bottom: bool,
    /// Cursor applied to the target while dragging
    pub cursor: String,
}

impl Default for MoveOptions {
    fn default() -> Self {
        Self {
            move_out: false,
            x_by_right: false,
            y_by_bottom: false,
            cursor: DEFAULT_CURSOR.to_string(),
        }
    }
}

impl MoveOptions {
    /// Read options from the handle's attributes.
    ///
    /// Flags are presence-only. An absent or empty `move-cursor` falls back
    /// to the default cursor.
    pub fn from_attributes(host: &impl Host, handle: NodeId) -> Self {
        let cursor = host
            .attribute(handle, ATTR_CURSOR)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CURSOR.to_string());

        Self {
            move_out: host.has_attribute(handle, ATTR_MOVE_OUT),
            x_by_right: host.has_attribute(handle, ATTR_X_BY_RIGHT),
            y_by_bottom: host.has_attribute(handle, ATTR_Y_BY_BOTTOM),
            cursor,
        }
    }

    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> MoveResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_move_out(mut self, move_out: bool) -> Self {
        self.move_out = move_out;
        self
    }

    pub fn with_x_by_right(mut self, x_by_right: bool) -> Self {
        self.x_by_right = x_by_right;
        self
    }

    pub fn with_y_by_bottom(mut self, y_by_bottom: bool) -> Self {
        self.y_by_bottom = y_by_bottom;
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = cursor.into();
        self
    }
}
