//! Directive-wide constants.
//!
//! Centralizes attribute names and style values so the handlers and the
//! headless host agree on them.

// ============================================================================
// Declarative Attributes
// ============================================================================

/// Presence flag: the target may leave the viewport
pub const ATTR_MOVE_OUT: &str = "move-out";

/// Presence flag: horizontal offset is measured from the viewport's right edge
pub const ATTR_X_BY_RIGHT: &str = "move-x-right";

/// Presence flag: vertical offset is measured from the viewport's bottom edge
pub const ATTR_Y_BY_BOTTOM: &str = "move-y-bottom";

/// Cursor applied to the target while dragging
pub const ATTR_CURSOR: &str = "move-cursor";

/// Presence flag on the element under the pointer that suppresses a drag
pub const ATTR_MOVE_DISABLED: &str = "move-disabled";

// ============================================================================
// Style Values
// ============================================================================

/// Cursor used when `move-cursor` is absent or empty
pub const DEFAULT_CURSOR: &str = "cursor";

/// Positioning scheme forced on the target at mount
pub const POSITION_FIXED: &str = "fixed";

/// Value that resets a style property to its inherited value
pub const STYLE_UNSET: &str = "";

// ============================================================================
// Profiling
// ============================================================================

/// Warn when a single mouse-move update takes longer than this
pub const MOVE_SLOW_THRESHOLD_MS: f64 = 4.0;
