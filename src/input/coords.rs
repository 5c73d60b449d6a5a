//! Coordinate conversion for drag operations.
//!
//! Centralizes the pointer-to-offset formulas so the mouse-down and
//! mouse-move handlers share one definition of each edge's arithmetic.

use crate::options::MoveOptions;
use gpui::{Pixels, Point, Size, point, px};

/// Which viewport edges the target's offsets are measured from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anchor {
    pub x_by_right: bool,
    pub y_by_bottom: bool,
}

impl From<&MoveOptions> for Anchor {
    fn from(options: &MoveOptions) -> Self {
        Self {
            x_by_right: options.x_by_right,
            y_by_bottom: options.y_by_bottom,
        }
    }
}

/// Layout measurements needed for a positional update
#[derive(Debug, Clone, Copy)]
pub struct ViewportContext {
    pub viewport: Size<Pixels>,
    pub target: Size<Pixels>,
}

impl ViewportContext {
    #[inline]
    pub fn new(viewport: Size<Pixels>, target: Size<Pixels>) -> Self {
        Self { viewport, target }
    }

    /// Largest in-viewport offset on each axis
    #[inline]
    pub fn max_offset(&self) -> Point<Pixels> {
        point(
            px(f32::from(self.viewport.width) - f32::from(self.target.width)),
            px(f32::from(self.viewport.height) - f32::from(self.target.height)),
        )
    }
}

pub struct OffsetConverter;

impl OffsetConverter {
    /// Pointer distance from the target's left/top edge at drag start
    #[inline]
    pub fn drag_origin(pointer: Point<Pixels>, target_offset: Point<Pixels>) -> Point<Pixels> {
        point(pointer.x - target_offset.x, pointer.y - target_offset.y)
    }

    /// Offset that keeps the grabbed point under the pointer, measured from
    /// the edges named by `anchor`
    #[inline]
    pub fn pointer_to_offset(
        pointer: Point<Pixels>,
        origin: Point<Pixels>,
        anchor: Anchor,
        ctx: &ViewportContext,
    ) -> Point<Pixels> {
        let (pointer_x, pointer_y) = (f32::from(pointer.x), f32::from(pointer.y));
        let (origin_x, origin_y) = (f32::from(origin.x), f32::from(origin.y));

        let x = if anchor.x_by_right {
            f32::from(ctx.viewport.width) - pointer_x - (f32::from(ctx.target.width) - origin_x)
        } else {
            pointer_x - origin_x
        };
        let y = if anchor.y_by_bottom {
            f32::from(ctx.viewport.height) - pointer_y - (f32::from(ctx.target.height) - origin_y)
        } else {
            pointer_y - origin_y
        };

        point(px(x), px(y))
    }

    /// Keep the offset within `[0, viewport - target]` on each axis.
    ///
    /// The lower bound is applied first, so a target larger than the
    /// viewport ends at the (negative) upper bound instead of panicking the
    /// way `f32::clamp` would.
    #[inline]
    pub fn clamp_to_viewport(offset: Point<Pixels>, ctx: &ViewportContext) -> Point<Pixels> {
        let max = ctx.max_offset();
        point(
            px(clamp_axis(f32::from(offset.x), f32::from(max.x))),
            px(clamp_axis(f32::from(offset.y), f32::from(max.y))),
        )
    }
}

#[inline]
fn clamp_axis(value: f32, max: f32) -> f32 {
    let mut value = value;
    if value < 0.0 {
        value = 0.0;
    }
    if value > max {
        value = max;
    }
    value
}

/// Render a pixel offset as a CSS length
pub fn css_px(value: Pixels) -> String {
    // `+ 0.0` folds -0 into 0
    format!("{}px", f32::from(value) + 0.0)
}
