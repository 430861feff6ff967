//! Resolve indicator placement rules inside a parent area

use pagedot_core::{PlacementParams, PlacementRule};
use ratatui::layout::Rect;

/// Margins converted to terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellMargins {
    pub left: u16,
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
}

impl CellMargins {
    /// Convert surface-unit margins using the painter scale.
    /// A cell is `scale` units wide and `2 * scale` units tall.
    pub fn from_params(params: &PlacementParams, scale: f32) -> Self {
        let scale = if scale > 0.0 { scale } else { 1.0 };
        let cells = |units: i32, per_cell: f32| (units.max(0) as f32 / per_cell).round() as u16;
        Self {
            left: cells(params.left_margin, scale),
            top: cells(params.top_margin, scale * 2.0),
            right: cells(params.right_margin, scale),
            bottom: cells(params.bottom_margin, scale * 2.0),
        }
    }
}

/// Place a `width` x `height` box inside `parent`.
///
/// Without rules the box sits at the top-left corner (after margins).
/// Aligning to both opposite edges stretches the box between them.
pub fn place(
    parent: Rect,
    width: u16,
    height: u16,
    rules: &[PlacementRule],
    margins: CellMargins,
) -> Rect {
    let has = |rule: PlacementRule| rules.contains(&rule);
    let center_h = has(PlacementRule::CenterHorizontal) || has(PlacementRule::CenterInParent);
    let center_v = has(PlacementRule::CenterVertical) || has(PlacementRule::CenterInParent);

    let (x, width) = resolve_axis(
        parent.x,
        parent.width,
        width,
        margins.left,
        margins.right,
        has(PlacementRule::AlignParentLeft),
        has(PlacementRule::AlignParentRight),
        center_h,
    );
    let (y, height) = resolve_axis(
        parent.y,
        parent.height,
        height,
        margins.top,
        margins.bottom,
        has(PlacementRule::AlignParentTop),
        has(PlacementRule::AlignParentBottom),
        center_v,
    );

    Rect::new(x, y, width, height).intersection(parent)
}

#[allow(clippy::too_many_arguments)]
fn resolve_axis(
    start: u16,
    available: u16,
    size: u16,
    margin_start: u16,
    margin_end: u16,
    align_start: bool,
    align_end: bool,
    center: bool,
) -> (u16, u16) {
    let size = size.min(available);
    let end = start.saturating_add(available);

    if align_start && align_end {
        let from = start.saturating_add(margin_start);
        let to = end.saturating_sub(margin_end).max(from);
        return (from, to - from);
    }
    if align_end {
        return (end.saturating_sub(margin_end).saturating_sub(size).max(start), size);
    }
    if center && !align_start {
        return (start + (available - size) / 2, size);
    }
    (start.saturating_add(margin_start).min(end.saturating_sub(size)), size)
}
