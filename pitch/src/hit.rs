//! Hit-testing pointer positions against board entities.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::board::{Board, EntityId, Item, Line, LineEnd, Selection};
use crate::consts::{HANDLE_HIT_RADIUS, LINE_HIT_RADIUS};
use crate::coords::{CanvasRect, Position};

/// Which part of an entity was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    ItemBody,
    LineBody,
    /// An endpoint handle; only exposed while that line is selected.
    LineEndpoint(LineEnd),
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub id: EntityId,
    pub part: HitPart,
}

/// Test what lies under `pos`.
///
/// Priority mirrors the render stack: the selected line's endpoint handles,
/// then items (the selected item, then latest-placed first), then line
/// bodies (the selected line, then latest-drawn first).
#[must_use]
pub fn hit_test(pos: Position, board: &Board, selection: Option<Selection>, rect: CanvasRect) -> Option<Hit> {
    let selected_line = match selection {
        Some(Selection::Line(id)) => board.line(id),
        _ => None,
    };

    if let Some(line) = selected_line {
        for end in [LineEnd::Start, LineEnd::End] {
            if pos.distance_to(line.point(end)) <= HANDLE_HIT_RADIUS {
                return Some(Hit { id: line.id, part: HitPart::LineEndpoint(end) });
            }
        }
    }

    if let Some(Selection::Item(id)) = selection {
        if let Some(item) = board.item(id) {
            if item_contains(item, pos, rect) {
                return Some(Hit { id: item.id, part: HitPart::ItemBody });
            }
        }
    }
    for item in board.items.iter().rev() {
        if item_contains(item, pos, rect) {
            return Some(Hit { id: item.id, part: HitPart::ItemBody });
        }
    }

    if let Some(line) = selected_line {
        if segment_distance(pos, line) <= LINE_HIT_RADIUS {
            return Some(Hit { id: line.id, part: HitPart::LineBody });
        }
    }
    for line in board.lines.iter().rev() {
        if segment_distance(pos, line) <= LINE_HIT_RADIUS {
            return Some(Hit { id: line.id, part: HitPart::LineBody });
        }
    }

    None
}

/// Whether `pos` falls inside the item's rendered box: the style's pixel
/// extent centered on the item, converted to per-axis normalized units
/// through the live canvas rect. Rotation is ignored — markers are
/// near-square except the ladder, where the axis-aligned box is close
/// enough to the rendered footprint.
fn item_contains(item: &Item, pos: Position, rect: CanvasRect) -> bool {
    let style = item.kind.style();
    let (half_w, half_h) = rect.to_board_delta(style.width / 2.0, style.height / 2.0);
    if half_w <= 0.0 || half_h <= 0.0 {
        return false;
    }
    (pos.x() - item.pos.x()).abs() <= half_w && (pos.y() - item.pos.y()).abs() <= half_h
}

/// Distance from `pos` to the closest point of the segment, normalized units.
fn segment_distance(pos: Position, line: &Line) -> f64 {
    let (x, y) = (pos.x(), pos.y());
    let (x1, y1) = (line.start.x(), line.start.y());
    let (dx, dy) = (line.end.x() - x1, line.end.y() - y1);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return pos.distance_to(line.start);
    }
    let t = (((x - x1) * dx + (y - y1) * dy) / len_sq).clamp(0.0, 1.0);
    let (cx, cy) = (x1 + t * dx, y1 + t * dy);
    ((x - cx).powi(2) + (y - cy).powi(2)).sqrt()
}
