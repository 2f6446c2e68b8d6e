// Resize handles
//
// Hit zones and drawing for the top/bottom edges of an event block.
// Top handle adjusts the start slot, bottom handle the end slot.

use egui::{Color32, CursorIcon, Pos2, Rect, Stroke, Vec2};

/// Which edge of the event is being resized
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeHandle {
    /// Top edge - adjusts the start slot
    Top,
    /// Bottom edge - adjusts the end slot
    Bottom,
}

impl ResizeHandle {
    /// Returns the cursor icon for this handle
    pub fn cursor_icon(&self) -> CursorIcon {
        CursorIcon::ResizeVertical
    }
}

/// Height of the resize hit zone at each edge
pub const HANDLE_ZONE: f32 = 8.0;
/// Visual size of the handle circle
pub const HANDLE_VISUAL_SIZE: f32 = 6.0;

/// Hit zones for the two handles of an event block
pub struct HandleRects {
    pub top: Rect,
    pub bottom: Rect,
}

impl HandleRects {
    /// Create handle rects for an event block.
    ///
    /// Short blocks split into top and bottom halves so both edges stay
    /// reachable; taller blocks use a fixed zone at each edge.
    pub fn for_block(block_rect: Rect) -> Self {
        let zone_height = (block_rect.height() / 2.0).min(HANDLE_ZONE);
        Self {
            top: Rect::from_min_size(
                block_rect.left_top(),
                Vec2::new(block_rect.width(), zone_height),
            ),
            bottom: Rect::from_min_size(
                Pos2::new(block_rect.left(), block_rect.bottom() - zone_height),
                Vec2::new(block_rect.width(), zone_height),
            ),
        }
    }

    /// Check if a point hits a handle and return which one
    pub fn hit_test(&self, pos: Pos2) -> Option<ResizeHandle> {
        if self.top.contains(pos) {
            Some(ResizeHandle::Top)
        } else if self.bottom.contains(pos) {
            Some(ResizeHandle::Bottom)
        } else {
            None
        }
    }
}

/// Draw the handle circles on a block's edges
pub fn draw_handles(painter: &egui::Painter, block_rect: Rect, color: Color32) {
    let inset = HANDLE_VISUAL_SIZE / 2.0 + 2.0;
    let centers = [
        Pos2::new(block_rect.center().x, block_rect.top() + inset),
        Pos2::new(block_rect.center().x, block_rect.bottom() - inset),
    ];
    for center in centers {
        painter.circle_filled(center, HANDLE_VISUAL_SIZE / 2.0, Color32::WHITE);
        painter.circle_stroke(
            center,
            HANDLE_VISUAL_SIZE / 2.0,
            Stroke::new(1.0, color.linear_multiply(0.6)),
        );
    }
}
