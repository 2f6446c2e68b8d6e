// Day grid view
//
// Renders the time gutter, hour rules, and event blocks, and feeds raw
// pointer state into the drag controller. Drawing is a pure projection of
// the store; nothing is read back from the painted widgets.

use egui::{Align2, CursorIcon, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use crate::models::event::Event;
use crate::models::grid::{self, GridSpec, TOTAL_SLOTS};
use crate::services::schedule::{ScheduleStore, NO_TITLE_PLACEHOLDER};
use crate::ui_egui::drag::{DragController, ReleaseAction};
use crate::ui_egui::resize::{self, HandleRects};
use crate::ui_egui::views::palette::DayGridPalette;

/// Width of the clock-label column.
const GUTTER_WIDTH: f32 = 56.0;
/// Horizontal inset of event blocks inside the grid.
const BLOCK_INSET: f32 = 6.0;
/// Slots per half-hour rule line.
const HALF_HOUR_SLOTS: usize = 6;

pub struct DayGridView;

impl DayGridView {
    /// Render the grid and process this frame's pointer input. Returns
    /// true when a plain-click creation asks for focus on the title field.
    pub fn show(
        ui: &mut egui::Ui,
        grid: &GridSpec,
        store: &mut ScheduleStore,
        drag: &mut DragController,
    ) -> bool {
        let palette = DayGridPalette::from_ui(ui);
        let mut focus_title = false;
        ui.horizontal_top(|ui| {
            Self::draw_gutter(ui, grid, &palette);
            focus_title = Self::grid_area(ui, grid, store, drag, &palette);
        });
        focus_title
    }

    fn draw_gutter(ui: &mut egui::Ui, grid: &GridSpec, palette: &DayGridPalette) {
        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(GUTTER_WIDTH, grid.grid_height()),
            Sense::hover(),
        );
        let painter = ui.painter();
        for hour in 8..=19u32 {
            let slot = (hour as usize - 8) * 12;
            let y = rect.top() + grid.pixels_for_slot(slot);
            painter.text(
                Pos2::new(rect.right() - 6.0, y),
                Align2::RIGHT_CENTER,
                format!("{hour:02}:00"),
                FontId::proportional(12.0),
                palette.gutter_text,
            );
        }
    }

    fn grid_area(
        ui: &mut egui::Ui,
        grid: &GridSpec,
        store: &mut ScheduleStore,
        drag: &mut DragController,
        palette: &DayGridPalette,
    ) -> bool {
        let width = ui.available_width().max(220.0);
        let (rect, _response) =
            ui.allocate_exact_size(Vec2::new(width, grid.grid_height()), Sense::click_and_drag());

        let mut focus_title = false;
        let (pointer, pressed, down, released) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.any_released(),
            )
        });

        // Press starts a gesture, movement drives it, release always ends
        // it (release may land outside the grid rect).
        if pressed {
            if let Some(pos) = pointer.filter(|pos| rect.contains(*pos)) {
                Self::classify_press(rect, grid, store, drag, pos);
            }
        } else if down && drag.is_active() {
            if let Some(pos) = pointer {
                drag.pointer_moved(grid, store, pos.y - rect.top());
            }
        }
        if released && drag.is_active() {
            if drag.release(store) == ReleaseAction::FocusTitle {
                focus_title = true;
            }
        }

        Self::set_hover_cursor(ui, rect, grid, store, drag, pointer);
        Self::draw_grid(ui, rect, grid, store, palette);
        focus_title
    }

    /// Map a press to a gesture: handle, then block body (topmost drawn
    /// block wins), otherwise an empty-grid create.
    fn classify_press(
        rect: Rect,
        grid: &GridSpec,
        store: &mut ScheduleStore,
        drag: &mut DragController,
        pos: Pos2,
    ) {
        let hit = store.events().iter().rev().find_map(|event| {
            let block = Self::block_rect(rect, grid, event);
            block.contains(pos).then_some((event.id, block))
        });
        match hit {
            Some((id, block)) => {
                store.set_active(Some(id));
                match HandleRects::for_block(block).hit_test(pos) {
                    Some(handle) => drag.begin_resize(store, id, handle),
                    None => drag.begin_move(store, id, pos.y - block.top()),
                }
            }
            None => drag.begin_create(store, grid.slot_for_pointer(pos.y - rect.top())),
        }
    }

    fn set_hover_cursor(
        ui: &egui::Ui,
        rect: Rect,
        grid: &GridSpec,
        store: &ScheduleStore,
        drag: &DragController,
        pointer: Option<Pos2>,
    ) {
        if drag.is_active() {
            return;
        }
        let Some(pos) = pointer.filter(|pos| rect.contains(*pos)) else {
            return;
        };
        for event in store.events().iter().rev() {
            let block = Self::block_rect(rect, grid, event);
            if block.contains(pos) {
                let icon = match HandleRects::for_block(block).hit_test(pos) {
                    Some(handle) => handle.cursor_icon(),
                    None => CursorIcon::Grab,
                };
                ui.ctx().output_mut(|o| o.cursor_icon = icon);
                return;
            }
        }
    }

    fn draw_grid(
        ui: &egui::Ui,
        rect: Rect,
        grid: &GridSpec,
        store: &ScheduleStore,
        palette: &DayGridPalette,
    ) {
        let painter = ui.painter_at(rect.expand(1.0));
        painter.rect_filled(rect, Rounding::same(4.0), palette.grid_bg);
        for slot in (0..=TOTAL_SLOTS).step_by(HALF_HOUR_SLOTS) {
            let y = rect.top() + grid.pixels_for_slot(slot);
            let color = if slot % (HALF_HOUR_SLOTS * 2) == 0 {
                palette.hour_line
            } else {
                palette.half_hour_line
            };
            painter.line_segment(
                [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
                Stroke::new(1.0, color),
            );
        }
        painter.rect_stroke(rect, Rounding::same(4.0), Stroke::new(1.0, palette.border));

        let active_id = store.active_id();
        for event in store.events() {
            let block = Self::block_rect(rect, grid, event);
            let selected = active_id == Some(event.id);
            let (fill, border) = if selected {
                (palette.selected_fill, palette.selected_border)
            } else {
                (palette.block_fill, palette.block_border)
            };
            painter.rect_filled(block, Rounding::same(4.0), fill);
            painter.rect_stroke(
                block,
                Rounding::same(4.0),
                Stroke::new(if selected { 2.0 } else { 1.0 }, border),
            );

            let title = if event.title.is_empty() {
                NO_TITLE_PLACEHOLDER
            } else {
                &event.title
            };
            painter.text(
                block.left_top() + Vec2::new(8.0, 3.0),
                Align2::LEFT_TOP,
                title,
                FontId::proportional(13.0),
                palette.block_text,
            );
            if block.height() >= 34.0 {
                painter.text(
                    block.left_top() + Vec2::new(8.0, 19.0),
                    Align2::LEFT_TOP,
                    grid::span_label(event.start, event.end),
                    FontId::proportional(11.0),
                    palette.block_time_text,
                );
            }
            if selected {
                resize::draw_handles(&painter, block, border);
            }
        }
    }

    fn block_rect(rect: Rect, grid: &GridSpec, event: &Event) -> Rect {
        Rect::from_min_max(
            Pos2::new(
                rect.left() + BLOCK_INSET,
                rect.top() + grid.pixels_for_slot(event.start),
            ),
            Pos2::new(
                rect.right() - BLOCK_INSET,
                rect.top() + grid.pixels_for_slot(event.end),
            ),
        )
    }
}
