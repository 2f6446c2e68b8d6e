// Property-based tests for the slot mapper and the gesture state machine
use daygrid::models::grid::{GridSpec, DEFAULT_EVENT_SLOTS, TOTAL_SLOTS};
use daygrid::services::schedule::ScheduleStore;
use daygrid::ui_egui::drag::DragController;
use daygrid::ui_egui::resize::ResizeHandle;
use proptest::prelude::*;

fn grid() -> GridSpec {
    GridSpec { slot_height: 14.0 }
}

proptest! {
    /// Property: any finite pointer offset maps to a slot in [0, TOTAL_SLOTS]
    #[test]
    fn prop_slot_for_pointer_is_total(y in -1.0e6f32..1.0e6f32) {
        let slot = grid().slot_for_pointer(y);
        prop_assert!(slot <= TOTAL_SLOTS);
    }

    /// Property: a create drag always keeps the anchor inside the range
    /// and never produces an empty or out-of-bounds event
    #[test]
    fn prop_create_drag_keeps_anchor_in_range(
        anchor in 0usize..=TOTAL_SLOTS,
        moves in prop::collection::vec(-2000.0f32..4000.0, 0..12),
    ) {
        let grid = grid();
        let mut store = ScheduleStore::new();
        let mut drag = DragController::new();

        drag.begin_create(&mut store, anchor);
        let clamped_anchor = anchor.min(TOTAL_SLOTS - 1);
        for y in moves {
            drag.pointer_moved(&grid, &mut store, y);
            let event = store.active_event().unwrap();
            prop_assert!(event.start < event.end);
            prop_assert!(event.end <= TOTAL_SLOTS);
            prop_assert!(event.start <= clamped_anchor);
            prop_assert!(clamped_anchor < event.end);
        }
        drag.release(&mut store);
        let event = store.active_event().unwrap();
        prop_assert!(event.start < event.end);
        prop_assert!(event.end <= TOTAL_SLOTS);
    }

    /// Property: a plain click always yields the default length, clamped
    /// at the grid's lower edge
    #[test]
    fn prop_plain_click_snaps_to_default_length(slot in 0usize..=TOTAL_SLOTS) {
        let mut store = ScheduleStore::new();
        let mut drag = DragController::new();

        drag.begin_create(&mut store, slot);
        drag.release(&mut store);

        let event = store.active_event().unwrap();
        let expected = DEFAULT_EVENT_SLOTS.min(TOTAL_SLOTS - event.start);
        prop_assert_eq!(event.duration_slots(), expected);
    }

    /// Property: moving preserves length through any pointer path
    #[test]
    fn prop_move_preserves_length(
        start in 0usize..TOTAL_SLOTS,
        len in 1usize..=24,
        grab in 0.0f32..100.0,
        moves in prop::collection::vec(-3000.0f32..6000.0, 1..16),
    ) {
        let grid = grid();
        let len = len.min(TOTAL_SLOTS - start);
        let mut store = ScheduleStore::new();
        let id = store.create(start, start + len).unwrap();
        let mut drag = DragController::new();

        drag.begin_move(&store, id, grab);
        for y in moves {
            drag.pointer_moved(&grid, &mut store, y);
            let event = store.find(id).unwrap();
            prop_assert_eq!(event.duration_slots(), len);
            prop_assert!(event.end <= TOTAL_SLOTS);
        }
    }

    /// Property: resizing either edge keeps at least a one-slot span
    #[test]
    fn prop_resize_keeps_minimum_span(
        start in 0usize..TOTAL_SLOTS,
        len in 1usize..=36,
        top in proptest::bool::ANY,
        moves in prop::collection::vec(-3000.0f32..6000.0, 1..16),
    ) {
        let grid = grid();
        let len = len.min(TOTAL_SLOTS - start);
        let mut store = ScheduleStore::new();
        let id = store.create(start, start + len).unwrap();
        let mut drag = DragController::new();

        let handle = if top { ResizeHandle::Top } else { ResizeHandle::Bottom };
        drag.begin_resize(&store, id, handle);
        for y in moves {
            drag.pointer_moved(&grid, &mut store, y);
            let event = store.find(id).unwrap();
            prop_assert!(event.start < event.end);
            prop_assert!(event.end <= TOTAL_SLOTS);
            // The opposite edge stays fixed.
            match handle {
                ResizeHandle::Top => prop_assert_eq!(event.end, start + len),
                ResizeHandle::Bottom => prop_assert_eq!(event.start, start),
            }
        }
    }
}
