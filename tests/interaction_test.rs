// Integration tests for pointer gestures driving the schedule store
use daygrid::models::grid::{self, GridSpec, TOTAL_SLOTS};
use daygrid::services::schedule::ScheduleStore;
use daygrid::ui_egui::drag::{DragController, ReleaseAction};
use daygrid::ui_egui::resize::ResizeHandle;
use pretty_assertions::assert_eq;

fn grid() -> GridSpec {
    GridSpec { slot_height: 10.0 }
}

#[test]
fn test_click_at_grid_top_yields_half_hour_event() {
    // Pointer-down at slot 0, no movement, pointer-up.
    let mut store = ScheduleStore::new();
    let mut drag = DragController::new();

    drag.begin_create(&mut store, 0);
    assert_eq!(drag.release(&mut store), ReleaseAction::FocusTitle);

    let event = store.active_event().expect("click creates an active event");
    assert_eq!((event.start, event.end), (0, 6));
    assert_eq!(grid::span_label(event.start, event.end), "08:00 - 08:30");
}

#[test]
fn test_upward_create_drag_keeps_anchor_plus_one_as_upper_bound() {
    let grid = grid();
    let mut store = ScheduleStore::new();
    let mut drag = DragController::new();

    drag.begin_create(&mut store, 10);
    drag.pointer_moved(&grid, &mut store, 40.0); // slot 4

    let event = store.active_event().unwrap();
    assert_eq!((event.start, event.end), (4, 11));
}

#[test]
fn test_session_of_gestures_keeps_every_event_well_formed() {
    let grid = grid();
    let mut store = ScheduleStore::new();
    let mut drag = DragController::new();

    // Draw a meeting by dragging downward from 09:00.
    drag.begin_create(&mut store, 12);
    drag.pointer_moved(&grid, &mut store, 240.0); // slot 24 = 10:00
    drag.release(&mut store);
    let meeting = store.active_id().unwrap();
    store.active_event_mut().unwrap().title = "Planning".into();

    // Click-create a quick break.
    drag.begin_create(&mut store, 60);
    drag.release(&mut store);
    let break_id = store.active_id().unwrap();

    // Move the break down by an hour, grabbed at its top edge.
    drag.begin_move(&store, break_id, 0.0);
    drag.pointer_moved(&grid, &mut store, 720.0); // slot 72
    drag.release(&mut store);

    // Stretch the meeting's bottom edge to 11:00.
    drag.begin_resize(&store, meeting, ResizeHandle::Bottom);
    drag.pointer_moved(&grid, &mut store, 360.0); // slot 36
    drag.release(&mut store);

    let meeting_event = store.find(meeting).unwrap();
    let break_event = store.find(break_id).unwrap();
    assert_eq!((meeting_event.start, meeting_event.end), (12, 36));
    assert_eq!((break_event.start, break_event.end), (72, 78));
    for event in store.events() {
        assert!(event.validate().is_ok());
    }
    assert_eq!(
        store.log_text(),
        "Planning / 09:00 / 11:00 / (no purpose)\n\
         (no title) / 14:00 / 14:30 / (no purpose)"
    );
}

#[test]
fn test_moving_an_event_never_changes_its_length() {
    let grid = grid();
    let mut store = ScheduleStore::new();
    let id = store.create(20, 33).unwrap();
    let mut drag = DragController::new();

    drag.begin_move(&store, id, 35.0);
    for y in [-300.0, 0.0, 512.3, 999.9, 5_000.0] {
        drag.pointer_moved(&grid, &mut store, y);
        let event = store.find(id).unwrap();
        assert_eq!(event.duration_slots(), 13);
        assert!(event.end <= TOTAL_SLOTS);
    }
}

#[test]
fn test_bottom_resize_below_start_clamps_to_one_slot() {
    let grid = grid();
    let mut store = ScheduleStore::new();
    let id = store.create(40, 60).unwrap();
    let mut drag = DragController::new();

    drag.begin_resize(&store, id, ResizeHandle::Bottom);
    drag.pointer_moved(&grid, &mut store, 100.0); // slot 10, well above start

    let event = store.find(id).unwrap();
    assert_eq!((event.start, event.end), (40, 41));
}

#[test]
fn test_deleting_the_active_event_clears_the_selection() {
    let mut store = ScheduleStore::new();
    let mut drag = DragController::new();

    drag.begin_create(&mut store, 30);
    drag.release(&mut store);
    let id = store.active_id().unwrap();

    store.delete(id);
    assert_eq!(store.active_id(), None);
    assert!(store.active_event().is_none());
    assert!(store.is_empty());
}

#[test]
fn test_overlapping_events_are_permitted() {
    let mut store = ScheduleStore::new();
    store.create(10, 30).unwrap();
    store.create(20, 40).unwrap();

    assert_eq!(store.len(), 2);
    let sorted = store.sorted_by_start();
    assert!(sorted[0].end > sorted[1].start);
}
