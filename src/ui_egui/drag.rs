// Pointer gesture state machine
//
// One gesture spans a pointer press-to-release cycle and is always tied to
// exactly one event. The controller owns the transient state and applies
// every slot mutation through the store, so no branch can leave an event
// with start >= end.

use crate::models::event::EventId;
use crate::models::grid::{GridSpec, DEFAULT_EVENT_SLOTS, TOTAL_SLOTS};
use crate::services::schedule::ScheduleStore;
use crate::ui_egui::resize::ResizeHandle;

/// In-progress pointer gesture. Exists only between press and release.
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Drawing a new event out from the pressed slot.
    Creating {
        id: EventId,
        /// Slot the pointer went down on; always stays inside the range.
        anchor: usize,
        /// Set once the pointer leaves the anchor slot. A release with
        /// this still false is a plain click.
        moved: bool,
    },
    /// Dragging an existing block by its body; length is preserved.
    Moving {
        id: EventId,
        /// Pixel offset of the press point from the block's top edge.
        grab_offset: f32,
        length: usize,
    },
    /// Dragging the top handle; end is fixed.
    ResizingTop {
        id: EventId,
        #[allow(dead_code)]
        original_start: usize,
    },
    /// Dragging the bottom handle; start is fixed.
    ResizingBottom {
        id: EventId,
        #[allow(dead_code)]
        original_end: usize,
    },
}

/// What the caller should do after a release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseAction {
    None,
    /// A plain click created a default-length event; move keyboard focus
    /// to the title field.
    FocusTitle,
}

/// Owns the optional in-flight gesture. Lives in the top-level app state.
#[derive(Debug, Default)]
pub struct DragController {
    state: Option<DragState>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Id of the event the current gesture is mutating, if any.
    pub fn dragged_id(&self) -> Option<EventId> {
        self.state.as_ref().map(|state| match state {
            DragState::Creating { id, .. }
            | DragState::Moving { id, .. }
            | DragState::ResizingTop { id, .. }
            | DragState::ResizingBottom { id, .. } => *id,
        })
    }

    /// Press on empty grid area: create a one-slot event at the pressed
    /// slot and start a create gesture anchored there.
    pub fn begin_create(&mut self, store: &mut ScheduleStore, pressed_slot: usize) {
        // Pressing on the very bottom boundary still yields a valid event.
        let anchor = pressed_slot.min(TOTAL_SLOTS - 1);
        match store.create(anchor, anchor + 1) {
            Ok(id) => {
                self.state = Some(DragState::Creating {
                    id,
                    anchor,
                    moved: false,
                });
            }
            Err(err) => log::warn!("could not create event at slot {anchor}: {err}"),
        }
    }

    /// Press on a block body: start moving it, keeping its length and the
    /// pointer's offset within the block.
    pub fn begin_move(&mut self, store: &ScheduleStore, id: EventId, grab_offset: f32) {
        if let Some(event) = store.find(id) {
            self.state = Some(DragState::Moving {
                id,
                grab_offset,
                length: event.duration_slots(),
            });
        }
    }

    /// Press on a resize handle: start adjusting the matching edge.
    pub fn begin_resize(&mut self, store: &ScheduleStore, id: EventId, handle: ResizeHandle) {
        if let Some(event) = store.find(id) {
            self.state = Some(match handle {
                ResizeHandle::Top => DragState::ResizingTop {
                    id,
                    original_start: event.start,
                },
                ResizeHandle::Bottom => DragState::ResizingBottom {
                    id,
                    original_end: event.end,
                },
            });
        }
    }

    /// Pointer moved while a gesture is live. `pointer_y` is relative to
    /// the grid top. Recomputes the affected event's slot range; clamping
    /// keeps a minimum 1-slot span in every branch.
    pub fn pointer_moved(&mut self, grid: &GridSpec, store: &mut ScheduleStore, pointer_y: f32) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        match state {
            DragState::Creating { id, anchor, moved } => {
                let Some(event) = store.find_mut(*id) else {
                    return;
                };
                let current = grid.slot_for_pointer(pointer_y);
                if current != *anchor {
                    *moved = true;
                }
                // The anchor stays inside the range whichever direction
                // the pointer went.
                event.start = (*anchor).min(current).min(TOTAL_SLOTS - 1);
                event.end = (*anchor + 1).max(current).min(TOTAL_SLOTS);
            }
            DragState::Moving {
                id,
                grab_offset,
                length,
            } => {
                let Some(event) = store.find_mut(*id) else {
                    return;
                };
                let slot = grid.slot_for_pointer(pointer_y - *grab_offset);
                let start = slot.min(TOTAL_SLOTS - *length);
                event.start = start;
                event.end = start + *length;
            }
            DragState::ResizingTop { id, .. } => {
                let Some(event) = store.find_mut(*id) else {
                    return;
                };
                let slot = grid.slot_for_pointer(pointer_y);
                event.start = slot.min(event.end - 1);
            }
            DragState::ResizingBottom { id, .. } => {
                let Some(event) = store.find_mut(*id) else {
                    return;
                };
                let slot = grid.slot_for_pointer(pointer_y);
                event.end = slot.max(event.start + 1).min(TOTAL_SLOTS);
            }
        }
    }

    /// Pointer released: clear the gesture unconditionally. A create that
    /// never left its anchor slot snaps to the default length instead of
    /// staying one slot tall.
    pub fn release(&mut self, store: &mut ScheduleStore) -> ReleaseAction {
        let state = self.state.take();
        if let Some(DragState::Creating {
            id, moved: false, ..
        }) = state
        {
            if let Some(event) = store.find_mut(id) {
                event.end = (event.start + DEFAULT_EVENT_SLOTS)
                    .clamp(event.start + 1, TOTAL_SLOTS);
            }
            store.set_active(Some(id));
            return ReleaseAction::FocusTitle;
        }
        ReleaseAction::None
    }
}
