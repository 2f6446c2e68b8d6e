// Schedule service
// In-memory event store with a single active selection and the text log view

use crate::models::event::{Event, EventError, EventId};
use crate::models::grid;

/// Placeholder shown in block captions and log lines for an unnamed event.
pub const NO_TITLE_PLACEHOLDER: &str = "(no title)";
/// Placeholder shown in log lines for an event without a purpose.
pub const NO_PURPOSE_PLACEHOLDER: &str = "(no purpose)";
/// Log body when the store is empty.
pub const EMPTY_LOG_MESSAGE: &str = "No events recorded yet.";

/// Ordered collection of day-grid events plus the active selection.
///
/// Records keep insertion order internally; the log view sorts by start
/// slot. At most one event is active at a time, and only the active event
/// is editable through the side panel.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    events: Vec<Event>,
    next_id: u64,
    active: Option<EventId>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new event covering `start..end`, append it, and make it
    /// the active selection.
    pub fn create(&mut self, start: usize, end: usize) -> Result<EventId, EventError> {
        self.next_id += 1;
        let id = EventId(self.next_id);
        let event = Event::new(id, start, end)?;
        log::debug!("created event {id} at {}..{}", event.start, event.end);
        self.events.push(event);
        self.active = Some(id);
        Ok(id)
    }

    pub fn find(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn find_mut(&mut self, id: EventId) -> Option<&mut Event> {
        self.events.iter_mut().find(|event| event.id == id)
    }

    /// Remove an event. Clears the active selection if it pointed at the
    /// removed record; missing ids are ignored.
    pub fn delete(&mut self, id: EventId) {
        self.events.retain(|event| event.id != id);
        if self.active == Some(id) {
            self.active = None;
        }
    }

    pub fn set_active(&mut self, id: Option<EventId>) {
        self.active = id;
    }

    pub fn active_id(&self) -> Option<EventId> {
        self.active
    }

    /// The active record, if it still exists. A stale selection (for
    /// example after deletion) reads as no selection.
    pub fn active_event(&self) -> Option<&Event> {
        self.active.and_then(|id| self.find(id))
    }

    pub fn active_event_mut(&mut self) -> Option<&mut Event> {
        self.active.and_then(|id| self.find_mut(id))
    }

    /// All events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// All events sorted by start slot ascending (display order for the log).
    pub fn sorted_by_start(&self) -> Vec<&Event> {
        let mut sorted: Vec<&Event> = self.events.iter().collect();
        sorted.sort_by_key(|event| event.start);
        sorted
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The text log: one `title / start / end / purpose` line per event in
    /// start order, or a placeholder message for an empty store.
    pub fn log_text(&self) -> String {
        if self.events.is_empty() {
            return EMPTY_LOG_MESSAGE.to_string();
        }
        let lines: Vec<String> = self
            .sorted_by_start()
            .into_iter()
            .map(|event| {
                let title = if event.title.is_empty() {
                    NO_TITLE_PLACEHOLDER
                } else {
                    &event.title
                };
                let purpose = if event.purpose.is_empty() {
                    NO_PURPOSE_PLACEHOLDER
                } else {
                    &event.purpose
                };
                format!(
                    "{title} / {} / {} / {purpose}",
                    grid::time_label(event.start),
                    grid::time_label(event.end),
                )
            })
            .collect();
        lines.join("\n")
    }
}
