// Event module
// Slot-indexed event record for the day grid

use thiserror::Error;

use crate::models::grid::TOTAL_SLOTS;

/// Opaque identifier for an event, unique within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub(crate) u64);

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Validation errors for event slot ranges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("event range {start}..{end} is empty or reversed")]
    EmptyRange { start: usize, end: usize },
    #[error("event end {end} is past the last grid slot {TOTAL_SLOTS}")]
    PastGridEnd { end: usize },
}

/// A single scheduled block on the day grid.
///
/// `start` and `end` are slot indices (5-minute units, slot 0 = 08:00);
/// `start < end <= TOTAL_SLOTS` always holds for a constructed event.
/// Overlap between events is permitted and not validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub start: usize,
    pub end: usize,
    pub title: String,
    pub purpose: String,
}

impl Event {
    /// Create a new event covering `start..end`, with empty text fields.
    pub fn new(id: EventId, start: usize, end: usize) -> Result<Self, EventError> {
        if end <= start {
            return Err(EventError::EmptyRange { start, end });
        }
        if end > TOTAL_SLOTS {
            return Err(EventError::PastGridEnd { end });
        }
        Ok(Self {
            id,
            start,
            end,
            title: String::new(),
            purpose: String::new(),
        })
    }

    /// Re-check the slot range invariant.
    pub fn validate(&self) -> Result<(), EventError> {
        if self.end <= self.start {
            return Err(EventError::EmptyRange {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > TOTAL_SLOTS {
            return Err(EventError::PastGridEnd { end: self.end });
        }
        Ok(())
    }

    /// Length of the event in slots.
    pub fn duration_slots(&self) -> usize {
        self.end - self.start
    }
}
