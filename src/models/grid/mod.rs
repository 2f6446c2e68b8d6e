// Grid module
// Slot-indexed day grid: pixel <-> slot <-> clock-time conversions

use chrono::NaiveTime;

/// First minute of the grid day (08:00).
pub const DAY_START_MINUTES: u32 = 8 * 60;
/// Last minute of the grid day (19:00).
pub const DAY_END_MINUTES: u32 = 19 * 60;
/// Minutes covered by one slot.
pub const SLOT_MINUTES: u32 = 5;
/// Number of 5-minute slots between 08:00 and 19:00.
pub const TOTAL_SLOTS: usize = ((DAY_END_MINUTES - DAY_START_MINUTES) / SLOT_MINUTES) as usize;

/// Default length of an event created by a plain click (6 slots = 30 minutes).
pub const DEFAULT_EVENT_SLOTS: usize = 6;

/// Visual configuration of the day grid.
///
/// Slot height is the single layout constant everything else derives from;
/// all pixel math lives here so the views never do their own arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Height of one 5-minute slot, in points.
    pub slot_height: f32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { slot_height: 14.0 }
    }
}

impl GridSpec {
    /// Vertical pixel offset of a slot boundary from the top of the grid.
    pub fn pixels_for_slot(&self, slot: usize) -> f32 {
        slot as f32 * self.slot_height
    }

    /// Total pixel height of the grid.
    pub fn grid_height(&self) -> f32 {
        self.pixels_for_slot(TOTAL_SLOTS)
    }

    /// Map a pointer y offset (relative to the grid top) to the nearest
    /// slot boundary.
    ///
    /// Total for any finite input: the offset is clamped into the grid's
    /// pixel range before rounding, and the result is clamped into
    /// `[0, TOTAL_SLOTS]`.
    pub fn slot_for_pointer(&self, y: f32) -> usize {
        let y = y.clamp(0.0, self.grid_height());
        let slot = (y / self.slot_height).round() as usize;
        slot.min(TOTAL_SLOTS)
    }
}

/// Clock time at a slot boundary (slot 0 = 08:00).
pub fn time_for_slot(slot: usize) -> NaiveTime {
    let minutes = DAY_START_MINUTES + slot as u32 * SLOT_MINUTES;
    // Total for slot <= TOTAL_SLOTS; saturate at midnight for anything past it.
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap_or(NaiveTime::MIN)
}

/// `"HH:MM"` label for a slot boundary.
pub fn time_label(slot: usize) -> String {
    time_for_slot(slot).format("%H:%M").to_string()
}

/// `"HH:MM - HH:MM"` caption for a slot range.
pub fn span_label(start: usize, end: usize) -> String {
    format!("{} - {}", time_label(start), time_label(end))
}
