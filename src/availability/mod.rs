//! Volunteer availability: parsing free-text slots, sorting them, and deciding
//! whether a slot is active right now in Pacific time.

pub mod models;
pub mod parser;
pub mod summary;
pub mod time;

pub use models::{AvailabilityInput, RawFallback, TimePeriod, TimeSlot};
pub use parser::{
    normalize_input, parse_availability, parse_availability_with, parse_slot_string,
    RegexSlotParser, SlotParser,
};
pub use summary::{
    availability_chips, current_slot, group_by_date, summarize_mentor_availability,
    AvailabilityChip, AvailabilitySummary, SlotCount, SlotGroup,
};
pub use time::is_currently_available;
