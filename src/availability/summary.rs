use super::models::{period_order, TimeSlot};
use super::parser::parse_availability;
use crate::utils::time::{month_order, weekday_order};
use crate::volunteers::models::Volunteer;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Number of selected mentors available in one slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCount {
    pub slot: TimeSlot,
    pub total: usize,
    pub in_person: usize,
    pub remote: usize,
}

/// Per-slot mentor counts for an event, in calendar order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AvailabilitySummary {
    pub rows: Vec<SlotCount>,
}

impl AvailabilitySummary {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Counts for the slot with exactly this text
    pub fn get(&self, slot_text: &str) -> Option<&SlotCount> {
        self.rows.iter().find(|row| row.slot.text == slot_text)
    }
}

/// Count selected mentors per slot, split by in-person and remote.
///
/// Slots without a recognized time period are left out.
pub fn summarize_mentor_availability(volunteers: &[Volunteer]) -> AvailabilitySummary {
    let mut rows: Vec<SlotCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for volunteer in volunteers
        .iter()
        .filter(|volunteer| volunteer.is_selected && volunteer.is_mentor())
    {
        for slot in parse_availability(volunteer.availability_input()) {
            if !slot.has_time_info() {
                continue;
            }

            let position = *index.entry(slot.text.clone()).or_insert_with(|| {
                rows.push(SlotCount {
                    slot,
                    total: 0,
                    in_person: 0,
                    remote: 0,
                });
                rows.len() - 1
            });

            let row = &mut rows[position];
            row.total += 1;
            if volunteer.is_in_person {
                row.in_person += 1;
            } else {
                row.remote += 1;
            }
        }
    }

    rows.sort_by_key(|row| calendar_key(&row.slot));
    AvailabilitySummary { rows }
}

/// Sort key by month, day of month, weekday and time of day.
///
/// Unknown months sort first and unknown day numbers count as 0.
pub fn calendar_key(slot: &TimeSlot) -> (u32, u32, u32, u32) {
    let mut parts = slot.date_label.split_whitespace();
    let month = parts.next().map_or(0, month_order);
    let day = parts
        .next()
        .and_then(|day| day.trim_end_matches(',').parse::<u32>().ok())
        .unwrap_or(0);
    (
        month,
        day,
        weekday_order(slot.weekday),
        period_order(slot.time_period),
    )
}

/// The first slot that is active at `now`
pub fn current_slot(slots: &[TimeSlot], now: DateTime<Utc>) -> Option<&TimeSlot> {
    slots.iter().find(|slot| slot.is_available_at(now))
}

/// Slots sharing one date label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotGroup {
    pub date_label: String,
    pub slots: Vec<TimeSlot>,
}

/// Group slots by date label, keeping the order in which labels first appear
pub fn group_by_date(slots: &[TimeSlot]) -> Vec<SlotGroup> {
    let mut groups: Vec<SlotGroup> = Vec::new();
    for slot in slots {
        match groups
            .iter_mut()
            .find(|group| group.date_label == slot.date_label)
        {
            Some(group) => group.slots.push(slot.clone()),
            None => groups.push(SlotGroup {
                date_label: slot.date_label.clone(),
                slots: vec![slot.clone()],
            }),
        }
    }
    groups
}

/// One availability chip on a volunteer card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityChip {
    pub label: String,
    pub tooltip: String,
    pub available_now: bool,
}

const AVAILABLE_NOW_TOOLTIP: &str = "Available now (during the hackathon)!";

/// Chips for every slot of a volunteer, flagged when active at `now`
pub fn availability_chips(volunteer: &Volunteer, now: DateTime<Utc>) -> Vec<AvailabilityChip> {
    parse_availability(volunteer.availability_input())
        .into_iter()
        .map(|slot| {
            let available_now = slot.is_available_at(now);
            let tooltip = if available_now {
                AVAILABLE_NOW_TOOLTIP.to_string()
            } else {
                slot.text.clone()
            };
            AvailabilityChip {
                label: slot.text,
                tooltip,
                available_now,
            }
        })
        .collect()
}
