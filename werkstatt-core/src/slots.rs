//! The fixed daily grid of bookable time slots.

use chrono::NaiveTime;

use crate::appointment::{TIME_FORMAT, parse_time};
use crate::error::{ScheduleError, ScheduleResult};

/// One bookable interval within the working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Slot {
    /// Half-open containment: a time exactly at `end` belongs to the next
    /// slot, not this one.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }

    /// The display label, e.g. `"08:00 - 10:00"`.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format(TIME_FORMAT),
            self.end.format(TIME_FORMAT)
        )
    }
}

/// The partition of a working day into bookable slots.
///
/// Slots are ordered and non-overlapping. Any gap between them (the lunch
/// break) is simply not bookable; the grid never changes for the lifetime
/// of the scheduler.
#[derive(Debug, Clone)]
pub struct SlotGrid {
    slots: Vec<Slot>,
}

impl Default for SlotGrid {
    /// Four 2-hour slots over an 08:00-17:00 working day, with the
    /// 12:00-13:00 lunch break left uncovered.
    fn default() -> Self {
        SlotGrid::from_pairs(&[
            ("08:00", "10:00"),
            ("10:00", "12:00"),
            ("13:00", "15:00"),
            ("15:00", "17:00"),
        ])
        .expect("built-in slot grid is valid")
    }
}

impl SlotGrid {
    /// Build a grid, validating that slots are well-formed, ascending and
    /// non-overlapping.
    pub fn new(slots: Vec<Slot>) -> ScheduleResult<Self> {
        if slots.is_empty() {
            return Err(ScheduleError::Config("slot grid is empty".to_string()));
        }

        for slot in &slots {
            if slot.start >= slot.end {
                return Err(ScheduleError::Config(format!(
                    "slot {} ends before it starts",
                    slot.label()
                )));
            }
        }

        for pair in slots.windows(2) {
            if pair[1].start < pair[0].end {
                return Err(ScheduleError::Config(format!(
                    "slots {} and {} overlap",
                    pair[0].label(),
                    pair[1].label()
                )));
            }
        }

        Ok(SlotGrid { slots })
    }

    /// Build a grid from `(start, end)` pairs of `HH:MM` strings.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> ScheduleResult<Self> {
        let slots = pairs
            .iter()
            .map(|(start, end)| {
                Ok(Slot {
                    start: parse_time(start)?,
                    end: parse_time(end)?,
                })
            })
            .collect::<ScheduleResult<Vec<_>>>()?;

        SlotGrid::new(slots)
    }

    /// The slots in day order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Whether the time falls inside any bookable slot.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.slot_containing(time).is_some()
    }

    /// The slot whose `[start, end)` range covers the time, if any.
    pub fn slot_containing(&self, time: NaiveTime) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.contains(time))
    }

    /// Look a slot up by its display label, e.g. `"08:00 - 10:00"`.
    pub fn slot_for_label(&self, label: &str) -> Option<&Slot> {
        let label = label.trim();
        self.slots.iter().find(|slot| slot.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // --- grid construction ---

    #[test]
    fn default_grid_has_four_slots() {
        let grid = SlotGrid::default();
        let labels: Vec<String> = grid.slots().iter().map(Slot::label).collect();
        assert_eq!(
            labels,
            vec!["08:00 - 10:00", "10:00 - 12:00", "13:00 - 15:00", "15:00 - 17:00"]
        );
    }

    #[test]
    fn rejects_empty_grid() {
        assert!(matches!(SlotGrid::new(vec![]), Err(ScheduleError::Config(_))));
    }

    #[test]
    fn rejects_inverted_slot() {
        let result = SlotGrid::from_pairs(&[("10:00", "08:00")]);
        assert!(matches!(result, Err(ScheduleError::Config(_))));
    }

    #[test]
    fn rejects_overlapping_slots() {
        let result = SlotGrid::from_pairs(&[("08:00", "10:00"), ("09:00", "11:00")]);
        assert!(matches!(result, Err(ScheduleError::Config(_))));
    }

    #[test]
    fn rejects_unparseable_times() {
        let result = SlotGrid::from_pairs(&[("8am", "10am")]);
        assert!(matches!(result, Err(ScheduleError::InvalidTimeFormat(_))));
    }

    // --- containment ---

    #[test]
    fn contains_is_half_open() {
        let grid = SlotGrid::default();

        assert!(grid.contains(at(8, 0)));
        assert!(grid.contains(at(9, 59)));
        // 10:00 is the start of the next slot, not the end of the first
        assert_eq!(grid.slot_containing(at(10, 0)).unwrap().label(), "10:00 - 12:00");
    }

    #[test]
    fn lunch_break_is_not_bookable() {
        let grid = SlotGrid::default();
        assert!(!grid.contains(at(12, 0)));
        assert!(!grid.contains(at(12, 30)));
        assert!(grid.contains(at(13, 0)));
    }

    #[test]
    fn outside_opening_hours_is_not_bookable() {
        let grid = SlotGrid::default();
        assert!(!grid.contains(at(7, 59)));
        assert!(!grid.contains(at(17, 0)));
        assert!(!grid.contains(at(18, 0)));
    }

    // --- label lookup ---

    #[test]
    fn slot_for_label_finds_slots() {
        let grid = SlotGrid::default();
        let slot = grid.slot_for_label("13:00 - 15:00").unwrap();
        assert_eq!(slot.start, at(13, 0));
        assert_eq!(slot.end, at(15, 0));
    }

    #[test]
    fn slot_for_label_trims_whitespace() {
        let grid = SlotGrid::default();
        assert!(grid.slot_for_label("  08:00 - 10:00 ").is_some());
    }

    #[test]
    fn slot_for_label_unknown_is_none() {
        let grid = SlotGrid::default();
        assert!(grid.slot_for_label("12:00 - 13:00").is_none());
    }
}
