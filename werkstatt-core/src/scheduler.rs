//! The scheduling engine.
//!
//! Owns the appointment book, enforces slot exclusivity and grid
//! containment, and persists through the injected store after every
//! successful mutation. If a save fails, the in-memory change is rolled
//! back so the book never diverges from what the caller was told.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::appointment::{Appointment, TIME_FORMAT, parse_date, parse_time};
use crate::error::{ScheduleError, ScheduleResult};
use crate::slots::{Slot, SlotGrid};
use crate::stats::{self, Statistics};
use crate::store::AppointmentStore;

/// How far a shift searches for a free slot before giving up.
pub const DEFAULT_LOOK_AHEAD_DAYS: u32 = 365;

/// Free/booked state of a slot on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    Free,
    Booked,
}

/// A sparse set of field changes for [`Scheduler::update`].
///
/// Only the provided fields are applied. Date and time are re-validated
/// against the grid and the rest of the book when present.
#[derive(Debug, Clone, Default)]
pub struct AppointmentUpdate {
    pub customer_name: Option<String>,
    pub vehicle_type: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub maintenance_type: Option<String>,
}

impl AppointmentUpdate {
    pub fn is_empty(&self) -> bool {
        self.customer_name.is_none()
            && self.vehicle_type.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.maintenance_type.is_none()
    }
}

/// Where a shifted appointment landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftTarget {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl fmt::Display for ShiftTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} on {}", self.time.format(TIME_FORMAT), self.date)
    }
}

/// The scheduling engine: the appointment book, the slot grid, and the
/// persistence port it saves through.
///
/// Single-actor by design; every mutation takes `&mut self`, which makes
/// the check-then-act sequence exclusive by construction.
pub struct Scheduler<S: AppointmentStore> {
    grid: SlotGrid,
    store: S,
    appointments: Vec<Appointment>,
    look_ahead_days: u32,
}

impl<S: AppointmentStore> Scheduler<S> {
    /// Open the scheduler, hydrating the appointment book from the store.
    pub fn open(grid: SlotGrid, store: S) -> ScheduleResult<Self> {
        let mut appointments = store.load()?;
        appointments.sort_by_key(Appointment::scheduled_at);

        Ok(Scheduler {
            grid,
            store,
            appointments,
            look_ahead_days: DEFAULT_LOOK_AHEAD_DAYS,
        })
    }

    /// Bound the day-forward search in [`Scheduler::shift`].
    pub fn with_look_ahead(mut self, days: u32) -> Self {
        self.look_ahead_days = days;
        self
    }

    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Book an appointment.
    ///
    /// The sole gate for the two booking invariants: the time must fall
    /// inside a bookable slot, and no other appointment may occupy the
    /// same slot on the same date.
    pub fn add(&mut self, appointment: Appointment) -> ScheduleResult<()> {
        self.check_slot(appointment.date, appointment.time, None)?;

        let previous = self.appointments.clone();
        self.appointments.push(appointment);
        self.appointments.sort_by_key(Appointment::scheduled_at);
        self.persist_or_rollback(previous)
    }

    /// Move an appointment to a new date, time and maintenance type.
    pub fn reschedule(
        &mut self,
        id: &str,
        new_date: &str,
        new_time: &str,
        new_maintenance: &str,
    ) -> ScheduleResult<()> {
        self.update(
            id,
            AppointmentUpdate {
                date: Some(new_date.to_string()),
                time: Some(new_time.to_string()),
                maintenance_type: Some(new_maintenance.to_string()),
                ..AppointmentUpdate::default()
            },
        )
    }

    /// Apply a sparse field update to an appointment.
    ///
    /// Atomic: if a string fails to parse, the new date or time fails the
    /// grid or conflict check, or the save fails, the appointment is left
    /// exactly as it was.
    pub fn update(&mut self, id: &str, update: AppointmentUpdate) -> ScheduleResult<()> {
        // Parse before touching anything so a malformed string can never
        // half-apply.
        let new_date = update.date.as_deref().map(parse_date).transpose()?;
        let new_time = update.time.as_deref().map(parse_time).transpose()?;

        let index = self.index_of(id)?;
        let date = new_date.unwrap_or(self.appointments[index].date);
        let time = new_time.unwrap_or(self.appointments[index].time);

        if new_date.is_some() || new_time.is_some() {
            self.check_slot(date, time, Some(id))?;
        }

        let previous = self.appointments.clone();
        let appointment = &mut self.appointments[index];
        if let Some(name) = update.customer_name {
            appointment.customer_name = name;
        }
        if let Some(vehicle) = update.vehicle_type {
            appointment.vehicle_type = vehicle;
        }
        if let Some(maintenance) = update.maintenance_type {
            appointment.maintenance_type = maintenance;
        }
        appointment.date = date;
        appointment.time = time;

        self.appointments.sort_by_key(Appointment::scheduled_at);
        self.persist_or_rollback(previous)
    }

    /// Cancel an appointment by id.
    pub fn remove_by_id(&mut self, id: &str) -> ScheduleResult<()> {
        let index = self.index_of(id)?;
        self.remove_at(index)
    }

    /// Cancel the first appointment booked under the contact email.
    pub fn remove_by_email(&mut self, email: &str) -> ScheduleResult<()> {
        let index = self
            .appointments
            .iter()
            .position(|a| a.email.as_deref() == Some(email))
            .ok_or_else(|| ScheduleError::NotFound(email.to_string()))?;
        self.remove_at(index)
    }

    /// Move the appointment occupying a slot to the next free slot, same
    /// day or later. Used when an emergency booking displaces a regular
    /// one.
    ///
    /// The search walks the remaining slots of the day in grid order, then
    /// day by day up to the look-ahead bound. The target is checked at
    /// interval level, so a shift can never create a conflict.
    pub fn shift(&mut self, date: NaiveDate, slot_label: &str) -> ScheduleResult<ShiftTarget> {
        let slot = *self
            .grid
            .slot_for_label(slot_label)
            .ok_or_else(|| ScheduleError::SlotUnavailable(format!("no slot labelled '{slot_label}'")))?;

        let index = self
            .appointments
            .iter()
            .position(|a| a.date == date && a.time == slot.start)
            .ok_or_else(|| ScheduleError::NotFound(format!("{} at {}", date, slot.label())))?;

        let target = self.next_free_slot(date, slot.start)?;

        let previous = self.appointments.clone();
        self.appointments[index].date = target.date;
        self.appointments[index].time = target.time;
        self.appointments.sort_by_key(Appointment::scheduled_at);
        self.persist_or_rollback(previous)?;

        Ok(target)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// A copy of the appointment with the given id.
    pub fn get(&self, id: &str) -> Option<Appointment> {
        self.appointments.iter().find(|a| a.id == id).cloned()
    }

    /// The whole book in natural order. Callers get copies; the book is
    /// only ever mutated through the scheduler.
    pub fn appointments(&self) -> Vec<Appointment> {
        self.appointments.clone()
    }

    /// All appointments on the date, in natural order.
    pub fn list_appointments(&self, date: NaiveDate) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.date == date)
            .cloned()
            .collect()
    }

    /// Labels of slots with no appointment on the date. A single booking
    /// anywhere inside a slot takes the whole slot out of the list.
    pub fn list_free_slots(&self, date: NaiveDate) -> Vec<String> {
        self.grid
            .slots()
            .iter()
            .filter(|slot| !self.slot_taken(date, slot, None))
            .map(Slot::label)
            .collect()
    }

    /// Every slot of the day with its free/booked status. A slot counts as
    /// booked only when its exact start time is taken, which is where
    /// bookings made through this engine always land.
    pub fn slot_statuses(&self, date: NaiveDate) -> Vec<(String, SlotStatus)> {
        self.grid
            .slots()
            .iter()
            .map(|slot| {
                let booked = self
                    .appointments
                    .iter()
                    .any(|a| a.date == date && a.time == slot.start);
                let status = if booked { SlotStatus::Booked } else { SlotStatus::Free };
                (slot.label(), status)
            })
            .collect()
    }

    /// Appointment statistics over an inclusive date range.
    pub fn statistics(&self, start: NaiveDate, end: NaiveDate) -> ScheduleResult<Statistics> {
        stats::for_range(&self.appointments, start, end)
    }

    /// Appointments on the date that carry a contact email, for the
    /// notification collaborator to remind.
    pub fn due_reminders(&self, date: NaiveDate) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.date == date && a.email.is_some())
            .cloned()
            .collect()
    }

    // =========================================================================
    // Internal: conflict checks and persistence
    // =========================================================================

    /// Remove the appointment at `index` and persist, rolling back the
    /// in-memory removal if the save fails.
    fn remove_at(&mut self, index: usize) -> ScheduleResult<()> {
        let previous = self.appointments.clone();
        self.appointments.remove(index);
        self.persist_or_rollback(previous)
    }

    fn index_of(&self, id: &str) -> ScheduleResult<usize> {
        self.appointments
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| ScheduleError::NotFound(id.to_string()))
    }

    /// The slot covering the time, or `SlotUnavailable` if the time falls
    /// outside every bookable slot (before opening, after closing, or in
    /// the lunch break).
    fn covering_slot(&self, time: NaiveTime) -> ScheduleResult<Slot> {
        self.grid.slot_containing(time).copied().ok_or_else(|| {
            ScheduleError::SlotUnavailable(format!(
                "{} is outside the bookable slots",
                time.format(TIME_FORMAT)
            ))
        })
    }

    /// Whether an appointment other than `exclude_id` already occupies the
    /// slot on the date. Conflicts are interval-level: any time inside the
    /// slot books the whole slot.
    fn slot_taken(&self, date: NaiveDate, slot: &Slot, exclude_id: Option<&str>) -> bool {
        self.appointments.iter().any(|a| {
            a.date == date && slot.contains(a.time) && exclude_id.is_none_or(|id| a.id != id)
        })
    }

    /// Grid containment plus conflict check for a prospective (date, time).
    fn check_slot(&self, date: NaiveDate, time: NaiveTime, exclude_id: Option<&str>) -> ScheduleResult<()> {
        let slot = self.covering_slot(time)?;
        if self.slot_taken(date, &slot, exclude_id) {
            return Err(ScheduleError::SlotUnavailable(format!(
                "{} on {} is already booked",
                slot.label(),
                date
            )));
        }
        Ok(())
    }

    /// First interval-level free slot strictly after `after` on `date`, or
    /// the earliest free slot on a later day within the look-ahead bound.
    fn next_free_slot(&self, date: NaiveDate, after: NaiveTime) -> ScheduleResult<ShiftTarget> {
        for slot in self.grid.slots().iter().filter(|s| s.start > after) {
            if !self.slot_taken(date, slot, None) {
                return Ok(ShiftTarget { date, time: slot.start });
            }
        }

        for offset in 1..=i64::from(self.look_ahead_days) {
            let day = date + Duration::days(offset);
            for slot in self.grid.slots() {
                if !self.slot_taken(day, slot, None) {
                    return Ok(ShiftTarget { date: day, time: slot.start });
                }
            }
        }

        Err(ScheduleError::NoSlotAvailable(self.look_ahead_days))
    }

    /// Persist the book, restoring `previous` if the save fails so the
    /// in-memory state never diverges from reported success.
    fn persist_or_rollback(&mut self, previous: Vec<Appointment>) -> ScheduleResult<()> {
        match self.store.save(&self.appointments) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.appointments = previous;
                Err(e)
            }
        }
    }
}
