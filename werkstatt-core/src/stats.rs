//! Derived statistics over the appointment book.

use chrono::NaiveDate;

use crate::appointment::Appointment;
use crate::error::{ScheduleError, ScheduleResult};

/// Appointment counts over an inclusive date range.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_appointments: usize,
    pub days_in_range: u32,
    pub days_with_appointments: usize,
    pub average_per_day: f64,
}

/// Compute statistics for appointments scheduled within `[start, end]`.
///
/// The average divides by calendar days in the range, not by bookable
/// slots per day. Fails with `InvalidRange` if `start` is after `end`.
pub fn for_range(
    appointments: &[Appointment],
    start: NaiveDate,
    end: NaiveDate,
) -> ScheduleResult<Statistics> {
    if start > end {
        return Err(ScheduleError::InvalidRange { start, end });
    }

    let days_in_range = (end - start).num_days() as u32 + 1;

    let in_range: Vec<&Appointment> = appointments
        .iter()
        .filter(|a| start <= a.date && a.date <= end)
        .collect();
    let total_appointments = in_range.len();

    let mut booked_days: Vec<NaiveDate> = in_range.iter().map(|a| a.date).collect();
    booked_days.sort();
    booked_days.dedup();

    Ok(Statistics {
        total_appointments,
        days_in_range,
        days_with_appointments: booked_days.len(),
        average_per_day: total_appointments as f64 / f64::from(days_in_range),
    })
}
