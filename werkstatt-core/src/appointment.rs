//! The appointment entity.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ScheduleError, ScheduleResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Parse a date string in `YYYY-MM-DD` format.
pub fn parse_date(s: &str) -> ScheduleResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| ScheduleError::InvalidDateFormat(s.to_string()))
}

/// Parse a time string in `HH:MM` format.
pub fn parse_time(s: &str) -> ScheduleResult<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_FORMAT)
        .map_err(|_| ScheduleError::InvalidTimeFormat(s.to_string()))
}

/// A single workshop booking.
///
/// Identity lives in `id`: two appointments with the same date and time are
/// still distinct records, and equality compares ids only. The scheduled
/// instant is `(date, time)`.
///
/// The serialized field names match the JSON files written by the legacy
/// planner, so existing appointment books rehydrate unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub customer_name: String,
    pub vehicle_type: String,
    #[serde(rename = "appointment_date")]
    pub date: NaiveDate,
    #[serde(rename = "appointment_time", with = "hhmm")]
    pub time: NaiveTime,
    pub maintenance_type: String,
    #[serde(rename = "appointment_id")]
    pub id: String,
    #[serde(default)]
    pub is_emergency: bool,
    #[serde(default)]
    pub email: Option<String>,
}

impl Appointment {
    /// Create an appointment with a fresh id.
    ///
    /// Fails if the date or time string does not parse. Whether the date
    /// lies in the future is caller-side policy, deliberately not checked
    /// here.
    pub fn new(
        customer_name: &str,
        vehicle_type: &str,
        date_str: &str,
        time_str: &str,
        maintenance_type: &str,
        is_emergency: bool,
        email: Option<String>,
    ) -> ScheduleResult<Self> {
        Ok(Appointment {
            customer_name: customer_name.to_string(),
            vehicle_type: vehicle_type.to_string(),
            date: parse_date(date_str)?,
            time: parse_time(time_str)?,
            maintenance_type: maintenance_type.to_string(),
            id: Uuid::new_v4().to_string(),
            is_emergency,
            email,
        })
    }

    /// The scheduled instant, used as the natural sort key.
    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

// Equality is by id only. Ordering is deliberately not implemented: an
// `Ord` by (date, time) would disagree with the id-based `Eq`, so the
// scheduler sorts by `scheduled_at()` instead.
impl PartialEq for Appointment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Appointment {}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {}  {} ({}), {}",
            self.date,
            self.time.format(TIME_FORMAT),
            self.customer_name,
            self.vehicle_type,
            self.maintenance_type,
        )?;
        if self.is_emergency {
            write!(f, " [emergency]")?;
        }
        Ok(())
    }
}

/// Serde helpers for `HH:MM` time fields (chrono's default string form
/// carries seconds, which the legacy file format does not).
mod hhmm {
    use chrono::NaiveTime;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(super::TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, super::TIME_FORMAT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_appointment() -> Appointment {
        Appointment::new(
            "John Doe",
            "Sedan",
            "2099-09-30",
            "10:00",
            "Oil Change",
            false,
            Some("john.doe@example.com".to_string()),
        )
        .unwrap()
    }

    // --- construction ---

    #[test]
    fn creation_with_valid_data() {
        let appt = make_appointment();
        assert_eq!(appt.customer_name, "John Doe");
        assert_eq!(appt.vehicle_type, "Sedan");
        assert_eq!(appt.date, NaiveDate::from_ymd_opt(2099, 9, 30).unwrap());
        assert_eq!(appt.time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(appt.maintenance_type, "Oil Change");
        assert_eq!(appt.email.as_deref(), Some("john.doe@example.com"));
        assert!(!appt.id.is_empty());
    }

    #[test]
    fn creation_with_invalid_date_format() {
        let result = Appointment::new("John Doe", "Sedan", "09-30-2099", "10:00", "Oil Change", false, None);
        assert!(matches!(result, Err(ScheduleError::InvalidDateFormat(_))));
    }

    #[test]
    fn creation_with_invalid_time_format() {
        let result = Appointment::new("John Doe", "Sedan", "2099-09-30", "10am", "Oil Change", false, None);
        assert!(matches!(result, Err(ScheduleError::InvalidTimeFormat(_))));
    }

    #[test]
    fn emergency_flag() {
        let appt =
            Appointment::new("John Doe", "Sedan", "2099-09-30", "10:00", "Oil Change", true, None).unwrap();
        assert!(appt.is_emergency);
    }

    #[test]
    fn fresh_ids_are_unique() {
        assert_ne!(make_appointment().id, make_appointment().id);
    }

    // --- equality and ordering ---

    #[test]
    fn equality_is_by_id_only() {
        let a = make_appointment();
        let mut b =
            Appointment::new("Jane Doe", "SUV", "2099-10-01", "08:00", "Brake Check", false, None).unwrap();
        assert_ne!(a, b);

        b.id = a.id.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn sorts_by_date_then_time() {
        let late = make_appointment();
        let early =
            Appointment::new("Jane Doe", "SUV", "2099-09-30", "08:00", "Brake Check", false, None).unwrap();

        let mut appointments = vec![late.clone(), early.clone()];
        appointments.sort_by_key(Appointment::scheduled_at);

        assert_eq!(appointments[0].id, early.id);
        assert_eq!(appointments[1].id, late.id);
    }

    // --- parse boundary ---

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("tomorrow").is_err());
        assert!(parse_date("2099-13-01").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn parse_time_rejects_garbage() {
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("noon").is_err());
        assert!(parse_time("").is_err());
    }

    // --- display ---

    #[test]
    fn display_shows_schedule_and_customer() {
        let rendered = make_appointment().to_string();
        assert!(rendered.contains("2099-09-30"));
        assert!(rendered.contains("10:00"));
        assert!(rendered.contains("John Doe"));
        assert!(!rendered.contains("[emergency]"));
    }

    #[test]
    fn display_marks_emergencies() {
        let appt =
            Appointment::new("John Doe", "Sedan", "2099-09-30", "10:00", "Oil Change", true, None).unwrap();
        assert!(appt.to_string().ends_with("[emergency]"));
    }
}
