//! Durable storage for the appointment book.

use std::path::{Path, PathBuf};

use crate::appointment::Appointment;
use crate::error::{ScheduleError, ScheduleResult};

/// The persistence port the scheduler saves through.
///
/// `save` fully overwrites prior state and is called synchronously after
/// every successful mutation. `load` must treat missing or unreadable
/// state as an empty book rather than a fatal condition.
pub trait AppointmentStore {
    fn load(&self) -> ScheduleResult<Vec<Appointment>>;
    fn save(&self, appointments: &[Appointment]) -> ScheduleResult<()>;
}

/// JSON file storage, compatible with the legacy planner's appointment
/// files (a single JSON array of records).
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AppointmentStore for JsonFileStore {
    /// Load the appointment book. A missing or corrupt file is an empty
    /// book: the planner starts fresh instead of refusing to run.
    fn load(&self) -> ScheduleResult<Vec<Appointment>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&content) {
            Ok(appointments) => Ok(appointments),
            Err(_) => Ok(Vec::new()),
        }
    }

    /// Write the full book, replacing prior state. Goes through a temp
    /// file and rename so a failed write never truncates existing data.
    fn save(&self, appointments: &[Appointment]) -> ScheduleResult<()> {
        let content = serde_json::to_string_pretty(appointments)
            .map_err(|e| ScheduleError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let temp = self.path.with_extension("tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_appointment(time: &str) -> Appointment {
        Appointment::new(
            "John Doe",
            "Sedan",
            "2099-09-30",
            time,
            "Oil Change",
            false,
            Some("john.doe@example.com".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("appointments.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");
        std::fs::write(&path, "{ not json [").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn round_trips_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("appointments.json"));

        let emergency =
            Appointment::new("Jane Doe", "SUV", "2099-10-01", "13:00", "Brake Check", true, None).unwrap();
        let original = vec![make_appointment("10:00"), emergency];
        store.save(&original).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        for (a, b) in original.iter().zip(&loaded) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.customer_name, b.customer_name);
            assert_eq!(a.vehicle_type, b.vehicle_type);
            assert_eq!(a.date, b.date);
            assert_eq!(a.time, b.time);
            assert_eq!(a.maintenance_type, b.maintenance_type);
            assert_eq!(a.is_emergency, b.is_emergency);
            assert_eq!(a.email, b.email);
        }
    }

    #[test]
    fn save_overwrites_prior_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("appointments.json"));

        store.save(&[make_appointment("10:00"), make_appointment("13:00")]).unwrap();
        store.save(&[make_appointment("08:00")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].time.format("%H:%M").to_string(), "08:00");
    }

    #[test]
    fn writes_legacy_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");
        let store = JsonFileStore::new(&path);

        store.save(&[make_appointment("10:00")]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"appointment_date\": \"2099-09-30\""));
        assert!(content.contains("\"appointment_time\": \"10:00\""));
        assert!(content.contains("\"appointment_id\""));
        assert!(content.contains("\"customer_name\": \"John Doe\""));
    }

    #[test]
    fn reads_legacy_records_without_optional_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");
        std::fs::write(
            &path,
            r#"[{
                "customer_name": "John Doe",
                "vehicle_type": "Sedan",
                "appointment_date": "2099-09-30",
                "appointment_time": "10:00",
                "maintenance_type": "Oil Change",
                "appointment_id": "legacy-id-1"
            }]"#,
        )
        .unwrap();

        let loaded = JsonFileStore::new(path).load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "legacy-id-1");
        assert!(!loaded[0].is_emergency);
        assert_eq!(loaded[0].email, None);
    }
}
