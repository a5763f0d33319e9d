//! Scheduling engine for the werkstatt appointment planner.
//!
//! This crate provides the core the CLI front-end drives:
//! - `Appointment` and the fixed daily `SlotGrid`
//! - `Scheduler`, which owns the appointment book and guarantees that no
//!   two bookings ever occupy the same slot
//! - the `AppointmentStore` persistence port and the `Notifier` port

pub mod appointment;
pub mod config;
pub mod error;
pub mod notify;
pub mod scheduler;
pub mod slots;
pub mod stats;
pub mod store;

// Re-export the main types at crate root for convenience
pub use appointment::Appointment;
pub use error::{ScheduleError, ScheduleResult};
pub use scheduler::{AppointmentUpdate, Scheduler, ShiftTarget, SlotStatus};
pub use slots::{Slot, SlotGrid};
