//! Cancel an appointment by id or contact email.

use anyhow::Result;
use owo_colors::OwoColorize;
use werkstatt_core::ScheduleError;
use werkstatt_core::scheduler::Scheduler;
use werkstatt_core::store::AppointmentStore;

pub fn run<S: AppointmentStore>(scheduler: &mut Scheduler<S>, key: &str) -> Result<()> {
    // Id is the primary key; fall back to the contact email so customers
    // can cancel without digging out their booking id.
    match scheduler.remove_by_id(key) {
        Ok(()) => {}
        Err(ScheduleError::NotFound(_)) => scheduler.remove_by_email(key)?,
        Err(e) => return Err(e.into()),
    }

    println!("{}", "  Appointment cancelled".green());
    Ok(())
}
