//! List appointments for a day.

use anyhow::Result;
use owo_colors::OwoColorize;
use werkstatt_core::appointment::parse_date;
use werkstatt_core::scheduler::Scheduler;
use werkstatt_core::store::AppointmentStore;

use crate::render::Render;

pub fn run<S: AppointmentStore>(scheduler: &Scheduler<S>, date_str: &str) -> Result<()> {
    let date = parse_date(date_str)?;
    let appointments = scheduler.list_appointments(date);

    if appointments.is_empty() {
        println!("{}", "No appointments found".dimmed());
        return Ok(());
    }

    println!("{}", date.format("%a %b %-d, %Y").to_string().bold());
    for appointment in &appointments {
        println!("  {}", appointment.render());
    }

    Ok(())
}
