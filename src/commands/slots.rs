//! Show every slot of a day with its free/booked status.

use anyhow::Result;
use owo_colors::OwoColorize;
use werkstatt_core::appointment::parse_date;
use werkstatt_core::scheduler::Scheduler;
use werkstatt_core::store::AppointmentStore;

use crate::render::Render;

pub fn run<S: AppointmentStore>(scheduler: &Scheduler<S>, date_str: &str) -> Result<()> {
    let date = parse_date(date_str)?;

    println!("{}", date.format("%a %b %-d, %Y").to_string().bold());
    for entry in scheduler.slot_statuses(date) {
        println!("  {}", entry.render());
    }

    Ok(())
}
