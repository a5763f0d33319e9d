//! List free slots for a day.

use anyhow::Result;
use owo_colors::OwoColorize;
use werkstatt_core::appointment::parse_date;
use werkstatt_core::scheduler::Scheduler;
use werkstatt_core::store::AppointmentStore;

pub fn run<S: AppointmentStore>(scheduler: &Scheduler<S>, date_str: &str) -> Result<()> {
    let date = parse_date(date_str)?;
    let free_slots = scheduler.list_free_slots(date);

    if free_slots.is_empty() {
        println!("{}", "No free slots available".dimmed());
        return Ok(());
    }

    println!("{}", date.format("%a %b %-d, %Y").to_string().bold());
    for slot in &free_slots {
        println!("  {}", slot.green());
    }

    Ok(())
}
