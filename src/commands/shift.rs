//! Move the booking in a slot to the next free one.
//!
//! Used when an emergency comes in: the displaced regular booking moves
//! to the next free slot, same day or later.

use anyhow::Result;
use owo_colors::OwoColorize;
use werkstatt_core::appointment::parse_date;
use werkstatt_core::scheduler::Scheduler;
use werkstatt_core::store::AppointmentStore;

pub fn run<S: AppointmentStore>(scheduler: &mut Scheduler<S>, date_str: &str, slot: &str) -> Result<()> {
    let date = parse_date(date_str)?;
    let target = scheduler.shift(date, slot)?;

    println!("{}", format!("  Moved to {}", target).green());
    Ok(())
}
