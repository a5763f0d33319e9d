//! Appointment statistics over a date range.

use anyhow::Result;
use owo_colors::OwoColorize;
use werkstatt_core::appointment::parse_date;
use werkstatt_core::scheduler::Scheduler;
use werkstatt_core::store::AppointmentStore;

pub fn run<S: AppointmentStore>(scheduler: &Scheduler<S>, from: &str, to: &str) -> Result<()> {
    let start = parse_date(from)?;
    let end = parse_date(to)?;
    let stats = scheduler.statistics(start, end)?;

    println!("{}", format!("{} to {}", start, end).bold());
    println!("  Appointments:           {}", stats.total_appointments);
    println!("  Days in range:          {}", stats.days_in_range);
    println!("  Days with appointments: {}", stats.days_with_appointments);
    println!("  Average per day:        {:.2}", stats.average_per_day);

    Ok(())
}
