//! Show reminders due for a day.

use anyhow::Result;
use chrono::Duration;
use owo_colors::OwoColorize;
use werkstatt_core::appointment::parse_date;
use werkstatt_core::notify::Notifier;
use werkstatt_core::scheduler::Scheduler;
use werkstatt_core::store::AppointmentStore;

use crate::notify::ConsoleNotifier;

pub fn run<S: AppointmentStore>(scheduler: &Scheduler<S>, date_str: Option<&str>) -> Result<()> {
    let date = match date_str {
        Some(s) => parse_date(s)?,
        // Reminders go out the day before the appointment.
        None => chrono::Local::now().date_naive() + Duration::days(1),
    };

    let due = scheduler.due_reminders(date);
    if due.is_empty() {
        println!("{}", "No reminders to send".dimmed());
        return Ok(());
    }

    let notifier = ConsoleNotifier;
    for appointment in &due {
        notifier.send_reminder(appointment);
    }

    let label = if due.len() == 1 { "reminder" } else { "reminders" };
    println!("{}", format!("  {} {} for {}", due.len(), label, date).green());

    Ok(())
}
