//! Book a new appointment.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;
use werkstatt_core::appointment::Appointment;
use werkstatt_core::notify::Notifier;
use werkstatt_core::scheduler::Scheduler;
use werkstatt_core::store::AppointmentStore;

use crate::notify::ConsoleNotifier;
use crate::utils;

#[allow(clippy::too_many_arguments)]
pub fn run<S: AppointmentStore>(
    scheduler: &mut Scheduler<S>,
    date: Option<String>,
    time: Option<String>,
    customer: Option<String>,
    vehicle: Option<String>,
    maintenance: Option<String>,
    email: Option<String>,
    emergency: bool,
) -> Result<()> {
    let interactive = date.is_none() || time.is_none() || customer.is_none();

    // --- Date ---
    let (date_str, booking_date) = match date {
        Some(s) => {
            let parsed = utils::parse_booking_date(&s)?;
            (s, parsed)
        }
        None => prompt_booking_date()?,
    };

    // --- Slot ---
    let free_slots = scheduler.list_free_slots(booking_date);
    if free_slots.is_empty() {
        bail!("No free slots on {}. Try a different date.", booking_date);
    }

    let time_str = match time {
        Some(s) => s,
        None => {
            let selection = Select::new()
                .with_prompt("  Slot")
                .items(&free_slots)
                .default(0)
                .interact()?;
            // Book at the start of the chosen slot
            slot_start(&free_slots[selection]).to_string()
        }
    };

    // --- Details ---
    let customer = match customer {
        Some(c) => c,
        None => Input::<String>::new().with_prompt("  Customer name").interact_text()?,
    };

    let vehicle = match vehicle {
        Some(v) => v,
        None if interactive => Input::<String>::new().with_prompt("  Vehicle type").interact_text()?,
        None => bail!("Missing --vehicle"),
    };

    let maintenance = match maintenance {
        Some(m) => m,
        None if interactive => {
            Input::<String>::new().with_prompt("  Type of maintenance").interact_text()?
        }
        None => bail!("Missing --maintenance"),
    };

    // --- Contact ---
    let email = match email {
        Some(e) => {
            utils::validate_email(&e)?;
            Some(e)
        }
        None if interactive => prompt_optional_email()?,
        None => None,
    };

    let emergency = if emergency {
        true
    } else if interactive {
        Confirm::new().with_prompt("  Emergency booking?").default(false).interact()?
    } else {
        false
    };

    let appointment =
        Appointment::new(&customer, &vehicle, &date_str, &time_str, &maintenance, emergency, email)?;
    let summary = appointment.to_string();

    scheduler.add(appointment.clone())?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Booked: {}", summary).green());
    println!("{}", format!("  Id: {}", appointment.id).dimmed());

    ConsoleNotifier.send_confirmation(&appointment);

    Ok(())
}

/// Prompt for a booking date until one parses and lies in the future.
fn prompt_booking_date() -> Result<(String, NaiveDate)> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Date (YYYY-MM-DD, tomorrow onwards)")
            .interact_text()?;

        match utils::parse_booking_date(&input) {
            Ok(date) => return Ok((input, date)),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Prompt for an optional contact email; empty input skips it.
fn prompt_optional_email() -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Email for confirmation (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?;

        if input.is_empty() {
            return Ok(None);
        }

        match utils::validate_email(&input) {
            Ok(()) => return Ok(Some(input)),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// The start time of a slot label like "08:00 - 10:00".
fn slot_start(label: &str) -> &str {
    label.split(" - ").next().unwrap_or(label)
}
