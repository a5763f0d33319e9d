//! Edit fields of an existing appointment.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use werkstatt_core::scheduler::{AppointmentUpdate, Scheduler};
use werkstatt_core::store::AppointmentStore;

pub fn run<S: AppointmentStore>(
    scheduler: &mut Scheduler<S>,
    id: &str,
    date: Option<String>,
    time: Option<String>,
    customer: Option<String>,
    vehicle: Option<String>,
    maintenance: Option<String>,
) -> Result<()> {
    let update = AppointmentUpdate {
        customer_name: customer,
        vehicle_type: vehicle,
        date,
        time,
        maintenance_type: maintenance,
    };

    if update.is_empty() {
        bail!(
            "Nothing to change. Pass at least one of --date, --time, --customer, --vehicle, --maintenance."
        );
    }

    scheduler.update(id, update)?;

    if let Some(updated) = scheduler.get(id) {
        println!("{}", format!("  Updated: {}", updated).green());
    }

    Ok(())
}
