//! Console delivery for customer notifications.

use owo_colors::OwoColorize;
use werkstatt_core::appointment::Appointment;
use werkstatt_core::notify::Notifier;

/// Prints notification bodies to the terminal instead of sending them.
/// Stands in until an outbound mail channel is wired up; delivery is
/// fire-and-forget either way, so nothing here can fail a booking.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn send_confirmation(&self, appointment: &Appointment) {
        let Some(email) = appointment.email.as_deref() else {
            return;
        };

        println!();
        println!("{}", format!("  Confirmation for {}:", email).dimmed());
        println!(
            "  Dear {}, your appointment is scheduled for {} at {} ({}).",
            appointment.customer_name,
            appointment.date,
            appointment.time.format("%H:%M"),
            appointment.maintenance_type,
        );
    }

    fn send_reminder(&self, appointment: &Appointment) {
        let Some(email) = appointment.email.as_deref() else {
            return;
        };

        println!("{}", format!("  Reminder for {}:", email).dimmed());
        println!(
            "  Dear {}, a reminder of your appointment on {} at {} ({}).",
            appointment.customer_name,
            appointment.date,
            appointment.time.format("%H:%M"),
            appointment.maintenance_type,
        );
    }
}
