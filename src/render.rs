//! Terminal rendering for core types.
//!
//! Extension trait adding colored output to werkstatt-core types using
//! owo_colors; the core itself never prints.

use owo_colors::OwoColorize;
use werkstatt_core::appointment::Appointment;
use werkstatt_core::scheduler::SlotStatus;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Appointment {
    fn render(&self) -> String {
        let time = format!("{:>5}", self.time.format("%H:%M"));
        let details = format!("{} ({}), {}", self.customer_name, self.vehicle_type, self.maintenance_type);

        let mut line = format!("{} {}", time.bold(), details);
        if self.is_emergency {
            line.push_str(&format!(" {}", "[emergency]".red()));
        }
        line.push_str(&format!("  {}", self.id.dimmed()));
        line
    }
}

impl Render for (String, SlotStatus) {
    fn render(&self) -> String {
        let (label, status) = self;
        match status {
            SlotStatus::Free => format!("{}  {}", label, "free".green()),
            SlotStatus::Booked => format!("{}  {}", label, "booked".red()),
        }
    }
}
