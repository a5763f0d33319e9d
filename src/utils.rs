//! Caller-side input policy.
//!
//! These checks are booking policy, deliberately kept out of the engine
//! so it stays testable with arbitrary dates: the engine will happily
//! book any date, the CLI only lets customers book from tomorrow onwards.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use werkstatt_core::appointment::parse_date;

/// Parse a booking date and require it to be tomorrow or later.
pub fn parse_booking_date(s: &str) -> Result<NaiveDate> {
    let date = parse_date(s)?;
    let today = chrono::Local::now().date_naive();

    if date <= today {
        bail!("The date must be from tomorrow onwards");
    }

    Ok(date)
}

/// Minimal structural check for a contact email.
pub fn validate_email(s: &str) -> Result<()> {
    let valid = match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };

    if !valid {
        bail!("Invalid email address '{s}'");
    }

    Ok(())
}
