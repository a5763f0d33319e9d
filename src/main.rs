mod commands;
mod notify;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use werkstatt_core::config::WorkshopConfig;
use werkstatt_core::scheduler::Scheduler;
use werkstatt_core::store::JsonFileStore;

#[derive(Parser)]
#[command(name = "werkstatt")]
#[command(about = "Book and manage workshop appointments against the daily slot grid")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Book a new appointment (interactive unless all details are given)
    Book {
        /// Appointment date (YYYY-MM-DD, tomorrow onwards)
        #[arg(long)]
        date: Option<String>,

        /// Slot start time (HH:MM)
        #[arg(long)]
        time: Option<String>,

        /// Customer name
        #[arg(long)]
        customer: Option<String>,

        /// Vehicle type
        #[arg(long)]
        vehicle: Option<String>,

        /// Type of maintenance
        #[arg(long)]
        maintenance: Option<String>,

        /// Contact email for confirmation and reminders
        #[arg(long)]
        email: Option<String>,

        /// Emergency booking
        #[arg(long)]
        emergency: bool,
    },
    /// List appointments for a day
    List {
        /// Date to list (YYYY-MM-DD)
        date: String,
    },
    /// List free slots for a day
    Free {
        /// Date to check (YYYY-MM-DD)
        date: String,
    },
    /// Show every slot of a day with its free/booked status
    Slots {
        /// Date to check (YYYY-MM-DD)
        date: String,
    },
    /// Edit fields of an existing appointment
    Edit {
        /// Appointment id
        id: String,

        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// New slot start time (HH:MM)
        #[arg(long)]
        time: Option<String>,

        /// New customer name
        #[arg(long)]
        customer: Option<String>,

        /// New vehicle type
        #[arg(long)]
        vehicle: Option<String>,

        /// New type of maintenance
        #[arg(long)]
        maintenance: Option<String>,
    },
    /// Cancel an appointment by id or contact email
    Cancel {
        /// Appointment id or contact email
        key: String,
    },
    /// Move the booking in a slot to the next free one (emergency rebooking)
    Shift {
        /// Date of the booked slot (YYYY-MM-DD)
        date: String,

        /// Slot label, e.g. "08:00 - 10:00"
        slot: String,
    },
    /// Appointment statistics over a date range
    Stats {
        /// Range start (YYYY-MM-DD)
        from: String,

        /// Range end (YYYY-MM-DD)
        to: String,
    },
    /// Show reminders due for a day (defaults to tomorrow)
    Remind {
        /// Date to remind for (YYYY-MM-DD)
        date: Option<String>,
    },
    /// Write a commented default config file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init runs before the scheduler exists; everything else needs one.
    if let Commands::Init = cli.command {
        return commands::init::run();
    }

    let config = WorkshopConfig::load()?;
    let grid = config.grid()?;
    let store = JsonFileStore::new(&config.data_file);
    let mut scheduler = Scheduler::open(grid, store)?.with_look_ahead(config.look_ahead_days);

    match cli.command {
        Commands::Book {
            date,
            time,
            customer,
            vehicle,
            maintenance,
            email,
            emergency,
        } => commands::book::run(&mut scheduler, date, time, customer, vehicle, maintenance, email, emergency),
        Commands::List { date } => commands::list::run(&scheduler, &date),
        Commands::Free { date } => commands::free::run(&scheduler, &date),
        Commands::Slots { date } => commands::slots::run(&scheduler, &date),
        Commands::Edit {
            id,
            date,
            time,
            customer,
            vehicle,
            maintenance,
        } => commands::edit::run(&mut scheduler, &id, date, time, customer, vehicle, maintenance),
        Commands::Cancel { key } => commands::cancel::run(&mut scheduler, &key),
        Commands::Shift { date, slot } => commands::shift::run(&mut scheduler, &date, &slot),
        Commands::Stats { from, to } => commands::stats::run(&scheduler, &from, &to),
        Commands::Remind { date } => commands::remind::run(&scheduler, date.as_deref()),
        Commands::Init => unreachable!("handled above"),
    }
}
