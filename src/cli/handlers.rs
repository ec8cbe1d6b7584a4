// src/cli/handlers.rs
use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use console::style;

use crate::cli::commands::{CliCommand, ProfileCommand};
use crate::core::clock::Clock;
use crate::core::profile::ProfileStore;
use crate::core::schedule::ScheduleStore;
use crate::hosts::{FormFiller, TabHost};
use crate::models::ProfileRecord;
use crate::utils::{to_12_hour, truncate_string};

// Handlers for one-shot CLI commands (no background tickers involved).
pub fn handle_command(
    command: CliCommand,
    schedules: &Mutex<ScheduleStore>,
    profile: &Mutex<ProfileStore>,
    clock: &dyn Clock,
    tabs: &dyn TabHost,
    filler: &dyn FormFiller,
) -> Result<()> {
    match command {
        CliCommand::Add { url, time, name } => {
            let entry = lock(schedules, "schedule store")?.add(
                &url,
                &time,
                name.as_deref().unwrap_or(""),
            )?;
            println!(
                "{} {} at {} (id {})",
                style("Scheduled").green(),
                entry.display_label(),
                entry.time,
                entry.id
            );
        }
        CliCommand::List => {
            let store = lock(schedules, "schedule store")?;
            print_schedule_list(&store);
        }
        CliCommand::Toggle { id } => {
            let mut store = lock(schedules, "schedule store")?;
            store.toggle(&id);
            match store.list().iter().find(|e| e.id == id) {
                Some(entry) => println!(
                    "{} is now {}",
                    entry.display_label(),
                    if entry.enabled { "enabled" } else { "disabled" }
                ),
                None => println!("No schedule with id {}", id),
            }
        }
        CliCommand::Remove { id } => {
            lock(schedules, "schedule store")?.remove(&id);
        }
        CliCommand::Check => {
            let fired = lock(schedules, "schedule store")?.check_due(clock, tabs);
            println!("{} schedule(s) due this minute", fired);
        }
        CliCommand::Profile { command } => match command {
            ProfileCommand::Show => {
                print_profile(lock(profile, "profile store")?.record());
            }
            ProfileCommand::Set { field, value } => {
                let mut store = lock(profile, "profile store")?;
                store.set_field(&field, &value);
                store.save()?;
            }
            ProfileCommand::Clear => {
                lock(profile, "profile store")?.clear()?;
            }
            ProfileCommand::Fill => {
                lock(profile, "profile store")?.simulate_fill(filler);
            }
        },
    }

    Ok(())
}

pub fn print_schedule_list(store: &ScheduleStore) {
    let entries = store.list();
    println!(
        "🌐 {} ({})",
        style("Scheduled Websites").bold(),
        entries.len()
    );

    if entries.is_empty() {
        println!("   No schedules yet. Add your first website schedule to get started!");
        return;
    }

    for entry in entries {
        let state = if entry.enabled {
            style("on ").green()
        } else {
            style("off").dim()
        };
        println!(
            "   [{}] {:<24} {:<40} {} ({})  {}",
            entry.id,
            truncate_string(entry.display_label(), 24),
            truncate_string(&entry.url, 40),
            entry.time,
            to_12_hour(&entry.time),
            state
        );
    }
}

pub fn print_profile(record: &ProfileRecord) {
    println!("📝 {}", style("Autofill Information").bold());
    for field in ProfileRecord::FIELDS {
        let value = record.get(field).unwrap_or("");
        if value.is_empty() {
            println!("   {:<16} {}", field, style("(empty)").dim());
        } else {
            println!("   {:<16} {}", field, value);
        }
    }
}

pub(crate) fn lock<'a, T>(mutex: &'a Mutex<T>, what: &str) -> Result<MutexGuard<'a, T>> {
    mutex
        .lock()
        .map_err(|e| anyhow!("{} lock poisoned: {}", what, e))
}
