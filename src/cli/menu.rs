// src/cli/menu.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use anyhow::Result;
use inquire::{Confirm, Select, Text};

use crate::cli::handlers::{lock, print_profile, print_schedule_list};
use crate::core::profile::ProfileStore;
use crate::core::schedule::ScheduleStore;
use crate::hosts::FormFiller;
use crate::models::ProfileRecord;

pub async fn run_cli_menu(
    schedules: Arc<Mutex<ScheduleStore>>,
    profile: Arc<Mutex<ProfileStore>>,
    filler: Arc<dyn FormFiller>,
    display: Arc<RwLock<String>>,
    should_exit: Arc<AtomicBool>,
) -> Result<()> {
    println!("🕐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║         🕐 AUTOTAB SCHEDULER         ║");
    println!("╚══════════════════════════════════════╝");
    println!("Automatically open websites at your scheduled times (demo: actions are simulated).");

    let mut exit_requested = false;
    while !exit_requested && !should_exit.load(Ordering::SeqCst) {
        let options = vec![
            "➕  Schedule a new website",
            "🌐  View scheduled websites",
            "🔀  Toggle a schedule",
            "🗑️  Remove a schedule",
            "🕐  Show clock",
            "📝  Edit autofill data",
            "💾  Save autofill data",
            "🧹  Clear autofill data",
            "🪄  Simulate form fill",
            "❌  Exit",
        ];

        // Use a blocking task so the ctrlc exit flag still gets checked
        let selection_result = tokio::task::spawn_blocking(move || {
            Select::new("Choose an option:", options)
                .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
                .with_page_size(12)
                .prompt_skippable()
        })
        .await?;

        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        match selection_result {
            Ok(Some(selection)) => match selection {
                "➕  Schedule a new website" => {
                    let site_name = Text::new("Site name (optional, e.g. IRCTC, Gmail):")
                        .with_default("")
                        .prompt()?;
                    let url = Text::new("Website URL (e.g. irctc.co.in):").prompt()?;
                    let time = Text::new("Time (24-hour HH:MM, e.g. 09:30):").prompt()?;

                    // Validation failures already surfaced as an error toast
                    let _ = lock(&schedules, "schedule store")?.add(&url, &time, &site_name);
                }
                "🌐  View scheduled websites" => {
                    let store = lock(&schedules, "schedule store")?;
                    print_schedule_list(&store);
                }
                "🔀  Toggle a schedule" => {
                    if let Some(id) = pick_schedule(&schedules, "Toggle which schedule?")? {
                        lock(&schedules, "schedule store")?.toggle(&id);
                    }
                }
                "🗑️  Remove a schedule" => {
                    if let Some(id) = pick_schedule(&schedules, "Remove which schedule?")? {
                        lock(&schedules, "schedule store")?.remove(&id);
                    }
                }
                "🕐  Show clock" => match display.read() {
                    Ok(text) if !text.is_empty() => println!("{}", text),
                    _ => println!("Clock not ticking yet..."),
                },
                "📝  Edit autofill data" => {
                    edit_profile(&profile)?;
                }
                "💾  Save autofill data" => {
                    lock(&profile, "profile store")?.save()?;
                }
                "🧹  Clear autofill data" => {
                    let confirmed = Confirm::new("Clear all stored autofill data?")
                        .with_default(false)
                        .prompt()?;
                    if confirmed {
                        lock(&profile, "profile store")?.clear()?;
                    }
                }
                "🪄  Simulate form fill" => {
                    lock(&profile, "profile store")?.simulate_fill(filler.as_ref());
                }
                "❌  Exit" => {
                    exit_requested = true;
                }
                _ => {}
            },
            Ok(None) => {
                // Esc pressed, show the menu again
            }
            Err(inquire::InquireError::OperationInterrupted) => {
                // Ctrl+C inside a prompt; the signal handler has set the flag
                exit_requested = true;
            }
            Err(e) => {
                log::error!("Menu prompt failed: {}", e);
                exit_requested = true;
            }
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

// Let the user pick an entry from the current list; returns its id.
fn pick_schedule(
    schedules: &Mutex<ScheduleStore>,
    message: &str,
) -> Result<Option<String>> {
    let lines: Vec<String> = {
        let store = lock(schedules, "schedule store")?;
        store
            .list()
            .iter()
            .map(|e| {
                format!(
                    "{} ({}) at {} [{}]",
                    e.display_label(),
                    e.url,
                    e.time,
                    if e.enabled { "on" } else { "off" }
                )
            })
            .collect()
    };

    if lines.is_empty() {
        println!("No schedules yet.");
        return Ok(None);
    }

    let choice = match Select::new(message, lines).raw_prompt() {
        Ok(choice) => choice,
        Err(inquire::InquireError::OperationCanceled) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let store = lock(schedules, "schedule store")?;
    Ok(store.list().get(choice.index).map(|e| e.id.clone()))
}

fn edit_profile(profile: &Mutex<ProfileStore>) -> Result<()> {
    loop {
        let mut options: Vec<&str> = ProfileRecord::FIELDS.to_vec();
        options.push("Done");

        let field = Select::new("Edit which field?", options)
            .with_page_size(12)
            .prompt()?;
        if field == "Done" {
            return Ok(());
        }

        let current = lock(profile, "profile store")?
            .record()
            .get(field)
            .unwrap_or("")
            .to_string();
        let value = Text::new(&format!("{}:", field))
            .with_initial_value(&current)
            .prompt()?;

        lock(profile, "profile store")?.set_field(field, &value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosts::StubFormFiller;
    use crate::notify::RecordingNotifier;
    use crate::storage::StorageArea;

    // A set shutdown flag must let main regain control (and stop the
    // scheduler) without the menu blocking on a prompt.
    #[tokio::test]
    async fn menu_returns_once_the_shutdown_flag_is_set() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(StorageArea::open(dir.path()).unwrap());
        let notifier = Arc::new(RecordingNotifier::default());

        let schedules = Arc::new(Mutex::new(ScheduleStore::new(notifier.clone())));
        let profile = Arc::new(Mutex::new(ProfileStore::load(storage, notifier.clone())));
        let filler: Arc<dyn FormFiller> = Arc::new(StubFormFiller);
        let display = Arc::new(RwLock::new(String::new()));
        let should_exit = Arc::new(AtomicBool::new(true));

        run_cli_menu(schedules, profile, filler, display, should_exit)
            .await
            .unwrap();
    }
}
