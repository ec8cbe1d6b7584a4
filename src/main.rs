use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use clap::Parser;

mod cli;
mod core;
mod hosts;
mod models;
mod notify;
mod scheduler;
mod storage;
mod utils;

use crate::cli::Args;
use crate::core::clock::{Clock, SystemClock};
use crate::core::config::Config;
use crate::core::profile::ProfileStore;
use crate::core::schedule::ScheduleStore;
use crate::hosts::{FormFiller, StubFormFiller, StubTabHost, TabHost};
use crate::notify::{ConsoleNotifier, Notifier};
use crate::scheduler::Scheduler;
use crate::storage::StorageArea;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    // Logger first so Config::load can report bad env values; the configured
    // level is applied right after.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Trace)
        .format_timestamp_secs()
        .init();

    let config = Config::load();
    log::set_max_level(config.log_level);

    log::info!("🕐 Starting AutoTab - Website Scheduler & Autofill Vault (demo)");

    let data_dir = args.data_dir.clone().unwrap_or_else(|| config.data_dir.clone());
    let storage = Arc::new(StorageArea::open(&data_dir)?);
    log::debug!("Storage area at {}", data_dir.display());

    // Collaborators: the toast sink is real (terminal), the browser-extension
    // hosts are no-op stubs that only log what they would have done.
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let tabs: Arc<dyn TabHost> = Arc::new(StubTabHost);
    let filler: Arc<dyn FormFiller> = Arc::new(StubFormFiller);

    let persist_schedules = args.persist_schedules || config.persist_schedules;
    let schedules = Arc::new(Mutex::new(if persist_schedules {
        log::info!("Schedule persistence enabled (diverges from the original, which forgets schedules on restart)");
        ScheduleStore::with_storage(Arc::clone(&storage), Arc::clone(&notifier))
    } else {
        ScheduleStore::new(Arc::clone(&notifier))
    }));
    let profile = Arc::new(Mutex::new(ProfileStore::load(
        Arc::clone(&storage),
        Arc::clone(&notifier),
    )));

    // One-shot commands run without the background tickers
    if let Some(command) = args.command {
        return cli::handlers::handle_command(
            command,
            &schedules,
            &profile,
            clock.as_ref(),
            tabs.as_ref(),
            filler.as_ref(),
        );
    }

    let should_exit = Arc::new(AtomicBool::new(false));
    {
        let should_exit = Arc::clone(&should_exit);
        // The flag makes the menu loop wind down on its own, so the
        // scheduler still gets stopped before the process exits.
        ctrlc::set_handler(move || {
            log::info!("🔴 Ctrl+C received. Initiating shutdown...");
            should_exit.store(true, Ordering::SeqCst);
        })?;
    }

    // Two decoupled tickers: 1-second display clock, 60-second match pass
    let display = Arc::new(RwLock::new(String::new()));
    let mut scheduler = Scheduler::new(config.check_interval, config.clock_interval);
    scheduler.start(
        Arc::clone(&schedules),
        Arc::clone(&clock),
        Arc::clone(&tabs),
        Arc::clone(&display),
    );

    cli::menu::run_cli_menu(schedules, profile, filler, display, should_exit).await?;

    scheduler.stop();
    log::info!("✅ AutoTab shutdown complete.");

    Ok(())
}
