// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

// Configuration for the scheduler demo
#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub data_dir: PathBuf,
    pub persist_schedules: bool,

    // Tickers
    pub check_interval: Duration, // schedule match evaluation
    pub clock_interval: Duration, // display clock refresh

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Storage
            data_dir: PathBuf::from("./data"),
            persist_schedules: false,

            // Tickers: the original checks schedules every 60 seconds and
            // refreshes the clock every second, on two independent timers.
            check_interval: Duration::from_secs(60),
            clock_interval: Duration::from_secs(1),

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(dir) = crate::utils::get_app_data_dir() {
            config.data_dir = dir;
        }

        if let Ok(dir) = env::var("AUTOTAB_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Ok(val) = env::var("AUTOTAB_PERSIST_SCHEDULES") {
            if let Ok(persist) = val.parse() {
                config.persist_schedules = persist;
            }
        }

        if let Ok(val) = env::var("AUTOTAB_CHECK_INTERVAL_SECS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.check_interval = Duration::from_secs(secs.max(1));
            }
        }

        if let Ok(val) = env::var("AUTOTAB_CLOCK_INTERVAL_SECS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.clock_interval = Duration::from_secs(secs.max(1));
            }
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', keeping default", level),
            }
        }

        config
    }
}
