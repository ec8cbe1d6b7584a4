// src/scheduler/mod.rs
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::interval;

use crate::core::clock::Clock;
use crate::core::schedule::ScheduleStore;
use crate::hosts::TabHost;
use crate::utils::{format_long_date, format_wall_clock};

/// Owns the two interval loops of the active view: the 1-second display
/// clock and the 60-second schedule match pass. The intervals are independent
/// timers on purpose; neither drives the other.
///
/// Both tasks live exactly as long as the scheduler says: `stop` (and drop)
/// aborts them so no timer leaks past the view's lifetime.
pub struct Scheduler {
    check_interval: Duration,
    clock_interval: Duration,
    tasks: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(check_interval: Duration, clock_interval: Duration) -> Self {
        Self {
            check_interval,
            clock_interval,
            tasks: Vec::new(),
        }
    }

    pub fn start(
        &mut self,
        store: Arc<Mutex<ScheduleStore>>,
        clock: Arc<dyn Clock>,
        tabs: Arc<dyn TabHost>,
        display: Arc<RwLock<String>>,
    ) {
        if self.is_running() {
            log::warn!("Scheduler already running, ignoring start");
            return;
        }

        // Display clock: refresh the shared wall-clock text every tick.
        {
            let clock = Arc::clone(&clock);
            let clock_interval = self.clock_interval;
            self.tasks.push(tokio::spawn(async move {
                let mut ticker = interval(clock_interval);
                loop {
                    ticker.tick().await;
                    let now = clock.now();
                    let text = format!("{}\n{}", format_wall_clock(now), format_long_date(now));
                    if let Ok(mut slot) = display.write() {
                        *slot = text;
                    }
                }
            }));
        }

        // Match pass: one evaluation per interval. The first interval tick
        // completes immediately, so it is consumed up front; the original
        // fires its first check a full period after startup.
        {
            let check_interval = self.check_interval;
            self.tasks.push(tokio::spawn(async move {
                let mut ticker = interval(check_interval);
                ticker.tick().await;
                loop {
                    ticker.tick().await;
                    let fired = match store.lock() {
                        Ok(store) => store.check_due(clock.as_ref(), tabs.as_ref()),
                        Err(e) => {
                            log::error!("Schedule store lock poisoned: {}", e);
                            continue;
                        }
                    };
                    if fired > 0 {
                        log::debug!("{} schedule(s) fired this pass", fired);
                    }
                }
            }));
        }

        log::info!(
            "Scheduler started (match every {:?}, clock every {:?})",
            self.check_interval,
            self.clock_interval
        );
    }

    pub fn stop(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        !self.tasks.is_empty()
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
