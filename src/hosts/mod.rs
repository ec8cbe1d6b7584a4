// src/hosts/mod.rs
//
// Capabilities that belong to the host browser extension. The demo only ever
// wires in stubs that log what the real extension would do; a port running
// inside an actual extension runtime would supply working implementations.

use crate::models::ProfileRecord;

/// Opens a URL in a new tab on behalf of a schedule match.
pub trait TabHost: Send + Sync {
    fn open_tab(&self, url: &str);
}

/// Populates form fields on a designated external page.
pub trait FormFiller: Send + Sync {
    fn fill(&self, record: &ProfileRecord);
}

/// No-op stand-in for the extension runtime's tab API.
pub struct StubTabHost;

impl TabHost for StubTabHost {
    fn open_tab(&self, url: &str) {
        log::info!("Would open: {}", url);
    }
}

/// No-op stand-in for a content-script form filler.
pub struct StubFormFiller;

impl FormFiller for StubFormFiller {
    fn fill(&self, record: &ProfileRecord) {
        log::info!(
            "Would fill {} field(s) on the target page",
            record.filled_fields()
        );
    }
}

#[cfg(test)]
pub(crate) use testing::RecordingTabHost;

#[cfg(test)]
mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Test double that records every URL it is asked to open.
    #[derive(Default)]
    pub struct RecordingTabHost {
        opened: Mutex<Vec<String>>,
    }

    impl RecordingTabHost {
        pub fn opened(&self) -> Vec<String> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl TabHost for RecordingTabHost {
        fn open_tab(&self, url: &str) {
            self.opened.lock().unwrap().push(url.to_string());
        }
    }
}
