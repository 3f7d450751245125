use std::{sync::Arc, time::Duration};

use crate::prefs::PreferenceStore;

pub const COOKIE_ACK_KEY: &str = "cookie-notice-acknowledged";
/// The notice appears after a short delay rather than on first paint.
pub const COOKIE_NOTICE_DELAY: Duration = Duration::from_millis(2000);

/// The informational cookie notice. Hidden until the mount delay elapses,
/// and permanently dismissed once acknowledged.
pub struct CookieNotice {
    store: Arc<dyn PreferenceStore>,
    visible: bool,
    armed: bool,
}

impl CookieNotice {
    /// Returns the notice plus the delay after which the host should call
    /// [`on_delay_elapsed`](Self::on_delay_elapsed); `None` when a previous
    /// visit already acknowledged it.
    pub fn mount(store: Arc<dyn PreferenceStore>) -> (CookieNotice, Option<Duration>) {
        let acknowledged = store.get(COOKIE_ACK_KEY).as_deref() == Some("true");
        let notice = CookieNotice {
            store,
            visible: false,
            armed: !acknowledged,
        };
        let delay = notice.armed.then_some(COOKIE_NOTICE_DELAY);
        (notice, delay)
    }

    pub fn on_delay_elapsed(&mut self) {
        if self.armed {
            self.visible = true;
        }
    }

    /// Records the acknowledgement and hides the notice. Acknowledging
    /// before the delay fires keeps it hidden for good.
    pub fn acknowledge(&mut self) {
        self.armed = false;
        self.visible = false;
        self.store.set(COOKIE_ACK_KEY, "true");
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
#[path = "tests/cookie_tests.rs"]
mod tests;
