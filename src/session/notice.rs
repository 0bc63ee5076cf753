//! Transient status messages for the review form
//!
//! A success notice schedules a clear `ttl` after it is shown. Scheduled clears
//! are never cancelled: when one comes due it wipes whatever notice is current,
//! even one shown later. Error notices schedule nothing and stay until replaced.

use std::time::{Duration, Instant};

/// Default lifetime of a success notice
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message shown under the review form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Current notice plus the clears still waiting to fire
#[derive(Debug, Clone)]
pub struct Notices {
    current: Option<Notice>,
    pending_clears: Vec<Instant>,
    ttl: Duration,
}

impl Default for Notices {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl Notices {
    pub fn new(ttl: Duration) -> Self {
        Self {
            current: None,
            pending_clears: Vec::new(),
            ttl,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Show a success notice and schedule its clear
    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        });
        self.pending_clears.push(now + self.ttl);
    }

    /// Show an error notice (no scheduled clear)
    pub fn error(&mut self, message: impl Into<String>) {
        self.current = Some(Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        });
    }

    /// Fire every clear due at `now`. Returns true if the notice was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.pending_clears.len();
        self.pending_clears.retain(|&due| due > now);
        if self.pending_clears.len() == before {
            return false;
        }
        self.current.take().is_some()
    }

    /// Drop the notice and every pending clear
    pub fn reset(&mut self) {
        self.current = None;
        self.pending_clears.clear();
    }
}
