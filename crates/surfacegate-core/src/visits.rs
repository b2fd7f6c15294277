//! Surface visit analytics, delivered at most once per calendar month.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::{debug, warn};
use url::Url;

use surfacegate_protocols::{AnalyticsSink, PersistentKv, Surface};

const ONENOTE_HOST: &str = "onenote.officeapps.live.com";

/// Where the content script is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub hostname: String,
    pub pathname: String,
    /// Whether the page is embedded in a frame (top != self).
    pub framed: bool,
}

impl PageContext {
    pub fn from_url(url: &str, framed: bool) -> Option<Self> {
        let parsed = Url::parse(url).ok()?;
        Some(Self {
            hostname: parsed.host_str().unwrap_or_default().to_string(),
            pathname: parsed.path().to_string(),
            framed,
        })
    }
}

/// Kind of Google Docs editor a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocsDocumentKind {
    Document,
    Spreadsheet,
    Presentation,
}

impl DocsDocumentKind {
    pub fn from_path(pathname: &str) -> Option<Self> {
        if pathname.starts_with("/document/") {
            Some(Self::Document)
        } else if pathname.starts_with("/spreadsheets/") {
            Some(Self::Spreadsheet)
        } else if pathname.starts_with("/presentation/") {
            Some(Self::Presentation)
        } else {
            None
        }
    }
}

impl fmt::Display for DocsDocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Document => "Document",
            Self::Spreadsheet => "Spreadsheet",
            Self::Presentation => "Presentation",
        })
    }
}

/// The visit event for a page, if that surface reports visits at all.
pub fn visit_event(surface: Surface, page: &PageContext) -> Option<String> {
    match surface {
        Surface::GoogleDocs => DocsDocumentKind::from_path(&page.pathname)
            .map(|kind| format!("DCBrowserExt:DocsGoogle:Visited:{kind}")),
        Surface::OneNote if page.framed && page.hostname == ONENOTE_HOST => {
            Some("DCBrowserExt:OneNote:Visited".to_string())
        }
        _ => None,
    }
}

/// Sends visit events once per session and once per calendar month.
pub struct VisitReporter {
    kv: Arc<dyn PersistentKv>,
    analytics: Arc<dyn AnalyticsSink>,
    sent_this_session: Mutex<HashSet<String>>,
}

impl VisitReporter {
    pub fn new(kv: Arc<dyn PersistentKv>, analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self {
            kv,
            analytics,
            sent_this_session: Mutex::new(HashSet::new()),
        }
    }

    /// Report a visit now. Returns whether an event was sent.
    pub fn report(&self, surface: Surface, page: &PageContext) -> bool {
        self.report_at(surface, page, Utc::now())
    }

    pub fn report_at(&self, surface: Surface, page: &PageContext, now: DateTime<Utc>) -> bool {
        match visit_event(surface, page) {
            Some(event) => self.send_once_per_month(&event, now),
            None => false,
        }
    }

    fn send_once_per_month(&self, event: &str, now: DateTime<Utc>) -> bool {
        let mut session = self.sent_this_session.lock();
        if session.contains(event) {
            return false;
        }

        let month = now.format("%Y-%m").to_string();
        let key = format!("{event}-last-sent");
        match self.kv.get_item(&key) {
            Ok(Some(last)) if last == month => {
                debug!("{} already sent in {}", event, month);
                session.insert(event.to_string());
                return false;
            }
            Ok(_) => {}
            Err(e) => warn!("Monthly dedup for {} unavailable: {}", event, e),
        }

        self.analytics.send(event);
        session.insert(event.to_string());
        if let Err(e) = self.kv.set_item(&key, &month) {
            warn!("Failed to record {} delivery: {}", event, e);
        }
        true
    }
}

#[cfg(test)]
#[path = "visits_tests.rs"]
mod tests;
